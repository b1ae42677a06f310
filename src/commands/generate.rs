//! # Generate Command Implementation
//!
//! Assembles the federation configuration and writes it out, either to
//! stdout (default) or to a file, as JSON or YAML. The rendered document is
//! what a host build script hands to its module federation plugin.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use federation_config::federation::FederationConfig;
use federation_config::output::{emoji, OutputConfig};
use federation_config::plugin::build_plugin;
use federation_config::render::{render, OutputFormat};
use federation_config::suggestions;

use super::OptionsArgs;

/// Assemble the configuration and write it as JSON or YAML
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub options: OptionsArgs,

    /// Output format (json, yaml)
    #[arg(long, value_name = "FORMAT", default_value = "json")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute the `generate` command.
pub fn execute(args: GenerateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let options = args.options.load()?;
    let format = args.format;

    let factory = |config: FederationConfig| render(&config, format);
    let rendered = build_plugin(&options, &args.options.matcher(), &factory)
        .map_err(suggestions::with_hint)?
        .context("Failed to render configuration")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} configuration for '{}' to {}",
                emoji(&out, "✅", "[OK]"),
                format,
                options.name,
                path.display()
            );
        }
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}
