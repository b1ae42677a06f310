//! # Paths Command Implementation
//!
//! Shows which files the configured glob patterns pick up after exclusion,
//! and the module name each one is exposed under. This is a read-only
//! preview of the `exposes` table.

use anyhow::Result;
use clap::Args;

use federation_config::collect::collect_paths;
use federation_config::exposes::derive_exposes_with;
use federation_config::output::{emoji, OutputConfig};
use federation_config::suggestions;

use super::OptionsArgs;

/// List the files that would be exposed and their module names
#[derive(Args, Debug)]
pub struct PathsArgs {
    #[command(flatten)]
    pub options: OptionsArgs,

    /// Print only the matched paths, one per line
    #[arg(long)]
    pub plain: bool,
}

/// Execute the `paths` command.
pub fn execute(args: PathsArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let options = args.options.load()?;

    let Some(files) = &options.files else {
        eprintln!(
            "{} No files configured for '{}'",
            emoji(&out, "ℹ️", "[INFO]"),
            options.name
        );
        return Ok(());
    };

    let spec = files.spec();
    let paths = collect_paths(&spec.paths, &spec.exclude, &args.options.matcher())
        .map_err(suggestions::with_hint)?;

    if args.plain {
        for path in &paths {
            println!("{}", path);
        }
        return Ok(());
    }

    let exposes = derive_exposes_with(&paths, &spec.naming(options.on_collision))
        .map_err(suggestions::with_hint)?
        .unwrap_or_default();
    let width = exposes.keys().map(|name| name.len()).max().unwrap_or(0);
    for (name, path) in &exposes {
        println!(
            "{}  {}",
            out.bold(&format!("{:<width$}", name, width = width)),
            out.dim(path)
        );
    }
    eprintln!(
        "{} {} module(s) exposed from {} file(s)",
        emoji(&out, "📦", "[OK]"),
        exposes.len(),
        paths.len()
    );

    Ok(())
}
