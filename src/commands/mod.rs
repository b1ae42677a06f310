//! # CLI Command Implementations
//!
//! Each subcommand of `federation-config` lives in its own file with an
//! `Args` struct derived with `clap` and an `execute` function.
//!
//! The options-loading flags shared by `generate` and `paths` are defined
//! here as [`OptionsArgs`].

pub mod completions;
pub mod generate;
pub mod paths;

use anyhow::Result;
use clap::Args;
use log::info;
use std::path::{Path, PathBuf};

use federation_config::collect::GlobMatcher;
use federation_config::config::{self, FederationOptions, FilesOption};
use federation_config::suggestions;

/// Options file looked up in the root directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "federation.yaml";

/// Flags selecting and overriding federation options
#[derive(Args, Debug, Clone, Default)]
pub struct OptionsArgs {
    /// Path to the options file (YAML or JSON).
    ///
    /// Defaults to `federation.yaml` in the working directory when present;
    /// without it, built-in defaults are used.
    #[arg(short, long, value_name = "FILE", env = "FEDERATION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory to resolve glob patterns (and the options file) from.
    ///
    /// Matched paths are reported relative to it. `--output` stays relative
    /// to the working directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Override the container name.
    #[arg(long)]
    pub name: Option<String>,

    /// Glob pattern of files to expose; repeatable, appended to the options file.
    #[arg(long = "file", value_name = "PATTERN")]
    pub files: Vec<String>,

    /// Remote container to consume; repeatable, appended to the options file.
    #[arg(long = "remote", value_name = "NAME")]
    pub remotes: Vec<String>,

    /// Extra shared library; repeatable, appended to the options file.
    #[arg(long = "shared", value_name = "NAME")]
    pub shared: Vec<String>,
}

impl OptionsArgs {
    /// Load the options file and apply flag overrides.
    pub fn load(&self) -> Result<FederationOptions> {
        let default_config = self.resolve(Path::new(DEFAULT_CONFIG_FILE));
        let mut options = match &self.config {
            Some(path) => read_options(&self.resolve(path))?,
            None if default_config.is_file() => read_options(&default_config)?,
            None => {
                info!("no {} found, using defaults", default_config.display());
                FederationOptions::default()
            }
        };

        if let Some(name) = &self.name {
            options.name = name.clone();
        }
        if !self.files.is_empty() {
            options.files = Some(append_patterns(options.files.take(), &self.files));
        }
        options.remotes.extend(self.remotes.iter().cloned());
        options.shared.extend(self.shared.iter().cloned());
        Ok(options)
    }

    /// The matcher resolving glob patterns under `--root`
    pub fn matcher(&self) -> GlobMatcher {
        match &self.root {
            Some(root) => GlobMatcher::with_root(root),
            None => GlobMatcher::new(),
        }
    }

    /// `path` relative to `--root`, or unchanged without one
    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    }
}

fn read_options(path: &Path) -> Result<FederationOptions> {
    if !path.is_file() {
        return Err(suggestions::config_not_found(path));
    }
    info!("loading options from {}", path.display());
    config::from_file(path).map_err(suggestions::with_hint)
}

fn append_patterns(files: Option<FilesOption>, extra: &[String]) -> FilesOption {
    match files {
        None => FilesOption::Patterns(extra.to_vec()),
        Some(FilesOption::Patterns(mut patterns)) => {
            patterns.extend_from_slice(extra);
            FilesOption::Patterns(patterns)
        }
        Some(FilesOption::Spec(mut spec)) => {
            spec.paths.extend_from_slice(extra);
            FilesOption::Spec(spec)
        }
    }
}
