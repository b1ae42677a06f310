//! # Federation Configuration Assembly
//!
//! Combines the outputs of path collection, name derivation, and the shared
//! and remote helpers into the single record a module federation plugin is
//! constructed from.
//!
//! Optional parts of the record (`exposes`, `remotes`) are `Option`s and are
//! left out of the serialized form when absent. Consumers branch on whether
//! the key exists, so an absent field is never rendered as an empty table.

use crate::collect::{collect_paths, GlobMatcher, PathMatcher};
use crate::config::FederationOptions;
use crate::error::Result;
use crate::exposes::{derive_exposes_with, Exposes};
use crate::shared::{remotes_mapping, shared_dependencies, Remotes};
use log::debug;
use serde::Serialize;

/// Library type every container is exposed as
pub const LIBRARY_TYPE: &str = "var";

/// File name of the generated container entry
pub const REMOTE_ENTRY_FILENAME: &str = "remoteEntry.js";

/// How the container is exposed to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Library {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl Library {
    /// A `var` library bound to `name`
    pub fn var(name: impl Into<String>) -> Self {
        Self {
            kind: LIBRARY_TYPE.to_string(),
            name: name.into(),
        }
    }
}

/// The assembled module federation configuration.
///
/// Field order matches the serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FederationConfig {
    pub name: String,
    pub library: Library,
    pub filename: String,
    pub shared: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposes: Option<Exposes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remotes: Option<Remotes>,
}

impl FederationConfig {
    /// Start a builder for a container called `name`
    pub fn builder(name: impl Into<String>) -> FederationConfigBuilder {
        FederationConfigBuilder::new(name)
    }
}

/// Accumulates the parts of a [`FederationConfig`].
///
/// `exposes` and `remotes` stay absent unless a non-empty table is supplied.
#[derive(Debug, Clone)]
pub struct FederationConfigBuilder {
    name: String,
    shared: Vec<String>,
    exposes: Option<Exposes>,
    remotes: Option<Remotes>,
}

impl FederationConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let none: [&str; 0] = [];
        Self {
            name: name.into(),
            shared: shared_dependencies(&none),
            exposes: None,
            remotes: None,
        }
    }

    /// Share the default libraries plus `extra`
    pub fn shared<S: AsRef<str>>(mut self, extra: &[S]) -> Self {
        self.shared = shared_dependencies(extra);
        self
    }

    /// Set the exposes table; an empty table counts as absent
    pub fn exposes(mut self, exposes: Option<Exposes>) -> Self {
        self.exposes = exposes.filter(|table| !table.is_empty());
        self
    }

    /// Set the remotes table; an empty table counts as absent
    pub fn remotes(mut self, remotes: Option<Remotes>) -> Self {
        self.remotes = remotes.filter(|table| !table.is_empty());
        self
    }

    pub fn build(self) -> FederationConfig {
        FederationConfig {
            library: Library::var(self.name.clone()),
            name: self.name,
            filename: REMOTE_ENTRY_FILENAME.to_string(),
            shared: self.shared,
            exposes: self.exposes,
            remotes: self.remotes,
        }
    }
}

/// Assemble the federation configuration for `options`.
///
/// Files are resolved through `matcher`; its errors are returned unchanged.
pub fn assemble_config<M>(options: &FederationOptions, matcher: &M) -> Result<FederationConfig>
where
    M: PathMatcher + ?Sized,
{
    let exposes = match &options.files {
        Some(files) => {
            let spec = files.spec();
            let paths = collect_paths(&spec.paths, &spec.exclude, matcher)?;
            derive_exposes_with(&paths, &spec.naming(options.on_collision))?
        }
        None => None,
    };

    let config = FederationConfig::builder(options.name.as_str())
        .shared(&options.shared)
        .exposes(exposes)
        .remotes(remotes_mapping(&options.remotes))
        .build();

    debug!(
        "assembled federation config '{}': {} exposed, {} remote(s), {} shared",
        config.name,
        config.exposes.as_ref().map_or(0, |e| e.len()),
        config.remotes.as_ref().map_or(0, |r| r.len()),
        config.shared.len()
    );
    Ok(config)
}

/// [`assemble_config`] against the filesystem under the working directory
pub fn assemble_config_fs(options: &FederationOptions) -> Result<FederationConfig> {
    assemble_config(options, &GlobMatcher::new())
}

/// Configuration for a host application consuming remotes
pub fn app_config<M>(options: &FederationOptions, matcher: &M) -> Result<FederationConfig>
where
    M: PathMatcher + ?Sized,
{
    assemble_config(options, matcher)
}

/// Configuration for a component library (e.g. a Storybook) exposing files
pub fn storybook_config<M>(options: &FederationOptions, matcher: &M) -> Result<FederationConfig>
where
    M: PathMatcher + ?Sized,
{
    assemble_config(options, matcher)
}
