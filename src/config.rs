//! # Federation Options
//!
//! This module defines the options a federation configuration is built
//! from, and how they are read from a YAML or JSON file.
//!
//! ## Key Components
//!
//! - **`FederationOptions`**: container name, files to expose, remotes to
//!   consume, and extra shared libraries. Every field has a default, so an
//!   empty document is a valid configuration for a host app named `app`.
//!
//! - **`FilesOption`**: either a bare list of glob patterns, or a
//!   [`FilesSpec`] table that also controls exclusion and naming.
//!
//! ## File Format
//!
//! ```yaml
//! name: xolvio_ui
//! files:
//!   paths:
//!     - ./src/components/**/*.ts{,x}
//!   exclude: .stories          # literal, or {regex: "..."}
//!   remove_prefix: ./src/
//! remotes: [design_system]
//! shared: [styled-components]
//! ```
//!
//! The camelCase keys `storiesExtension`, `removePrefix` and `onCollision`
//! are accepted as aliases.

use crate::error::{Error, Result};
use crate::exclusion::ExclusionRule;
use crate::exposes::{CollisionPolicy, ExposeNaming, DEFAULT_REMOVE_PREFIX};
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Container name used when none is given
pub const DEFAULT_NAME: &str = "app";

/// Options for assembling one federation configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FederationOptions {
    /// Container name, used verbatim for `name` and `library.name`
    pub name: String,
    /// Files to expose; `None` exposes nothing
    pub files: Option<FilesOption>,
    /// Remote containers this one consumes
    pub remotes: Vec<String>,
    /// Libraries shared in addition to the defaults
    pub shared: Vec<String>,
    /// Behavior when two files derive the same exposed name
    #[serde(alias = "onCollision")]
    pub on_collision: CollisionPolicy,
}

impl Default for FederationOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            files: None,
            remotes: Vec::new(),
            shared: Vec::new(),
            on_collision: CollisionPolicy::default(),
        }
    }
}

impl FederationOptions {
    /// Options for a container called `name`, everything else defaulted
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_files(mut self, files: impl Into<FilesOption>) -> Self {
        self.files = Some(files.into());
        self
    }

    pub fn with_remotes<I, S>(mut self, remotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remotes = remotes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_shared<I, S>(mut self, shared: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shared = shared.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }
}

/// The `files` option: bare patterns or a full table
#[derive(Debug, Clone, PartialEq)]
pub enum FilesOption {
    Patterns(Vec<String>),
    Spec(FilesSpec),
}

impl FilesOption {
    /// Normalize to a [`FilesSpec`], filling defaults for bare patterns
    pub fn into_spec(self) -> FilesSpec {
        match self {
            Self::Patterns(paths) => FilesSpec {
                paths,
                ..FilesSpec::default()
            },
            Self::Spec(spec) => spec,
        }
    }

    /// Borrowing form of [`FilesOption::into_spec`]
    pub fn spec(&self) -> Cow<'_, FilesSpec> {
        match self {
            Self::Patterns(paths) => Cow::Owned(FilesSpec::new(paths.iter().cloned())),
            Self::Spec(spec) => Cow::Borrowed(spec),
        }
    }
}

impl From<FilesSpec> for FilesOption {
    fn from(spec: FilesSpec) -> Self {
        Self::Spec(spec)
    }
}

impl From<Vec<String>> for FilesOption {
    fn from(patterns: Vec<String>) -> Self {
        Self::Patterns(patterns)
    }
}

impl From<Vec<&str>> for FilesOption {
    fn from(patterns: Vec<&str>) -> Self {
        Self::Patterns(patterns.into_iter().map(str::to_string).collect())
    }
}

impl<'de> Deserialize<'de> for FilesOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FilesVisitor;

        impl<'de> Visitor<'de> for FilesVisitor {
            type Value = FilesOption;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a list of glob patterns or a files table")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> std::result::Result<FilesOption, A::Error> {
                Vec::deserialize(SeqAccessDeserializer::new(seq)).map(FilesOption::Patterns)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<FilesOption, A::Error> {
                FilesSpec::deserialize(MapAccessDeserializer::new(map)).map(FilesOption::Spec)
            }
        }

        deserializer.deserialize_any(FilesVisitor)
    }
}

/// Which files to expose and how to name them
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesSpec {
    /// Glob patterns, resolved in order
    pub paths: Vec<String>,
    /// Paths matching this rule are never exposed
    #[serde(alias = "storiesExtension")]
    pub exclude: ExclusionRule,
    /// Leading path prefix removed when deriving names
    #[serde(alias = "removePrefix")]
    pub remove_prefix: String,
    /// Text substituted for the removed prefix
    pub replacement: String,
}

impl Default for FilesSpec {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: ExclusionRule::default(),
            remove_prefix: DEFAULT_REMOVE_PREFIX.to_string(),
            replacement: String::new(),
        }
    }
}

impl FilesSpec {
    /// A spec for `paths` with default exclusion and naming
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_exclude(mut self, exclude: ExclusionRule) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_remove_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.remove_prefix = prefix.into();
        self
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    /// Naming rules for this spec under the given collision policy
    pub fn naming(&self, on_collision: CollisionPolicy) -> ExposeNaming {
        ExposeNaming {
            remove_prefix: self.remove_prefix.clone(),
            replacement: self.replacement.clone(),
            on_collision,
        }
    }
}

/// Parse federation options from a YAML (or JSON) string.
///
/// An empty document yields the defaults.
pub fn parse(content: &str) -> Result<FederationOptions> {
    if content.trim().is_empty() {
        return Ok(FederationOptions::default());
    }
    serde_yaml::from_str(content).map_err(|err| Error::ConfigParse {
        message: err.to_string(),
        hint: Some(
            "Recognized keys are name, files, remotes, shared and on_collision".to_string(),
        ),
    })
}

/// Parse federation options from a file path
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FederationOptions> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
