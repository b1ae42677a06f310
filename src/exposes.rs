//! # Exposed Module Names
//!
//! Turns collected file paths into the `exposes` table of a federation
//! container: public module name to source path.
//!
//! A name is derived from its path in three steps:
//!
//! 1. One leading occurrence of the removable prefix (`./src/` by default) is
//!    replaced with the replacement token (empty by default).
//! 2. The extension of the last path segment is stripped.
//! 3. A trailing `/index` segment is dropped, so a directory's index file is
//!    exposed under the directory name.
//!
//! Paths without the prefix pass through step 1 unchanged.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;

/// Prefix removed from matched paths unless configured otherwise
pub const DEFAULT_REMOVE_PREFIX: &str = "./src/";

/// Exposed module name to source path, in insertion order
pub type Exposes = IndexMap<String, String>;

/// What to do when two paths derive the same exposed name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// The later path replaces the earlier one, keeping the earlier position
    #[default]
    Overwrite,
    /// Fail with [`Error::ExposeCollision`]
    Error,
}

/// Naming rules applied to every collected path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposeNaming {
    pub remove_prefix: String,
    pub replacement: String,
    pub on_collision: CollisionPolicy,
}

impl Default for ExposeNaming {
    fn default() -> Self {
        Self {
            remove_prefix: DEFAULT_REMOVE_PREFIX.to_string(),
            replacement: String::new(),
            on_collision: CollisionPolicy::default(),
        }
    }
}

impl ExposeNaming {
    /// Naming rules stripping `remove_prefix` with the default replacement
    pub fn with_prefix(remove_prefix: impl Into<String>) -> Self {
        Self {
            remove_prefix: remove_prefix.into(),
            ..Self::default()
        }
    }
}

/// Derive the exposes table for `paths`, overwriting on name collisions.
///
/// Returns `None` for an empty input so callers can omit the field entirely.
pub fn derive_exposes<S: AsRef<str>>(paths: &[S], remove_prefix: &str) -> Option<Exposes> {
    let naming = ExposeNaming::with_prefix(remove_prefix);
    // The overwrite policy never produces an error.
    derive_exposes_with(paths, &naming).unwrap_or_default()
}

/// Derive the exposes table for `paths` using explicit naming rules.
pub fn derive_exposes_with<S: AsRef<str>>(
    paths: &[S],
    naming: &ExposeNaming,
) -> Result<Option<Exposes>> {
    if paths.is_empty() {
        return Ok(None);
    }

    let mut exposes = Exposes::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let name = expose_name(path, &naming.remove_prefix, &naming.replacement);
        debug!("exposing {} as '{}'", path, name);

        // A path matched twice is not a collision with itself.
        if let Some(previous) = exposes.get(&name).filter(|previous| *previous != path) {
            match naming.on_collision {
                CollisionPolicy::Overwrite => {
                    warn!(
                        "exposed name '{}' derived from both {} and {}; keeping {}",
                        name, previous, path, path
                    );
                }
                CollisionPolicy::Error => {
                    return Err(Error::ExposeCollision {
                        name,
                        first: previous.clone(),
                        second: path.to_string(),
                    });
                }
            }
        }
        exposes.insert(name, path.to_string());
    }

    Ok(Some(exposes))
}

/// Derive the public module name for a single path.
pub fn expose_name(path: &str, remove_prefix: &str, replacement: &str) -> String {
    let renamed = match path.strip_prefix(remove_prefix) {
        Some(rest) if !remove_prefix.is_empty() => format!("{}{}", replacement, rest),
        _ => path.to_string(),
    };
    let name = strip_extension(&renamed);
    collapse_index(name).to_string()
}

/// Remove the extension of the last path segment, if it has one.
///
/// A leading dot (`.eslintrc`) marks a hidden file, not an extension.
fn strip_extension(path: &str) -> &str {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..segment_start + dot],
        _ => path,
    }
}

fn collapse_index(name: &str) -> &str {
    name.strip_suffix("/index").unwrap_or(name)
}
