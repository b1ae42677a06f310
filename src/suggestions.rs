//! # Error Suggestions
//!
//! Helpers that turn library errors into CLI errors carrying a hint about
//! how to fix them.
//!
//! ```rust,ignore
//! use federation_config::suggestions;
//!
//! return Err(suggestions::config_not_found(path));
//! ```

use crate::error::Error;
use std::path::Path;

/// Generate an error for when an explicitly named options file is missing.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Create a federation.yaml file in your project root\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set the FEDERATION_CONFIG environment variable",
        path = path.display()
    )
}

/// Generate an error for an invalid glob pattern.
pub fn invalid_glob(error: &glob::PatternError) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid glob pattern: {error}\n\n\
         hint: Use * for a single path component, ** for recursive matching\n\
         hint: Brace groups like *.ts{{,x}} expand to one pattern per alternative\n\
         hint: Escape special characters with [], e.g. [[] for a literal ["
    )
}

/// Generate an error for two files deriving the same exposed name.
pub fn expose_collision(name: &str, first: &str, second: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Exposed name '{name}' is derived from both {first} and {second}\n\n\
         hint: Rename one of the files or narrow the glob patterns\n\
         hint: Set on_collision: overwrite to keep the later file"
    )
}

/// Attach a hint to library errors that have a well-known fix.
pub fn with_hint(error: Error) -> anyhow::Error {
    match error {
        Error::Glob(ref err) => invalid_glob(err),
        Error::ExposeCollision {
            ref name,
            ref first,
            ref second,
        } => expose_collision(name, first, second),
        other => other.into(),
    }
}
