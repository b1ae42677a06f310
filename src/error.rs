//! # Error Handling
//!
//! This module defines the error type shared by every stage of the
//! configuration pipeline. It uses `thiserror` to describe the handful of
//! ways a build can fail:
//!
//! - The options file could not be read or parsed.
//! - A glob pattern is invalid, or the glob engine could not read an entry.
//! - An exclusion regex does not compile.
//! - Two paths derived the same exposed name and collisions are configured
//!   to be fatal.
//! - The configuration could not be rendered.
//!
//! Path matching failures are propagated unchanged: the pipeline never
//! retries and never returns a partial configuration.

use thiserror::Error;

/// Main error type for federation-config operations
#[derive(Error, Debug)]
pub enum Error {
    /// The options file is structurally invalid.
    ///
    /// Carries an optional hint about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// Two matched paths derived the same exposed module name.
    #[error("Exposed name collision: '{name}' is derived from both {first} and {second}")]
    ExposeCollision {
        name: String,
        first: String,
        second: String,
    },

    /// The matched path is not valid UTF-8 and cannot be used as a module path.
    #[error("Non UTF-8 path matched by '{pattern}': {path}")]
    NonUtf8Path { pattern: String, path: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing or rendering error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON rendering error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// The glob engine failed to read a matched entry.
    #[error("Glob iteration error: {0}")]
    GlobIteration(#[from] glob::GlobError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
