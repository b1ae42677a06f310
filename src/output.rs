//! # Terminal Output
//!
//! Decides whether CLI status lines use emoji and colors.
//!
//! `--color=always|never|auto` wins; in auto mode `NO_COLOR`, `CLICOLOR=0`
//! and `TERM=dumb` turn decoration off, `CLICOLOR_FORCE=1` turns it on, and
//! otherwise the `console` crate's TTY detection decides.
//!
//! Rendered configurations are never decorated, only status lines on stderr
//! and the `paths` listing.

use std::env;

/// Output configuration for colors and emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve from the `--color` flag value and the environment
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Dim `text` when colors are enabled
    pub fn dim(&self, text: &str) -> String {
        if self.use_color {
            console::style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }

    /// Bold `text` when colors are enabled
    pub fn bold(&self, text: &str) -> String {
        if self.use_color {
            console::style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// The emoji when colors are enabled, the plain marker otherwise
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
