//! Exclusion rules for dropping story and test files from matched paths

use crate::error::{Error, Result};
use regex::Regex;
use serde::Deserialize;

/// Default exclusion: an optional separator immediately followed by `stories.`
pub const DEFAULT_EXCLUSION_PATTERN: &str = r"/?stories\.";

/// Rule deciding whether a matched path is dropped before names are derived.
///
/// A `Literal` is tested by plain containment, a `Pattern` by a regex search
/// over the whole path.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawExclusion")]
pub enum ExclusionRule {
    /// Drop paths containing this substring
    Literal(String),
    /// Drop paths the regex finds a match in
    Pattern(Regex),
}

impl ExclusionRule {
    /// Build a literal containment rule
    pub fn literal(needle: impl Into<String>) -> Self {
        Self::Literal(needle.into())
    }

    /// Compile a regex rule
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Whether `path` should be excluded
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Literal(needle) => path.contains(needle.as_str()),
            Self::Pattern(regex) => regex.is_match(path),
        }
    }
}

impl Default for ExclusionRule {
    fn default() -> Self {
        Self::Pattern(
            Regex::new(DEFAULT_EXCLUSION_PATTERN).expect("default exclusion pattern compiles"),
        )
    }
}

impl PartialEq for ExclusionRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

/// On-disk form: a bare string is a literal, `{regex: ...}` is a pattern
#[derive(Deserialize)]
#[serde(untagged)]
enum RawExclusion {
    Literal(String),
    Pattern { regex: String },
}

impl TryFrom<RawExclusion> for ExclusionRule {
    type Error = Error;

    fn try_from(raw: RawExclusion) -> Result<Self> {
        match raw {
            RawExclusion::Literal(needle) => Ok(Self::Literal(needle)),
            RawExclusion::Pattern { regex } => {
                Self::pattern(&regex).map_err(|err| Error::ConfigParse {
                    message: format!("invalid exclusion regex '{}': {}", regex, err),
                    hint: Some("Literal dots must be escaped, e.g. 'stories\\.'".to_string()),
                })
            }
        }
    }
}
