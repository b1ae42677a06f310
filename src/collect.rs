//! # Path Collection
//!
//! Expands glob patterns into the list of files that become exposed modules.
//!
//! Matching itself is delegated to a [`PathMatcher`]. [`GlobMatcher`] resolves
//! patterns against the working directory (or an explicit root) with the
//! `glob` crate, and
//! [`MemoryMatcher`] serves fixed results for tests and embedders.
//!
//! [`collect_paths`] concatenates the per-pattern results in pattern order
//! and then drops every path the [`ExclusionRule`] matches. Nothing is sorted
//! or deduplicated.

use crate::error::{Error, Result};
use crate::exclusion::ExclusionRule;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves one glob pattern into the paths it matches.
pub trait PathMatcher {
    /// Return every path matching `pattern`, in the matcher's order.
    fn matches(&self, pattern: &str) -> Result<Vec<String>>;
}

impl<F> PathMatcher for F
where
    F: Fn(&str) -> Result<Vec<String>>,
{
    fn matches(&self, pattern: &str) -> Result<Vec<String>> {
        self(pattern)
    }
}

/// Matches patterns against the filesystem.
///
/// Relative patterns resolve against the working directory, or against an
/// explicit root given with [`GlobMatcher::with_root`]. Results are then
/// relative to that root. Absolute patterns are used as written.
///
/// Brace groups are expanded first. The paths matched by all alternatives of
/// one pattern are merged, deduplicated and sorted case-insensitively, so
/// `*.ts{,x}` interleaves `.ts` and `.tsx` files by name. Results keep a
/// leading `./` when the pattern has one.
#[derive(Debug, Clone, Default)]
pub struct GlobMatcher {
    options: glob::MatchOptions,
    root: Option<PathBuf>,
}

impl GlobMatcher {
    /// Create a matcher with the glob crate's default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with explicit match options
    pub fn with_options(options: glob::MatchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create a matcher resolving relative patterns under `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::default().root(root)
    }

    /// Resolve relative patterns under `root` instead of the working directory
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        // The glob crate reports `./proj/x` as `proj/x`.
        let root = match root.strip_prefix(".") {
            Ok(rest) => rest.to_path_buf(),
            Err(_) => root,
        };
        self.root = if root.as_os_str().is_empty() {
            None
        } else {
            Some(root)
        };
        self
    }

    /// The pattern handed to the glob crate for one brace alternative
    fn rooted(&self, pattern: &str) -> Result<String> {
        match &self.root {
            Some(root) if !Path::new(pattern).is_absolute() => {
                let root_str = root.to_str().ok_or_else(|| Error::NonUtf8Path {
                    pattern: pattern.to_string(),
                    path: root.display().to_string(),
                })?;
                let relative = pattern.strip_prefix("./").unwrap_or(pattern);
                Ok(format!(
                    "{}/{}",
                    glob::Pattern::escape(root_str.trim_end_matches('/')),
                    relative
                ))
            }
            _ => Ok(pattern.to_string()),
        }
    }

    fn display_path(&self, pattern: &str, path: &Path) -> Result<String> {
        let relative = match &self.root {
            Some(root) if !Path::new(pattern).is_absolute() => {
                path.strip_prefix(root).unwrap_or(path)
            }
            _ => path,
        };
        let relative = relative.to_str().ok_or_else(|| Error::NonUtf8Path {
            pattern: pattern.to_string(),
            path: path.display().to_string(),
        })?;
        if pattern.starts_with("./") && !relative.starts_with("./") {
            Ok(format!("./{}", relative))
        } else {
            Ok(relative.to_string())
        }
    }
}

impl PathMatcher for GlobMatcher {
    fn matches(&self, pattern: &str) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        for expanded in expand_braces(pattern) {
            for entry in glob::glob_with(&self.rooted(&expanded)?, self.options)? {
                paths.push(self.display_path(&expanded, &entry?)?);
            }
        }
        paths.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        paths.dedup();
        Ok(paths)
    }
}

/// Serves fixed match results keyed by the exact pattern string.
///
/// Unknown patterns match nothing.
#[derive(Debug, Clone, Default)]
pub struct MemoryMatcher {
    results: HashMap<String, Vec<String>>,
}

impl MemoryMatcher {
    /// Create an empty matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the paths returned for `pattern`
    pub fn with<I, S>(mut self, pattern: &str, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(pattern, paths);
        self
    }

    /// Register or replace the paths returned for `pattern`
    pub fn insert<I, S>(&mut self, pattern: &str, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.results.insert(
            pattern.to_string(),
            paths.into_iter().map(Into::into).collect(),
        );
    }
}

impl PathMatcher for MemoryMatcher {
    fn matches(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(self.results.get(pattern).cloned().unwrap_or_default())
    }
}

/// Resolve `patterns` in order and drop the paths `exclude` matches.
///
/// Matcher errors are returned unchanged and abort the whole collection.
pub fn collect_paths<M, S>(patterns: &[S], exclude: &ExclusionRule, matcher: &M) -> Result<Vec<String>>
where
    M: PathMatcher + ?Sized,
    S: AsRef<str>,
{
    let mut collected = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matched = matcher.matches(pattern)?;
        debug!("pattern '{}' matched {} path(s)", pattern, matched.len());
        collected.extend(matched);
    }

    collected.retain(|path| {
        let excluded = exclude.matches(path);
        if excluded {
            debug!("excluding {}", path);
        }
        !excluded
    });
    Ok(collected)
}

/// Expand shell-style brace groups (`*.ts{,x}`) into separate patterns.
///
/// Alternatives keep their written order and groups may nest. A group with
/// no top-level comma, or an unbalanced brace, is left as literal text.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    match find_brace_group(pattern) {
        Some(group) => {
            let prefix = &pattern[..group.open];
            let suffix = &pattern[group.close + 1..];
            group
                .alternatives
                .iter()
                .flat_map(|alt| expand_braces(&format!("{}{}{}", prefix, alt, suffix)))
                .collect()
        }
        None => vec![pattern.to_string()],
    }
}

struct BraceGroup<'a> {
    open: usize,
    close: usize,
    alternatives: Vec<&'a str>,
}

/// Locate the first balanced brace group containing a top-level comma
fn find_brace_group(pattern: &str) -> Option<BraceGroup<'_>> {
    let bytes = pattern.as_bytes();
    let mut search_from = 0;

    while let Some(offset) = pattern[search_from..].find('{') {
        let open = search_from + offset;
        let mut depth = 0usize;
        let mut commas = Vec::new();
        let mut close = None;

        for (i, &byte) in bytes.iter().enumerate().skip(open) {
            match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(i);
                        break;
                    }
                }
                b',' if depth == 1 => commas.push(i),
                _ => {}
            }
        }

        let close = close?;
        if commas.is_empty() {
            search_from = open + 1;
            continue;
        }

        let mut alternatives = Vec::with_capacity(commas.len() + 1);
        let mut start = open + 1;
        for comma in commas {
            alternatives.push(&pattern[start..comma]);
            start = comma + 1;
        }
        alternatives.push(&pattern[start..close]);

        return Some(BraceGroup {
            open,
            close,
            alternatives,
        });
    }

    None
}
