//! Shared dependency lists, remote tables, and container naming helpers

use indexmap::{IndexMap, IndexSet};

/// Libraries every federation participant shares, always listed first
pub const DEFAULT_SHARED: [&str; 2] = ["react", "react-dom"];

/// Remote container name to itself, in input order
pub type Remotes = IndexMap<String, String>;

/// The default shared libraries followed by `extra`, without duplicates.
///
/// First occurrence wins, so an extra repeating a default is dropped.
pub fn shared_dependencies<S: AsRef<str>>(extra: &[S]) -> Vec<String> {
    let mut shared: IndexSet<String> = DEFAULT_SHARED.iter().map(|dep| dep.to_string()).collect();
    shared.extend(extra.iter().map(|dep| dep.as_ref().to_string()));
    shared.into_iter().collect()
}

/// Identity table for `remotes`; `None` when there are no remotes.
pub fn remotes_mapping<S: AsRef<str>>(remotes: &[S]) -> Option<Remotes> {
    if remotes.is_empty() {
        return None;
    }
    Some(
        remotes
            .iter()
            .map(|remote| (remote.as_ref().to_string(), remote.as_ref().to_string()))
            .collect(),
    )
}

/// Replace every `-` with `_` so a package name is usable as a container
/// global.
pub fn sanitize_name(name: &str) -> String {
    name.replace('-', "_")
}
