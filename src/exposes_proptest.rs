//! Property-based tests for path collection and name derivation.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::collect::{collect_paths, MemoryMatcher};
    use crate::exclusion::ExclusionRule;
    use crate::exposes::{derive_exposes, expose_name};
    use crate::shared::shared_dependencies;
    use proptest::prelude::*;

    // ============================================================================
    // collect_paths property tests
    // ============================================================================

    proptest! {
        /// Property: no collected path is matched by the exclusion rule
        #[test]
        fn collected_paths_never_match_exclusion(
            paths in prop::collection::vec("[a-z./]{0,20}", 0..20),
            needle in "[a-z.]{1,4}",
            as_regex in any::<bool>(),
        ) {
            let matcher = MemoryMatcher::new().with("*", paths.clone());
            let rule = if as_regex {
                ExclusionRule::pattern(&needle).unwrap()
            } else {
                ExclusionRule::literal(needle)
            };
            let collected = collect_paths(&["*"], &rule, &matcher).unwrap();
            for path in &collected {
                prop_assert!(!rule.matches(path));
            }
        }

        /// Property: collection is exactly an order-preserving filter
        #[test]
        fn collected_paths_keep_relative_order(
            first in prop::collection::vec("(\\./src/)?[a-z]{1,6}(\\.stories)?\\.tsx", 0..10),
            second in prop::collection::vec("(\\./src/)?[a-z]{1,6}(\\.stories)?\\.tsx", 0..10),
        ) {
            let matcher = MemoryMatcher::new()
                .with("first", first.clone())
                .with("second", second.clone());
            let rule = ExclusionRule::default();
            let collected = collect_paths(&["first", "second"], &rule, &matcher).unwrap();

            let expected: Vec<String> = first
                .iter()
                .chain(second.iter())
                .filter(|path| !rule.matches(path))
                .cloned()
                .collect();
            prop_assert_eq!(collected, expected);
        }
    }

    // ============================================================================
    // expose_name property tests
    // ============================================================================

    proptest! {
        /// Property: paths without the prefix keep their leading portion
        #[test]
        fn unprefixed_paths_keep_their_prefix(
            dir in "[a-z]{1,8}",
            file in "[A-Za-z]{1,8}",
            ext in "(ts|tsx|js)",
        ) {
            let path = format!("./lib/{}/{}.{}", dir, file, ext);
            let name = expose_name(&path, "./src/", "");
            prop_assert_eq!(name, format!("./lib/{}/{}", dir, file));
        }

        /// Property: a derived name never ends with an index segment or extension
        #[test]
        fn derived_name_drops_extension_and_index(
            dir in "[a-z]{1,8}",
            ext in "(ts|tsx|js|jsx)",
        ) {
            let path = format!("./src/{}/index.{}", dir, ext);
            prop_assert_eq!(expose_name(&path, "./src/", ""), dir);
        }

        /// Property: every derived entry points back at an input path
        #[test]
        fn exposes_values_are_input_paths(
            paths in prop::collection::vec("\\./src/[a-z]{1,4}/[a-z]{1,4}\\.tsx", 1..15),
        ) {
            let exposes = derive_exposes(&paths, "./src/").unwrap();
            prop_assert!(exposes.len() <= paths.len());
            for (name, path) in &exposes {
                prop_assert!(paths.contains(path));
                prop_assert_eq!(&expose_name(path, "./src/", ""), name);
            }
        }

        /// Property: a prefixed path names its directories and file stem
        #[test]
        fn derived_name_is_prefix_free_stem(
            dirs in prop::collection::vec("[a-z][a-z0-9.]{0,6}", 0..4),
            stem in "[A-Za-z][A-Za-z0-9]{0,8}",
            ext in "(ts|tsx|js|jsx|css)",
        ) {
            let mut segments = dirs.clone();
            segments.push(format!("{}.{}", stem, ext));
            let path = format!("./src/{}", segments.join("/"));

            let expected = if stem == "index" && !dirs.is_empty() {
                dirs.join("/")
            } else {
                let mut parts = dirs.clone();
                parts.push(stem.clone());
                parts.join("/")
            };
            prop_assert_eq!(expose_name(&path, "./src/", ""), expected);
        }
    }

    // ============================================================================
    // shared_dependencies property tests
    // ============================================================================

    proptest! {
        /// Property: shared list starts with the defaults and has no duplicates
        #[test]
        fn shared_starts_with_defaults_without_duplicates(
            extra in prop::collection::vec("(react|react-dom|[a-z]{1,3})", 0..10),
        ) {
            let shared = shared_dependencies(&extra);
            prop_assert_eq!(&shared[..2], &["react".to_string(), "react-dom".to_string()]);
            let mut seen = std::collections::HashSet::new();
            for dep in &shared {
                prop_assert!(seen.insert(dep.clone()), "duplicate {}", dep);
            }
            for dep in &extra {
                prop_assert!(shared.contains(dep));
            }
        }
    }
}
