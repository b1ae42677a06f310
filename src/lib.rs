//! # Federation Config Library
//!
//! This library derives module federation configuration for a bundler
//! plugin from a handful of glob patterns and naming options. It backs the
//! `federation-config` command-line tool and can be embedded directly by
//! build tooling.
//!
//! ## Quick Example
//!
//! ```
//! use federation_config::collect::MemoryMatcher;
//! use federation_config::config::FederationOptions;
//! use federation_config::federation::assemble_config;
//!
//! let matcher = MemoryMatcher::new().with(
//!     "./src/**/*.tsx",
//!     ["./src/elements/Button.tsx", "./src/elements/Button.stories.tsx"],
//! );
//! let options = FederationOptions::new("design_system")
//!     .with_files(vec!["./src/**/*.tsx"])
//!     .with_shared(["styled-components"]);
//!
//! let config = assemble_config(&options, &matcher).unwrap();
//! let exposes = config.exposes.unwrap();
//! assert_eq!(exposes["elements/Button"], "./src/elements/Button.tsx");
//! assert_eq!(config.shared, ["react", "react-dom", "styled-components"]);
//! assert!(config.remotes.is_none());
//! ```
//!
//! ## Pipeline
//!
//! Every build runs the same stateless stages, left to right:
//!
//! 1.  **Collection** (`collect`): expand glob patterns through a
//!     `PathMatcher` and drop paths the `ExclusionRule` matches.
//! 2.  **Naming** (`exposes`): derive a public module name for every path.
//! 3.  **Assembly** (`federation`, `shared`): combine exposes, shared
//!     libraries and remotes into a `FederationConfig`.
//! 4.  **Hand-off** (`plugin`): pass the configuration to the host's plugin
//!     factory and return whatever it constructs.
//!
//! Options can be built in code or read from YAML/JSON (`config`), and the
//! result can be written out as JSON or YAML (`render`).

pub mod collect;
pub mod config;
pub mod error;
pub mod exclusion;
pub mod exposes;
pub mod federation;
pub mod output;
pub mod plugin;
pub mod render;
pub mod shared;
pub mod suggestions;

#[cfg(test)]
mod exposes_proptest;
