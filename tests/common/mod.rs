//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_storybook_sources();
//!     fixture.command().arg("generate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::{stdout_json, TestFixture};
}

/// Options files used across tests.
#[allow(dead_code)]
pub mod configs {
    /// Component library exposing components and elements, stories excluded.
    pub const STORYBOOK: &str = r#"
name: xolvio_ui
files:
  paths:
    - ./src/components/**/*.ts{,x}
    - ./src/elements/**/*.ts{,x}
  storiesExtension: .stories
  removePrefix: ./src/
shared: [styled-components]
"#;

    /// Component library using a bare pattern list and default naming.
    pub const STORYBOOK_PATTERNS: &str = r#"
name: xolvio_ui
files:
  - ./src/components/**/*.ts{,x}
  - ./src/elements/**/*.ts{,x}
"#;

    /// Host application consuming one remote.
    pub const HOST_APP: &str = r#"
name: app
remotes: [xolvio_ui]
shared: [styled-components]
"#;

    /// Two files deriving the same exposed name, collisions fatal.
    pub const COLLIDING: &str = r#"
files:
  - ./src/Card/index.tsx
  - ./src/Card.tsx
on_collision: error
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "name: [unclosed";
}

/// Source files of a small component library, stories included.
pub const STORYBOOK_SOURCES: &[&str] = &[
    "src/components/icons/FlipchartIcon.tsx",
    "src/components/icons/FlipchartIcon.stories.tsx",
    "src/components/icons/ScreenIcon.tsx",
    "src/components/icons/ScreenIcon.stories.tsx",
    "src/components/icons/ShapesIcon.tsx",
    "src/components/Sections.tsx",
    "src/components/Title.tsx",
    "src/elements/Background.tsx",
    "src/elements/ButtonPrimary.tsx",
    "src/elements/Confetti7Rows.tsx",
    "src/elements/Confetti7Rows.stories.tsx",
    "src/elements/InlineButton.ts",
    "src/elements/typography.tsx",
];

/// A temporary project directory with an optional `federation.yaml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `federation.yaml` with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file("federation.yaml", content)
    }

    /// Add a file with the given path and content, creating parent directories.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        let child = self.temp_dir.child(path);
        if let Some(parent) = child.path().parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        child.write_str(content).expect("Failed to write file");
        self
    }

    /// Add every file of [`STORYBOOK_SOURCES`].
    pub fn with_storybook_sources(self) -> Self {
        STORYBOOK_SOURCES
            .iter()
            .fold(self, |fixture, path| fixture.with_file(path, "export {};\n"))
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A command for the binary running inside the fixture directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("federation-config");
        cmd.current_dir(self.path())
            .env_remove("FEDERATION_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the stdout of a finished command as JSON.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}
