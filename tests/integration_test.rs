//! Library-level tests of the full pipeline with an in-memory matcher.

use federation_config::collect::{collect_paths, MemoryMatcher};
use federation_config::config::{self, FederationOptions, FilesSpec};
use federation_config::exclusion::ExclusionRule;
use federation_config::exposes::derive_exposes;
use federation_config::federation::{assemble_config, FederationConfig};
use federation_config::plugin::build_plugin;
use federation_config::render::{render, OutputFormat};
use serde_json::json;

const GLOBS: [&str; 2] = ["./src/components/**/*.ts{,x}", "./src/elements/**/*.ts{,x}"];

fn storybook_matcher() -> MemoryMatcher {
    MemoryMatcher::new()
        .with(
            GLOBS[0],
            [
                "./src/components/icons/FlipchartIcon.tsx",
                "./src/components/icons/FlipchartIcon.stories.tsx",
                "./src/components/icons/ScreenIcon.tsx",
                "./src/components/icons/ScreenIcon.stories.tsx",
                "./src/components/icons/ShapesIcon.tsx",
                "./src/components/Sections.tsx",
                "./src/components/Title.tsx",
            ],
        )
        .with(
            GLOBS[1],
            [
                "./src/elements/Background.tsx",
                "./src/elements/ButtonPrimary.tsx",
                "./src/elements/Confetti7Rows.tsx",
                "./src/elements/Confetti7Rows.stories.tsx",
                "./src/elements/InlineButton.ts",
                "./src/elements/typography.tsx",
            ],
        )
}

fn expected_exposes() -> serde_json::Value {
    json!({
        "components/icons/FlipchartIcon": "./src/components/icons/FlipchartIcon.tsx",
        "components/icons/ScreenIcon": "./src/components/icons/ScreenIcon.tsx",
        "components/icons/ShapesIcon": "./src/components/icons/ShapesIcon.tsx",
        "components/Sections": "./src/components/Sections.tsx",
        "components/Title": "./src/components/Title.tsx",
        "elements/Background": "./src/elements/Background.tsx",
        "elements/ButtonPrimary": "./src/elements/ButtonPrimary.tsx",
        "elements/Confetti7Rows": "./src/elements/Confetti7Rows.tsx",
        "elements/InlineButton": "./src/elements/InlineButton.ts",
        "elements/typography": "./src/elements/typography.tsx",
    })
}

#[test]
fn test_collect_paths_without_stories() {
    let expected = vec![
        "./src/components/icons/FlipchartIcon.tsx",
        "./src/components/icons/ScreenIcon.tsx",
        "./src/components/icons/ShapesIcon.tsx",
        "./src/components/Sections.tsx",
        "./src/components/Title.tsx",
        "./src/elements/Background.tsx",
        "./src/elements/ButtonPrimary.tsx",
        "./src/elements/Confetti7Rows.tsx",
        "./src/elements/InlineButton.ts",
        "./src/elements/typography.tsx",
    ];
    let matcher = storybook_matcher();

    let with_default = collect_paths(&GLOBS, &ExclusionRule::default(), &matcher).unwrap();
    assert_eq!(with_default, expected);

    let with_regex =
        collect_paths(&GLOBS, &ExclusionRule::pattern(r"stories\.").unwrap(), &matcher).unwrap();
    assert_eq!(with_regex, expected);
}

#[test]
fn test_derive_exposes_two_paths() {
    let exposes = derive_exposes(
        &[
            "./src/components/icons/FlipchartIcon.tsx",
            "./src/elements/Confetti7Rows.tsx",
        ],
        "./src/",
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&exposes).unwrap(),
        json!({
            "components/icons/FlipchartIcon": "./src/components/icons/FlipchartIcon.tsx",
            "elements/Confetti7Rows": "./src/elements/Confetti7Rows.tsx",
        })
    );
}

#[test]
fn test_storybook_config() {
    let options = FederationOptions::new("xolvio_ui")
        .with_files(
            FilesSpec::new(GLOBS)
                .with_exclude(ExclusionRule::literal(".stories"))
                .with_remove_prefix("./src/"),
        )
        .with_shared(["styled-components"]);
    let config = assemble_config(&options, &storybook_matcher()).unwrap();

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({
            "name": "xolvio_ui",
            "library": { "type": "var", "name": "xolvio_ui" },
            "filename": "remoteEntry.js",
            "exposes": expected_exposes(),
            "shared": ["react", "react-dom", "styled-components"],
        })
    );
}

#[test]
fn test_exposes_keep_match_order() {
    let options = FederationOptions::new("xolvio_ui").with_files(GLOBS.to_vec());
    let config = assemble_config(&options, &storybook_matcher()).unwrap();
    let names: Vec<&str> = config
        .exposes
        .as_ref()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names.first(), Some(&"components/icons/FlipchartIcon"));
    assert_eq!(names.last(), Some(&"elements/typography"));
}

#[test]
fn test_options_file_through_plugin_factory() {
    let options = config::parse(
        r#"
name: xolvio_ui
files:
  paths:
    - ./src/components/**/*.ts{,x}
    - ./src/elements/**/*.ts{,x}
remotes: [xolvio_ui]
shared: [styled-components]
"#,
    )
    .unwrap();

    let factory = |config: FederationConfig| render(&config, OutputFormat::Json);
    let rendered = build_plugin(&options, &storybook_matcher(), &factory)
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["remotes"], json!({ "xolvio_ui": "xolvio_ui" }));
    assert_eq!(value["exposes"], expected_exposes());
    assert_eq!(value["shared"], json!(["react", "react-dom", "styled-components"]));
}

#[test]
fn test_all_defaults() {
    let config = assemble_config(&FederationOptions::default(), &MemoryMatcher::new()).unwrap();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "app",
            "library": { "type": "var", "name": "app" },
            "filename": "remoteEntry.js",
            "shared": ["react", "react-dom"],
        })
    );
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("exposes"));
    assert!(!object.contains_key("remotes"));
}
