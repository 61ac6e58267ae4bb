//! End-to-end builds against a scratch token directory.

use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use insta::assert_snapshot;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokensmith::{BuildConfig, TokenBuild, TokenError, UnresolvedReference};

const PALETTE: &str = r##"{
  "colors": {
    "base": { "white": "#FFFFFFFF", "black": "#000000FF" },
    "storm": { "100": "#DDE6F1FF", "200": "#C5D2E3FF" },
    "brand": { "app-background-smoke-50": "#F7F9FCFF" }
  }
}"##;

const MAPPING: &str = r##"{
  "light": {
    "bg": {
      "app": "$Colors-Brand-App-Background-(Smoke-50)",
      "surface": "$Colors-base-white"
    },
    "border": { "default": "$Colors-border-default" },
    "text": { "primary": "#1A1F26FF" }
  },
  "dark": {
    "bg": {
      "app": "#0E1116FF",
      "surface": "$Colors-storm-200"
    },
    "border": { "default": "$Colors-does-not-exist" },
    "text": { "primary": "$Colors-base-white" }
  }
}"##;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
}

fn token_dir(palette: &str, mapping: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("base-styles.json"), palette).unwrap();
    fs::write(
        temp_dir.path().join("sentinel-ds-colors-mapped.json"),
        mapping,
    )
    .unwrap();
    temp_dir
}

fn config(dir: &Path) -> BuildConfig {
    BuildConfig::default().with_base_dir(dir)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_build_resolves_single_reference() {
    let dir = token_dir(
        r##"{"colors": {"storm": {"100": "#DDE6F1"}}}"##,
        r##"{"light": {"border": "$Colors-storm-100"}}"##,
    );
    let config = config(dir.path());

    let report = TokenBuild::new(&config).generated_at(at()).run().unwrap();

    let resolved = read_json(&report.json_path);
    assert_eq!(resolved["light"], json!({ "border": "#DDE6F1" }));
    assert!(resolved.get("dark").is_none());

    let css = fs::read_to_string(&report.css_path).unwrap();
    let root_block = css.split(":root {").nth(1).unwrap();
    let root_block = &root_block[..root_block.find('}').unwrap()];
    assert!(root_block.contains("--border: #DDE6F1;"));
    assert!(css.ends_with("[data-theme=\"dark\"] {\n  /* Dark theme */\n}\n"));
}

#[test]
fn test_build_keeps_unresolved_reference_and_succeeds() {
    let dir = token_dir(
        r##"{"colors": {"storm": {"100": "#DDE6F1"}}}"##,
        r##"{"dark": {"foo": {"bar": "$Colors-does-not-exist"}}}"##,
    );
    let config = config(dir.path());

    let report = TokenBuild::new(&config).generated_at(at()).run().unwrap();

    assert_eq!(
        report.unresolved,
        vec![UnresolvedReference {
            path: "dark.foo.bar".to_string(),
            reference: "$Colors-does-not-exist".to_string(),
        }]
    );
    assert!(!report.is_complete());

    let resolved = read_json(&report.json_path);
    assert_eq!(
        resolved["dark"],
        json!({ "foo": { "bar": "$Colors-does-not-exist" } })
    );
    assert!(report.css_path.exists());
}

#[test]
fn test_build_document_shape() {
    let dir = token_dir(PALETTE, MAPPING);
    let config = config(dir.path());

    let report = TokenBuild::new(&config).generated_at(at()).run().unwrap();
    let resolved = read_json(&report.json_path);

    let keys: Vec<&String> = resolved.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["meta", "light", "dark"]);
    assert_eq!(
        resolved["meta"],
        json!({
            "version": "1.0.0",
            "description": "Sentinel design system color mappings with resolved hex values",
            "generatedFrom": ["base-styles.json", "sentinel-ds-colors-mapped.json"],
            "generatedAt": "2026-10-19T08:30:00.000000Z"
        })
    );
    assert_eq!(
        resolved["light"],
        json!({
            "bg": { "app": "#F7F9FCFF", "surface": "#FFFFFFFF" },
            "border": { "default": "#DDE6F1FF" },
            "text": { "primary": "#1A1F26FF" }
        })
    );
    assert_eq!(resolved["dark"]["bg"]["surface"], "#C5D2E3FF");
    assert_eq!(resolved["dark"]["border"]["default"], "$Colors-does-not-exist");
    assert_eq!(report.themes.len(), 2);
}

#[test]
fn test_build_stylesheet_snapshot() {
    let dir = token_dir(PALETTE, MAPPING);
    let config = config(dir.path());

    let report = TokenBuild::new(&config).generated_at(at()).run().unwrap();
    let css = fs::read_to_string(&report.css_path).unwrap();

    assert_snapshot!("sentinel_stylesheet", css);
}

#[test]
fn test_build_is_deterministic_for_fixed_timestamp() {
    let dir = token_dir(PALETTE, MAPPING);
    let config = config(dir.path());
    let build = TokenBuild::new(&config).generated_at(at());

    let first = build.load_and_render().unwrap();
    let second = build.load_and_render().unwrap();

    assert_eq!(first.json, second.json);
    assert_eq!(first.css, second.css);
}

#[test]
fn test_build_only_timestamp_differs_between_runs() {
    let dir = token_dir(PALETTE, MAPPING);
    let config = config(dir.path());

    let first = TokenBuild::new(&config)
        .generated_at(at())
        .load_and_render()
        .unwrap();
    let later = Utc.with_ymd_and_hms(2027, 1, 2, 3, 4, 5).unwrap();
    let second = TokenBuild::new(&config)
        .generated_at(later)
        .load_and_render()
        .unwrap();

    let mut a: Value = serde_json::from_str(&first.json).unwrap();
    let mut b: Value = serde_json::from_str(&second.json).unwrap();
    assert_ne!(a, b);
    a["meta"]["generatedAt"] = Value::Null;
    b["meta"]["generatedAt"] = Value::Null;
    assert_eq!(a, b);
}

#[test]
fn test_missing_palette_is_fatal_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("sentinel-ds-colors-mapped.json"),
        MAPPING,
    )
    .unwrap();
    let config = config(temp_dir.path());

    let err = TokenBuild::new(&config).generated_at(at()).run().unwrap_err();

    assert!(matches!(err, TokenError::Read { .. }));
    assert!(!config.json_output_path().exists());
    assert!(!config.css_output_path().exists());
}

#[test]
fn test_malformed_mapping_is_fatal_and_keeps_previous_outputs() {
    let dir = token_dir(PALETTE, "{ \"light\": ");
    let config = config(dir.path());
    fs::write(config.json_output_path(), "previous json").unwrap();
    fs::write(config.css_output_path(), "previous css").unwrap();

    let err = TokenBuild::new(&config).generated_at(at()).run().unwrap_err();

    assert!(matches!(err, TokenError::Parse { .. }));
    assert_eq!(
        fs::read_to_string(config.json_output_path()).unwrap(),
        "previous json"
    );
    assert_eq!(
        fs::read_to_string(config.css_output_path()).unwrap(),
        "previous css"
    );
}

#[test]
fn test_existing_outputs_are_overwritten() {
    let dir = token_dir(PALETTE, MAPPING);
    let config = config(dir.path());
    fs::write(config.css_output_path(), "stale").unwrap();

    TokenBuild::new(&config).generated_at(at()).run().unwrap();

    let css = fs::read_to_string(config.css_output_path()).unwrap();
    assert!(css.starts_with("/**"));
}

#[test]
fn test_config_file_drives_build() {
    let dir = token_dir(PALETTE, MAPPING);
    fs::write(
        dir.path().join("tokensmith.yaml"),
        r#"
outputs:
  json: dist/colors.json
  css: dist/colors.css
meta:
  version: 2.1.0
css:
  dark_selector: ".theme-dark"
"#,
    )
    .unwrap();
    let config = BuildConfig::discover(dir.path()).unwrap();

    let report = TokenBuild::new(&config).generated_at(at()).run().unwrap();

    assert_eq!(report.json_path, dir.path().join("dist/colors.json"));
    let resolved = read_json(&report.json_path);
    assert_eq!(resolved["meta"]["version"], "2.1.0");
    let css = fs::read_to_string(&report.css_path).unwrap();
    assert!(css.contains(".theme-dark {\n  /* Dark theme */\n"));
}
