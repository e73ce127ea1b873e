//! Tests for the conversion command.

use super::{build_level, load_config};
use crate::cli::ConvertArgs;
use crate::error::TylerError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Helper functions
// =========================================================================

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn args(input: PathBuf) -> ConvertArgs {
    ConvertArgs {
        input: Some(input),
        config: None,
        name: None,
        author: None,
        license: None,
        dump_config: false,
    }
}

// =========================================================================
// Conversion runs
// =========================================================================

#[test]
fn test_convert_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(
        temp_dir.path(),
        "map.json",
        "[[[0,13],[0,0],[0,0],[0,13]],[[0,13],[7,2],[9,9],[0,0]]]",
    );

    let level = build_level(&args(input)).unwrap();

    assert!(level.starts_with("(supertux-level"));
    assert!(level.contains("(name (_ \"test\"))"));
    assert!(level.contains("(author \"Zorian Medwid\")"));
    assert!(level.contains("(spawnpoint\n      (name \"main\")\n      (x 16)\n      (y 50)\n    )"));
    assert!(level.contains("(solid #t)"));
    assert!(level.contains("(width 4)\n      (height 2)"));
    assert!(level.contains("      12 0 0 10 \n      11 0 0 0 \n"));
    assert!(!level.contains('$'));
}

#[test]
fn test_convert_with_config_and_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(temp_dir.path(), "map.json", "[[[1,1],[2,2]]]");
    let config = write_file(
        temp_dir.path(),
        "level.yaml",
        r#"
name: from config
author: config author
entities: []
obstacle_tilemap:
  solid: false
  z_pos: -100
obstacle_conversions:
  - find: [[1, 1], [2, 2]]
    replace: [85, 86]
"#,
    );

    let mut run = args(input);
    run.config = Some(config);
    run.name = Some("from flag".to_string());

    let level = build_level(&run).unwrap();

    assert!(level.contains("(name (_ \"from flag\"))"));
    assert!(level.contains("(author \"config author\")"));
    assert!(!level.contains("spawnpoint"));
    assert!(level.contains("(solid #f)"));
    assert!(level.contains("(z-pos -100)"));
    assert!(level.contains("      85 86 \n"));
}

#[test]
fn test_missing_input_is_user_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = build_level(&args(temp_dir.path().join("missing.json"))).unwrap_err();

    assert!(matches!(err, TylerError::UserError(_)));
    assert!(err.to_string().contains("failed to read input file"));
}

#[test]
fn test_malformed_input_is_input_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(temp_dir.path(), "map.json", "not json");

    let err = build_level(&args(input)).unwrap_err();
    assert!(matches!(err, TylerError::InputError(_)));
}

#[test]
fn test_jagged_input_is_input_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(temp_dir.path(), "map.json", "[[[0,0],[0,0]],[[0,0]]]");

    let err = build_level(&args(input)).unwrap_err();
    assert!(matches!(err, TylerError::InputError(_)));
}

#[test]
fn test_invalid_config_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(temp_dir.path(), "map.json", "[[[0,0]]]");
    let config = write_file(
        temp_dir.path(),
        "level.yaml",
        "obstacle_conversions:\n  - find: [[0, 0]]\n    replace: []\n",
    );

    let mut run = args(input);
    run.config = Some(config);

    let err = build_level(&run).unwrap_err();
    assert!(matches!(err, TylerError::ConfigError(_)));
}

#[test]
fn test_unknown_template_placeholder_is_render_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(temp_dir.path(), "map.json", "[[[0,0]]]");
    let config = write_file(
        temp_dir.path(),
        "level.yaml",
        "templates:\n  level: \"(level $title)\"\n",
    );

    let mut run = args(input);
    run.config = Some(config);

    let err = build_level(&run).unwrap_err();
    assert!(matches!(err, TylerError::RenderError(_)));
}

#[test]
fn test_missing_input_argument_is_user_error() {
    let mut run = args(PathBuf::from("unused.json"));
    run.input = None;

    let err = build_level(&run).unwrap_err();
    assert!(matches!(err, TylerError::UserError(_)));
}

#[test]
fn test_load_config_applies_flags_over_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(
        temp_dir.path(),
        "level.yaml",
        "name: file name\nauthor: file author\n",
    );

    let mut run = args(PathBuf::from("unused.json"));
    run.config = Some(config);
    run.author = Some("flag author".to_string());

    let config = load_config(&run).unwrap();
    assert_eq!(config.name, "file name");
    assert_eq!(config.author, "flag author");

    // The dumped YAML reloads to the same effective config.
    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("flag author"));
    assert_eq!(crate::config::Config::from_yaml(&yaml).unwrap(), config);
}
