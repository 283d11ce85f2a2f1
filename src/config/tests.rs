//! Tests for config functionality.

use crate::config::types::default_include_globs;
use crate::config::{Config, OutputFormat};
use crate::context::RepoContext;
use crate::error::DiffcovError;
use crate::test_support::create_test_repo;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.context_lines, 3);
    assert!(config.detect_renames);
    assert_eq!(config.include_globs, vec!["**/*.cs"]);
    assert!(config.exclude_globs.is_empty());
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.column_width, 60);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
context_lines: 0
output_format: json
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert_eq!(config.context_lines, 0);
    assert_eq!(config.output_format, OutputFormat::Json);

    // Unspecified values should use defaults
    assert_eq!(config.include_globs, default_include_globs());
    assert_eq!(config.column_width, 60);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
context_lines: 5
detect_renames: false
include_globs:
  - "src/**/*.cs"
  - "lib/**/*.java"
exclude_globs:
  - "**/Generated/**"
output_format: text
column_width: 80
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.context_lines, 5);
    assert!(!config.detect_renames);
    assert_eq!(config.include_globs, vec!["src/**/*.cs", "lib/**/*.java"]);
    assert_eq!(config.exclude_globs, vec!["**/Generated/**"]);
    assert_eq!(config.column_width, 80);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
context_lines: 1
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.context_lines, 1);
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let result = Config::from_yaml("context_lines: [not, a, number]");

    assert!(matches!(result, Err(DiffcovError::ConfigError(_))));
}

#[test]
fn test_invalid_output_format() {
    let result = Config::from_yaml("output_format: html");

    assert!(matches!(result, Err(DiffcovError::ConfigError(_))));
}

#[test]
fn test_empty_include_globs_rejected() {
    let result = Config::from_yaml("include_globs: []");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("include_globs"));
}

#[test]
fn test_narrow_column_width_rejected() {
    let result = Config::from_yaml("column_width: 4");

    let err = result.unwrap_err();
    assert!(matches!(err, DiffcovError::ConfigError(_)));
    assert!(err.to_string().contains("column_width"));
}

#[test]
fn test_invalid_glob_rejected() {
    let result = Config::from_yaml("exclude_globs: ['src/[unclosed']");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("exclude_globs"));
}

#[test]
fn test_file_filter_include_and_exclude() {
    let config = Config {
        include_globs: vec!["**/*.cs".to_string()],
        exclude_globs: vec!["**/Generated/**".to_string()],
        ..Config::default()
    };
    let filter = config.file_filter().unwrap();

    assert!(filter.is_match("src/App/Calc.cs"));
    assert!(filter.is_match("src\\App\\Calc.cs"));
    assert!(!filter.is_match("src/App/Generated/Model.cs"));
    assert!(!filter.is_match("README.md"));
}

#[test]
fn test_load_missing_file_is_config_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let result = Config::load(temp_dir.path().join(".diffcov.yaml"));

    assert!(matches!(result, Err(DiffcovError::ConfigError(_))));
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = create_test_repo();
    let ctx = RepoContext::resolve_from(temp_dir.path()).unwrap();

    let config = Config::load_or_default(&ctx).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_reads_repo_file() {
    let temp_dir = create_test_repo();
    std::fs::write(temp_dir.path().join(".diffcov.yaml"), "column_width: 40\n").unwrap();
    let ctx = RepoContext::resolve_from(temp_dir.path()).unwrap();

    let config = Config::load_or_default(&ctx).unwrap();

    assert_eq!(config.column_width, 40);
}
