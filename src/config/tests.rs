//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::loader::{parse_with_warnings, with_env_overrides_from};
use super::types::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.content.dir, PathBuf::from("content"));
    assert_eq!(config.content.site, "site.json");
    assert_eq!(config.content.projects, "projects.json");
    assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    assert_eq!(config.build.base_path, "/");
    assert!(!config.build.hash_routes);
    assert!(config.build.clean_orphans);
    assert!(!config.check.strict_warnings);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[content]
dir = "copy"

[build]
out_dir = "public"
base_path = "/portfolio/"
hash_routes = true
clean_orphans = false

[check]
strict_warnings = true

[output]
verbosity = "verbose"
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.content.dir, PathBuf::from("copy"));
    assert_eq!(config.content.site, "site.json");
    assert_eq!(config.build.out_dir, PathBuf::from("public"));
    assert_eq!(config.build.base_path, "/portfolio/");
    assert!(config.build.hash_routes);
    assert!(!config.build.clean_orphans);
    assert!(config.check.strict_warnings);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_config_partial_section_keeps_defaults() {
    let config: Config = toml::from_str("[build]\nhash_routes = true\n").unwrap();

    assert!(config.build.hash_routes);
    assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    assert!(config.build.clean_orphans);
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let toml = "[build]\nout_dri = \"public\"\n";

    let (config, warnings) = parse_with_warnings(toml, Path::new("folio.toml")).unwrap();

    assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "out_dri");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("out_dir"));
}

#[test]
fn test_unknown_section_without_close_match() {
    let toml = "[deployment]\ntarget = \"s3\"\n";

    let (_, warnings) = parse_with_warnings(toml, Path::new("folio.toml")).unwrap();

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].suggestion.is_none());
}

#[test]
fn test_wrong_type_is_invalid_config() {
    let toml = "[build]\nhash_routes = \"sometimes\"\n";

    let err = parse_with_warnings(toml, Path::new("folio.toml")).unwrap_err();
    assert!(matches!(err, crate::error::FolioError::InvalidConfig { .. }));
}

#[test]
fn test_verbosity_serde() {
    let config: Config = toml::from_str("[output]\nverbosity = \"quiet\"\n").unwrap();
    assert_eq!(config.output.verbosity, Verbosity::Quiet);

    let config: Config = toml::from_str("[output]\nverbosity = \"debug\"\n").unwrap();
    assert_eq!(config.output.verbosity, Verbosity::Debug);
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("FOLIO_CONTENT_DIR", "copy"),
            ("FOLIO_OUT_DIR", "public"),
            ("FOLIO_BASE_PATH", "/me/"),
            ("FOLIO_HASH_ROUTES", "1"),
            ("FOLIO_VERBOSITY", "verbose"),
        ]),
    );

    assert_eq!(config.content.dir, PathBuf::from("copy"));
    assert_eq!(config.build.out_dir, PathBuf::from("public"));
    assert_eq!(config.build.base_path, "/me/");
    assert!(config.build.hash_routes);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
}

#[test]
fn test_env_hash_routes_false_values() {
    let mut config = Config::default();
    config.build.hash_routes = true;

    let config = with_env_overrides_from(config, env(&[("FOLIO_HASH_ROUTES", "false")]));
    assert!(!config.build.hash_routes);

    let config = with_env_overrides_from(config, env(&[("FOLIO_HASH_ROUTES", "0")]));
    assert!(!config.build.hash_routes);
}

#[test]
fn test_env_empty_dir_is_ignored() {
    let config = with_env_overrides_from(Config::default(), env(&[("FOLIO_OUT_DIR", "")]));
    assert_eq!(config.build.out_dir, PathBuf::from("dist"));
}

#[test]
fn test_load_project_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[build]\nout_dir = \"site\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.build.out_dir, PathBuf::from("site"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("folio.toml")).unwrap_err();
    assert!(matches!(err, crate::error::FolioError::Io(_)));
}

#[test]
fn test_resolve_paths_against_root() {
    let config = Config::default();
    let root = Path::new("/site");

    assert_eq!(config.content.resolve_dir(root), PathBuf::from("/site/content"));
    assert_eq!(config.build.resolve_out_dir(root), PathBuf::from("/site/dist"));
}
