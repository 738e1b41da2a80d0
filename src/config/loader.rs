//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FolioError, FolioResult};
use crate::infrastructure::suggest::{last_segment, suggest_key};

use super::types::{Config, Verbosity};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "folio.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

const KNOWN_KEYS: &[&str] = &[
    "content",
    "dir",
    "site",
    "projects",
    "build",
    "out_dir",
    "base_path",
    "hash_routes",
    "clean_orphans",
    "check",
    "strict_warnings",
    "output",
    "verbosity",
    "color",
    "unicode",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FolioError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = last_segment(&path_str).to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key, KNOWN_KEYS),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First config file that exists: project `folio.toml`, then the user config
pub fn config_file(project_root: &Path) -> Option<PathBuf> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }

    user_config_path().filter(|p| p.is_file())
}

/// `~/.config/folio/config.toml` (or the platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

pub fn discover(project_root: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match config_file(project_root) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            if let Ok(config) = Config::load(&project_config) {
                return with_env_overrides(config);
            }
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            if let Ok(config) = Config::load(&user_config) {
                return with_env_overrides(config);
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (FOLIO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(dir) = get_env("FOLIO_CONTENT_DIR").filter(|v| !v.is_empty()) {
        config.content.dir = PathBuf::from(dir);
    }

    if let Some(dir) = get_env("FOLIO_OUT_DIR").filter(|v| !v.is_empty()) {
        config.build.out_dir = PathBuf::from(dir);
    }

    if let Some(base) = get_env("FOLIO_BASE_PATH").filter(|v| !v.is_empty()) {
        config.build.base_path = base;
    }

    if let Some(val) = get_env("FOLIO_HASH_ROUTES") {
        config.build.hash_routes = val.to_lowercase() != "false" && val != "0";
    }

    if let Some(verbosity) = get_env("FOLIO_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lenient(&verbosity);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
