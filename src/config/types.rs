//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

use super::loader::{self, ConfigWarning};

/// Where the two content documents live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_site_file")]
    pub site: String,

    #[serde(default = "default_projects_file")]
    pub projects: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            site: default_site_file(),
            projects: default_projects_file(),
        }
    }
}

impl ContentConfig {
    /// Content directory resolved against the project root
    pub fn resolve_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.dir)
    }
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_site_file() -> String {
    "site.json".to_string()
}

fn default_projects_file() -> String {
    "projects.json".to_string()
}

/// Build output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Prefix for every internal link (`/` or `/portfolio/`)
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Emit `#/projects/x` links instead of `/projects/x/`
    #[serde(default)]
    pub hash_routes: bool,

    /// Remove pages the current build no longer produces
    #[serde(default = "default_true")]
    pub clean_orphans: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            base_path: default_base_path(),
            hash_routes: false,
            clean_orphans: true,
        }
    }
}

impl BuildConfig {
    pub fn resolve_out_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.out_dir)
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

/// Content lint settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Treat lint warnings as failures
    #[serde(default)]
    pub strict_warnings: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a user-supplied level; anything unrecognized is `Normal`
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Equivalent `-v` count
    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FolioResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, then user config, then defaults; env overrides on top.
    ///
    /// A config file that exists but does not parse is an error.
    pub fn discover(project_root: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }

    /// Like `discover`, but falls back to defaults when a file is broken
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (FOLIO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
