use std::path::{Path, PathBuf};

use folio::application::BuildUseCase;
use folio::config::{Config, ConfigWarning, PROJECT_CONFIG_FILE};
use folio::infrastructure::{
    HtmlOptions, HtmlRenderer, JsonContentRepository, LocalFs, TomlManifestRepository,
};
use folio::FolioResult;

use super::GlobalArgs;
use crate::ui::context::UiContext;

pub type SiteBuild =
    BuildUseCase<JsonContentRepository, LocalFs, TomlManifestRepository, HtmlRenderer>;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `folio.toml` (project config)
/// - `content/` holding a `site.json`
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("content").join("site.json").is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Where a command runs: project root, effective config, content location.
///
/// Paths given on the command line resolve against the working directory;
/// paths from config resolve against the project root.
#[derive(Debug, Clone)]
pub struct Project {
    pub cwd: PathBuf,
    pub root: PathBuf,
    pub config: Config,
    pub config_warnings: Vec<ConfigWarning>,
    pub content_dir: PathBuf,
    source_override: Option<PathBuf>,
}

impl Project {
    pub fn open(source: Option<&Path>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = discover_project_root(&cwd);
        Ok(Self::at(cwd, root, source.map(Path::to_path_buf))?)
    }

    fn at(cwd: PathBuf, root: PathBuf, source_override: Option<PathBuf>) -> FolioResult<Self> {
        let (config, config_warnings) = Config::discover(&root)?;
        let content_dir = match &source_override {
            Some(source) => cwd.join(source),
            None => config.content.resolve_dir(&root),
        };
        Ok(Self {
            cwd,
            root,
            config,
            config_warnings,
            content_dir,
            source_override,
        })
    }

    /// Re-read config from disk, keeping command-line overrides
    pub fn reload(&self) -> FolioResult<Self> {
        Self::at(
            self.cwd.clone(),
            self.root.clone(),
            self.source_override.clone(),
        )
    }

    pub fn ui(&self, global: &GlobalArgs) -> UiContext {
        UiContext::new(global.json, global.verbose, global.color, &self.config)
    }

    pub fn repository(&self) -> JsonContentRepository {
        JsonContentRepository::in_dir(
            &self.content_dir,
            &self.config.content.site,
            &self.config.content.projects,
        )
    }

    pub fn out_dir(&self, cli_out: Option<&Path>) -> PathBuf {
        match cli_out {
            Some(out) => self.cwd.join(out),
            None => self.config.build.resolve_out_dir(&self.root),
        }
    }

    pub fn renderer(&self, base_path: Option<&str>, hash_routes: bool) -> HtmlRenderer {
        let base_path = base_path.unwrap_or(&self.config.build.base_path);
        HtmlRenderer::new(HtmlOptions::new(
            base_path,
            hash_routes || self.config.build.hash_routes,
        ))
    }

    pub fn build_use_case(&self, renderer: HtmlRenderer) -> SiteBuild {
        BuildUseCase::new(
            self.repository(),
            LocalFs::new(),
            TomlManifestRepository::new(),
            renderer,
        )
    }

    /// Files a watcher should react to: both documents and the project config
    pub fn watch_sources(&self) -> Vec<PathBuf> {
        let repo = self.repository();
        vec![
            repo.site_path().to_path_buf(),
            repo.projects_path().to_path_buf(),
            self.root.join(PROJECT_CONFIG_FILE),
        ]
    }

    /// Path shown in headers, relative to the working directory when possible
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.cwd).unwrap_or(path)
    }
}
