//! Build Use Case
//!
//! Orchestrates the build flow:
//! 1. Load and validate content
//! 2. Render every page in memory
//! 3. Plan against the output directory and the last manifest
//! 4. Write changed pages, remove stale ones, save the manifest

use std::path::{Path, PathBuf};

use crate::domain::entities::{BuildManifest, ContentStore};
use crate::domain::ports::{ContentRepository, FileSystem, ManifestRepository, PageRenderer};
use crate::domain::services::{
    BuildPlan, OrphanAction, PageAction, PageState, PlannedOrphan, PlannedPage, Planner,
};
use crate::domain::value_objects::ContentWarning;
use crate::error::{FolioError, FolioResult};
use crate::infrastructure::repositories::MANIFEST_FILE;

use super::site::render_site;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    /// Plan only; nothing is written
    pub dry_run: bool,
    /// Remove pages the previous build wrote and this one does not
    pub clean_orphans: bool,
}

impl BuildOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            dry_run: false,
            clean_orphans: true,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_clean_orphans(mut self, clean_orphans: bool) -> Self {
        self.clean_orphans = clean_orphans;
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(MANIFEST_FILE)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    /// Pages written (relative to the output directory)
    pub written: Vec<PathBuf>,
    /// Pages already up to date
    pub skipped: Vec<PathBuf>,
    /// Stale pages removed
    pub removed: Vec<PathBuf>,
    /// Stale pages kept because they were edited after the last build
    pub kept_modified: Vec<PathBuf>,
    /// Load and render warnings for content authors
    pub warnings: Vec<ContentWarning>,
    pub dry_run: bool,
}

impl BuildResult {
    pub fn page_count(&self) -> usize {
        self.written.len() + self.skipped.len()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty() || !self.kept_modified.is_empty()
    }
}

/// A plan together with everything needed to apply it
#[derive(Debug, Clone)]
pub struct PreparedBuild {
    pub plan: BuildPlan,
    pub previous: BuildManifest,
    pub warnings: Vec<ContentWarning>,
}

pub struct BuildUseCase<CR, FS, MR, R>
where
    CR: ContentRepository,
    FS: FileSystem,
    MR: ManifestRepository,
    R: PageRenderer,
{
    content: CR,
    fs: FS,
    manifests: MR,
    renderer: R,
}

impl<CR, FS, MR, R> BuildUseCase<CR, FS, MR, R>
where
    CR: ContentRepository,
    FS: FileSystem,
    MR: ManifestRepository,
    R: PageRenderer,
{
    pub fn new(content: CR, fs: FS, manifests: MR, renderer: R) -> Self {
        Self {
            content,
            fs,
            manifests,
            renderer,
        }
    }

    pub fn content(&self) -> &CR {
        &self.content
    }

    pub fn load(&self) -> FolioResult<ContentStore> {
        self.content.load()
    }

    /// Render and plan without touching the output directory.
    ///
    /// With `read_previous` the current content of existing pages is kept
    /// on the plan so callers can show diffs.
    pub fn prepare(&self, options: &BuildOptions, read_previous: bool) -> FolioResult<PreparedBuild> {
        let store = self.load()?;
        let render = render_site(&store, &self.renderer);

        let manifest_path = options.manifest_path();
        let previous = self
            .manifests
            .load(&manifest_path)
            .map_err(|e| FolioError::InvalidManifest {
                file: manifest_path.clone(),
                message: e.to_string(),
            })?;

        let mut plan = BuildPlan::default();
        for page in render.pages {
            let target = options.out_dir.join(page.path());
            let state = self.state_of(&target, read_previous)?;
            let action = Planner::plan_page(&page.hash(), &state);
            let previous_content = match state {
                PageState::Present { content, .. } => content,
                PageState::Missing => None,
            };
            plan.pages.push(PlannedPage {
                page,
                action,
                previous: previous_content,
            });
        }

        let current: Vec<&Path> = plan.pages.iter().map(|p| p.page.path()).collect();
        for orphan in previous.orphans(&current) {
            let relative = PathBuf::from(orphan);
            let state = self.state_of(&options.out_dir.join(&relative), false)?;
            let action = match previous.get(&relative) {
                Some(recorded) => Planner::plan_orphan(recorded, &state),
                None => OrphanAction::Forget,
            };
            plan.orphans.push(PlannedOrphan {
                path: relative,
                action,
            });
        }

        let mut warnings = store.load_warnings().to_vec();
        warnings.extend(render.warnings);

        Ok(PreparedBuild {
            plan,
            previous,
            warnings,
        })
    }

    pub fn execute(&self, options: &BuildOptions) -> FolioResult<BuildResult> {
        let prepared = self.prepare(options, false)?;
        let plan = &prepared.plan;

        let mut result = BuildResult {
            warnings: prepared.warnings.clone(),
            dry_run: options.dry_run,
            ..BuildResult::default()
        };

        for planned in &plan.pages {
            let relative = planned.page.path().to_path_buf();
            match planned.action {
                PageAction::Skip => result.skipped.push(relative),
                PageAction::Create | PageAction::Update => {
                    if !options.dry_run {
                        self.fs
                            .write(&options.out_dir.join(&relative), planned.page.html())?;
                    }
                    result.written.push(relative);
                }
            }
        }

        for orphan in &plan.orphans {
            match orphan.action {
                OrphanAction::Remove if options.clean_orphans => {
                    if !options.dry_run {
                        self.remove_page(&options.out_dir, &orphan.path)?;
                    }
                    result.removed.push(orphan.path.clone());
                }
                OrphanAction::KeepModified => result.kept_modified.push(orphan.path.clone()),
                OrphanAction::Remove | OrphanAction::Forget => {}
            }
        }

        if !options.dry_run {
            let manifest = plan.next_manifest(&prepared.previous, options.clean_orphans);
            let manifest_path = options.manifest_path();
            self.manifests
                .save(&manifest, &manifest_path)
                .map_err(|e| FolioError::InvalidManifest {
                    file: manifest_path,
                    message: e.to_string(),
                })?;
        }

        Ok(result)
    }

    fn state_of(&self, path: &Path, read_content: bool) -> FolioResult<PageState> {
        if !self.fs.exists(path) {
            return Ok(PageState::Missing);
        }
        let hash = self.fs.hash(path)?;
        let content = if read_content {
            Some(self.fs.read(path)?)
        } else {
            None
        };
        Ok(PageState::Present { hash, content })
    }

    /// Remove a page and any directories it leaves empty below `out_dir`
    fn remove_page(&self, out_dir: &Path, relative: &Path) -> FolioResult<()> {
        self.fs.remove(&out_dir.join(relative))?;
        let mut dir = relative.parent();
        while let Some(parent) = dir.filter(|p| !p.as_os_str().is_empty()) {
            self.fs.remove_empty_dir(&out_dir.join(parent))?;
            dir = parent.parent();
        }
        Ok(())
    }
}
