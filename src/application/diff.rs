//! Diff Use Case
//!
//! A dry run of the build that keeps old and new page content, so the CLI
//! can show what a build would change.

use std::path::PathBuf;

use crate::domain::ports::{ContentRepository, FileSystem, ManifestRepository, PageRenderer};
use crate::domain::services::{OrphanAction, PageAction};
use crate::domain::value_objects::ContentWarning;
use crate::error::FolioResult;

use super::build::{BuildOptions, BuildUseCase};

/// Type of change for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Create,
    Update,
    Unchanged,
}

impl From<PageAction> for ChangeType {
    fn from(action: PageAction) -> Self {
        match action {
            PageAction::Create => ChangeType::Create,
            PageAction::Update => ChangeType::Update,
            PageAction::Skip => ChangeType::Unchanged,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiffEntry {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub change_type: ChangeType,
    pub old_content: Option<String>,
    pub new_content: String,
}

#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub creates: Vec<DiffEntry>,
    pub updates: Vec<DiffEntry>,
    pub unchanged: Vec<DiffEntry>,
    /// Stale pages a build would remove
    pub orphans: Vec<PathBuf>,
    /// Stale pages a build would keep because they were edited
    pub modified_orphans: Vec<PathBuf>,
    pub warnings: Vec<ContentWarning>,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        !self.creates.is_empty() || !self.updates.is_empty() || !self.orphans.is_empty()
    }

    pub fn total_affected(&self) -> usize {
        self.creates.len() + self.updates.len() + self.orphans.len()
    }
}

pub struct DiffUseCase<CR, FS, MR, R>
where
    CR: ContentRepository,
    FS: FileSystem,
    MR: ManifestRepository,
    R: PageRenderer,
{
    build: BuildUseCase<CR, FS, MR, R>,
}

impl<CR, FS, MR, R> DiffUseCase<CR, FS, MR, R>
where
    CR: ContentRepository,
    FS: FileSystem,
    MR: ManifestRepository,
    R: PageRenderer,
{
    pub fn new(build: BuildUseCase<CR, FS, MR, R>) -> Self {
        Self { build }
    }

    pub fn execute(&self, options: &BuildOptions) -> FolioResult<DiffResult> {
        let prepared = self.build.prepare(options, true)?;
        let mut result = DiffResult {
            warnings: prepared.warnings,
            ..DiffResult::default()
        };

        for planned in prepared.plan.pages {
            let entry = DiffEntry {
                path: planned.page.path().to_path_buf(),
                change_type: planned.action.into(),
                old_content: planned.previous,
                new_content: planned.page.html().to_string(),
            };
            match entry.change_type {
                ChangeType::Create => result.creates.push(entry),
                ChangeType::Update => result.updates.push(entry),
                ChangeType::Unchanged => result.unchanged.push(entry),
            }
        }

        for orphan in prepared.plan.orphans {
            match orphan.action {
                OrphanAction::Remove if options.clean_orphans => result.orphans.push(orphan.path),
                OrphanAction::KeepModified => result.modified_orphans.push(orphan.path),
                OrphanAction::Remove | OrphanAction::Forget => {}
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContentStore;
    use crate::infrastructure::fs::MockFs;
    use crate::infrastructure::html::{HtmlOptions, HtmlRenderer};
    use crate::infrastructure::TomlManifestRepository;
    use crate::test_support::governed_store;
    use std::path::Path;

    struct FixedContent(ContentStore);

    impl ContentRepository for FixedContent {
        fn load(&self) -> FolioResult<ContentStore> {
            Ok(self.0.clone())
        }
        fn sources(&self) -> Vec<PathBuf> {
            Vec::new()
        }
    }

    #[test]
    fn empty_output_dir_is_all_creates() {
        let fs = MockFs::new();
        let diff = DiffUseCase::new(BuildUseCase::new(
            FixedContent(governed_store()),
            &fs,
            TomlManifestRepository::with_fs(&fs),
            HtmlRenderer::new(HtmlOptions::default().with_year(2026)),
        ));

        let result = diff.execute(&BuildOptions::new("dist")).unwrap();

        assert_eq!(result.creates.len(), 4);
        assert!(result.updates.is_empty());
        assert!(result.has_changes());
        assert!(fs.paths().is_empty());
    }

    #[test]
    fn changed_page_carries_old_content() {
        let fs = MockFs::new().with_file("dist/404.html", "old");
        let diff = DiffUseCase::new(BuildUseCase::new(
            FixedContent(governed_store()),
            &fs,
            TomlManifestRepository::with_fs(&fs),
            HtmlRenderer::new(HtmlOptions::default().with_year(2026)),
        ));

        let result = diff.execute(&BuildOptions::new("dist")).unwrap();

        assert_eq!(result.updates.len(), 1);
        assert_eq!(result.updates[0].path, Path::new("404.html"));
        assert_eq!(result.updates[0].old_content.as_deref(), Some("old"));
        assert!(result.updates[0].new_content.contains("Project not found"));
    }
}
