//! Build planning service
//!
//! Pure domain logic: given the freshly rendered pages, what is on disk and
//! what the last build recorded, decide what to write and what to remove.
//! All I/O is done by the caller.

use std::path::PathBuf;

use crate::domain::entities::{BuildManifest, RenderedPage};
use crate::domain::value_objects::ContentHash;

/// What to do with a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Not on disk yet
    Create,
    /// On disk with different content
    Update,
    /// On disk and identical
    Skip,
}

/// What to do with a page the last build wrote but this one does not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanAction {
    /// Unchanged since we wrote it
    Remove,
    /// Edited by hand after the build; left alone
    KeepModified,
    /// Already gone from disk
    Forget,
}

/// Current state of an output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Missing,
    Present {
        hash: ContentHash,
        /// Content, when the caller wants diffs
        content: Option<String>,
    },
}

impl PageState {
    pub fn present(hash: ContentHash) -> Self {
        PageState::Present {
            hash,
            content: None,
        }
    }

    pub fn hash(&self) -> Option<&ContentHash> {
        match self {
            PageState::Missing => None,
            PageState::Present { hash, .. } => Some(hash),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPage {
    pub page: RenderedPage,
    pub action: PageAction,
    /// Content currently on disk, if it was read
    pub previous: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOrphan {
    /// Path relative to the output directory, as stored in the manifest
    pub path: PathBuf,
    pub action: OrphanAction,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildPlan {
    pub pages: Vec<PlannedPage>,
    pub orphans: Vec<PlannedOrphan>,
}

impl BuildPlan {
    pub fn with_action(&self, action: PageAction) -> impl Iterator<Item = &PlannedPage> {
        self.pages.iter().filter(move |p| p.action == action)
    }

    pub fn count(&self, action: PageAction) -> usize {
        self.with_action(action).count()
    }

    pub fn to_write(&self) -> impl Iterator<Item = &PlannedPage> {
        self.pages.iter().filter(|p| p.action != PageAction::Skip)
    }

    pub fn orphans_with(&self, action: OrphanAction) -> impl Iterator<Item = &PlannedOrphan> {
        self.orphans.iter().filter(move |o| o.action == action)
    }

    pub fn has_changes(&self) -> bool {
        self.to_write().next().is_some() || self.orphans_with(OrphanAction::Remove).next().is_some()
    }

    /// Manifest describing the output after this plan is applied.
    ///
    /// Hand-edited orphans stay tracked so they keep being reported until
    /// someone deletes them.
    pub fn next_manifest(&self, previous: &BuildManifest, clean_orphans: bool) -> BuildManifest {
        let mut manifest = BuildManifest::new();
        for planned in &self.pages {
            manifest.set(planned.page.path(), planned.page.hash());
        }
        for orphan in &self.orphans {
            let keep = match orphan.action {
                OrphanAction::Forget => false,
                OrphanAction::Remove => !clean_orphans,
                OrphanAction::KeepModified => true,
            };
            if keep {
                if let Some(hash) = previous.get(&orphan.path) {
                    manifest.set(&orphan.path, hash.clone());
                }
            }
        }
        manifest
    }
}

/// Pure planning functions
pub struct Planner;

impl Planner {
    pub fn plan_page(new_hash: &ContentHash, state: &PageState) -> PageAction {
        match state.hash() {
            None => PageAction::Create,
            Some(current) if current == new_hash => PageAction::Skip,
            Some(_) => PageAction::Update,
        }
    }

    pub fn plan_orphan(recorded: &ContentHash, state: &PageState) -> OrphanAction {
        match state.hash() {
            None => OrphanAction::Forget,
            Some(current) if current == recorded => OrphanAction::Remove,
            Some(_) => OrphanAction::KeepModified,
        }
    }
}
