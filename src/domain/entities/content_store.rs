//! Content store - both documents, validated and read-only.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::{ContentWarning, Slug};

use super::{ContentRecord, ProjectDetail, SiteCopy};

/// The project document after validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCopy {
    pub professional: Vec<ContentRecord>,
    /// The marquee record; its id is always the featured sentinel
    pub featured: ContentRecord,
    pub details: BTreeMap<Slug, ProjectDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_framing: Option<String>,
}

impl ProjectCopy {
    pub fn new(featured: ContentRecord) -> Self {
        Self {
            professional: Vec::new(),
            featured: featured.featured(),
            details: BTreeMap::new(),
            professional_framing: None,
        }
    }

    pub fn with_professional(mut self, record: ContentRecord) -> Self {
        self.professional.push(record);
        self
    }

    pub fn with_detail(mut self, slug: Slug, detail: ProjectDetail) -> Self {
        self.details.insert(slug, detail);
        self
    }
}

/// Read-only content shared by every renderer.
///
/// Built once at startup; nothing mutates it afterwards, so it can be handed
/// out by shared reference without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    site: SiteCopy,
    projects: ProjectCopy,
    warnings: Vec<ContentWarning>,
}

impl ContentStore {
    pub fn new(site: SiteCopy, projects: ProjectCopy) -> Self {
        Self {
            site,
            projects,
            warnings: Vec::new(),
        }
    }

    /// Attach warnings collected while loading the documents
    pub fn with_warnings(mut self, warnings: Vec<ContentWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn site(&self) -> &SiteCopy {
        &self.site
    }

    pub fn projects(&self) -> &ProjectCopy {
        &self.projects
    }

    pub fn featured(&self) -> &ContentRecord {
        &self.projects.featured
    }

    pub fn professional(&self) -> &[ContentRecord] {
        &self.projects.professional
    }

    pub fn detail(&self, slug: &str) -> Option<&ProjectDetail> {
        self.projects.details.get(slug)
    }

    pub fn details(&self) -> impl Iterator<Item = (&Slug, &ProjectDetail)> {
        self.projects.details.iter()
    }

    pub fn load_warnings(&self) -> &[ContentWarning] {
        &self.warnings
    }
}
