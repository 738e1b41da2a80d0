//! JSON Content Repository
//!
//! Reads `site.json` and `projects.json`, collects unknown keys as warnings,
//! and validates the result into a `ContentStore`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{ContentRecord, ContentStore, ProjectCopy, ProjectDetail, SiteCopy};
use crate::domain::ports::ContentRepository;
use crate::domain::services::validate_content;
use crate::domain::value_objects::{ContentWarning, Slug, WarningKind, FEATURED_SLUG};
use crate::error::{FolioError, FolioResult};
use crate::infrastructure::suggest::{last_segment, suggest_key};

/// Every key either document may contain, for did-you-mean hints
const KNOWN_KEYS: &[&str] = &[
    // site.json
    "owner",
    "hero",
    "headline",
    "subheadline",
    "narrativeSpine",
    "cta",
    "primary",
    "secondary",
    "text",
    "link",
    "about",
    "location",
    "experience",
    "focus",
    "assertionsTitle",
    "assertions",
    "claim",
    "explainer",
    "mechanism",
    "boundaries",
    "judgmentCalls",
    "title",
    "items",
    "writing",
    "subtitle",
    "url",
    "links",
    "github",
    "linkedin",
    "medium",
    "disclosure",
    // projects.json
    "professional",
    "marquee",
    "projectDetails",
    "professionalFraming",
    "id",
    "problem",
    "approach",
    "outcome",
    "domainTags",
    "tags",
    "riskPrevented",
    "label",
    "tagline",
    "organizationalBridge",
    "context",
    "systemDesign",
    "keyDecisions",
    "governanceRisk",
];

/// `projects.json` as written by content authors
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDocument {
    #[serde(default)]
    professional: Vec<ContentRecord>,
    marquee: ContentRecord,
    #[serde(default)]
    project_details: BTreeMap<Slug, ProjectDetail>,
    #[serde(default)]
    professional_framing: Option<String>,
}

impl ProjectDocument {
    fn into_copy(self) -> ProjectCopy {
        let mut copy = ProjectCopy::new(self.marquee);
        copy.professional = self.professional;
        copy.details = self.project_details;
        copy.professional_framing = self.professional_framing;
        copy
    }
}

/// Content loaded from two JSON files on disk
#[derive(Debug, Clone)]
pub struct JsonContentRepository {
    site: PathBuf,
    projects: PathBuf,
}

impl JsonContentRepository {
    pub fn new(site: impl Into<PathBuf>, projects: impl Into<PathBuf>) -> Self {
        Self {
            site: site.into(),
            projects: projects.into(),
        }
    }

    /// Both documents inside one content directory
    pub fn in_dir(dir: &Path, site_file: &str, projects_file: &str) -> Self {
        Self::new(dir.join(site_file), dir.join(projects_file))
    }

    pub fn site_path(&self) -> &Path {
        &self.site
    }

    pub fn projects_path(&self) -> &Path {
        &self.projects
    }
}

impl ContentRepository for JsonContentRepository {
    fn load(&self) -> FolioResult<ContentStore> {
        let site_value = read_json(&self.site)?;
        let (site, mut warnings) = deserialize_with_warnings::<SiteCopy>(site_value, &self.site)?;

        let mut projects_value = read_json(&self.projects)?;
        default_featured_id(&mut projects_value);
        let (document, project_warnings) =
            deserialize_with_warnings::<ProjectDocument>(projects_value, &self.projects)?;
        warnings.extend(project_warnings);

        let projects = document.into_copy();
        warnings.extend(validate_content(&site, &self.site, &projects, &self.projects)?);

        Ok(ContentStore::new(site, projects).with_warnings(warnings))
    }

    fn sources(&self) -> Vec<PathBuf> {
        vec![self.site.clone(), self.projects.clone()]
    }
}

fn read_json(path: &Path) -> FolioResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FolioError::ContentNotFound {
            path: path.to_path_buf(),
        },
        _ => FolioError::Io(e),
    })?;

    // Parsing to a Value first keeps line/column in syntax errors
    serde_json::from_str(&content).map_err(|e| FolioError::InvalidContent {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The marquee record may omit its id; it can only ever be the sentinel.
fn default_featured_id(document: &mut Value) {
    if let Some(marquee) = document.get_mut("marquee").and_then(Value::as_object_mut) {
        marquee
            .entry("id")
            .or_insert_with(|| Value::String(FEATURED_SLUG.to_string()));
    }
}

fn deserialize_with_warnings<T: DeserializeOwned>(
    value: Value,
    file: &Path,
) -> FolioResult<(T, Vec<ContentWarning>)> {
    let mut unknown: Vec<String> = Vec::new();
    let parsed: T = serde_ignored::deserialize(value, |path| unknown.push(path.to_string()))
        .map_err(|e| FolioError::InvalidContent {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown
        .into_iter()
        .map(|path| {
            let key = last_segment(&path).to_string();
            let mut warning = ContentWarning::new(
                WarningKind::UnknownKey,
                path.clone(),
                format!("unknown key '{}'", key),
            )
            .with_field(key.clone())
            .with_file(file);
            if let Some(suggestion) = suggest_key(&key, KNOWN_KEYS) {
                warning = warning.with_suggestion(suggestion);
            }
            warning
        })
        .collect();

    Ok((parsed, warnings))
}
