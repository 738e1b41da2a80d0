//! Content record entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Slug;

/// Which list a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// The single marquee project shown above the grid
    Featured,
    /// One of the "selected professional systems" cards
    #[default]
    Professional,
}

/// A list-view project entry.
///
/// Only `id`, `title` and `problem` (the summary) are required; the remaining
/// narrative fields are content-dependent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: Slug,

    /// Set by the loader; not part of the document
    #[serde(skip)]
    pub family: Family,

    pub title: String,

    /// Summary text shown on the card and in the detail header
    #[serde(rename = "problem")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<String>,

    /// Card-level outcome line (the detail view has its own `outcome`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_prevented: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_bridge: Option<String>,

    /// Source repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ContentRecord {
    /// Create a record with only the required fields
    pub fn new(id: Slug, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id,
            family: Family::Professional,
            title: title.into(),
            summary: summary.into(),
            approach: None,
            outcome: None,
            domain_tags: Vec::new(),
            tags: Vec::new(),
            risk_prevented: None,
            label: None,
            tagline: None,
            organizational_bridge: None,
            github: None,
        }
    }

    pub fn featured(mut self) -> Self {
        self.family = Family::Featured;
        self
    }

    pub fn is_featured(&self) -> bool {
        self.family == Family::Featured
    }

    /// Tags shown on the card: domain tags win over free-form tags
    pub fn display_tags(&self) -> &[String] {
        if self.domain_tags.is_empty() {
            &self.tags
        } else {
            &self.domain_tags
        }
    }
}
