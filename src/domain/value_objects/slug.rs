//! Slug value object
//!
//! A slug is the stable identifier shared by a content record, its project
//! detail and the `/projects/{slug}` route.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Slug of the featured (marquee) record.
///
/// The featured record lives outside the professional family, so the resolver
/// checks this value before searching the professional records.
pub const FEATURED_SLUG: &str = "health-coach";

/// Validated route slug (lowercase ASCII letters, digits, `-` and `_`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Parse and validate a slug
    pub fn parse(raw: &str) -> FolioResult<Self> {
        if raw.is_empty() {
            return Err(invalid(raw, "slug is empty"));
        }
        if raw.starts_with('-') || raw.ends_with('-') {
            return Err(invalid(raw, "slug cannot start or end with '-'"));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
        {
            return Err(invalid(
                raw,
                &format!("unexpected character '{}' (use a-z, 0-9, '-', '_')", bad),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// The featured sentinel slug
    pub fn featured() -> Self {
        Self(FEATURED_SLUG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_featured(&self) -> bool {
        self.0 == FEATURED_SLUG
    }
}

fn invalid(raw: &str, reason: &str) -> FolioError {
    FolioError::InvalidSlug {
        slug: raw.to_string(),
        reason: reason.to_string(),
    }
}

impl TryFrom<String> for Slug {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slug::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
