//! Load-time content rules.
//!
//! Violations that make the content unusable (empty titles, duplicate ids, a
//! mis-labelled featured record) are errors. Join gaps are warnings: the
//! resolver treats them as not-found at read time.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::entities::{ProjectCopy, SiteCopy};
use crate::domain::value_objects::{ContentWarning, WarningKind, FEATURED_SLUG};
use crate::error::{FolioError, FolioResult};

/// Validate both documents
pub fn validate_content(
    site: &SiteCopy,
    site_file: &Path,
    projects: &ProjectCopy,
    projects_file: &Path,
) -> FolioResult<Vec<ContentWarning>> {
    let mut warnings = validate_site(site, site_file)?;
    warnings.extend(validate_projects(projects, projects_file)?);
    Ok(warnings)
}

pub fn validate_site(site: &SiteCopy, file: &Path) -> FolioResult<Vec<ContentWarning>> {
    let mut warnings = Vec::new();

    if site.hero.headline.trim().is_empty() {
        return Err(empty_field("headline", "hero", file));
    }

    let mut seen = HashSet::new();
    for assertion in &site.assertions {
        if assertion.id.trim().is_empty() {
            return Err(empty_field("id", &assertion.claim, file));
        }
        if !seen.insert(assertion.id.as_str()) {
            return Err(FolioError::DuplicateId {
                id: assertion.id.clone(),
                file: file.to_path_buf(),
            });
        }
    }

    if let Some(cta) = &site.hero.cta {
        if cta.primary.link.trim().is_empty() {
            warnings.push(
                ContentWarning::empty_field("hero", "cta.primary.link").with_file(file),
            );
        }
    }

    Ok(warnings)
}

pub fn validate_projects(projects: &ProjectCopy, file: &Path) -> FolioResult<Vec<ContentWarning>> {
    let mut warnings = Vec::new();

    let featured = &projects.featured;
    if featured.id != FEATURED_SLUG {
        return Err(FolioError::FeaturedIdMismatch {
            found: featured.id.to_string(),
            expected: FEATURED_SLUG.to_string(),
            file: file.to_path_buf(),
        });
    }

    let mut seen = HashSet::new();
    seen.insert(featured.id.as_str());
    if featured.title.trim().is_empty() {
        return Err(empty_field("title", featured.id.as_str(), file));
    }

    for record in &projects.professional {
        if !seen.insert(record.id.as_str()) {
            return Err(FolioError::DuplicateId {
                id: record.id.to_string(),
                file: file.to_path_buf(),
            });
        }
        if record.title.trim().is_empty() {
            return Err(empty_field("title", record.id.as_str(), file));
        }
    }

    for record in std::iter::once(featured).chain(projects.professional.iter()) {
        if record.summary.trim().is_empty() {
            warnings.push(ContentWarning::empty_field(record.id.as_str(), "problem").with_file(file));
        }
        if !projects.details.contains_key(record.id.as_str()) {
            warnings.push(
                ContentWarning::new(
                    WarningKind::MissingJoin,
                    record.id.as_str(),
                    "no entry in projectDetails; its detail page will show not-found",
                )
                .with_file(file),
            );
        }
    }

    for slug in projects.details.keys() {
        if !seen.contains(slug.as_str()) {
            warnings.push(
                ContentWarning::new(
                    WarningKind::MissingJoin,
                    slug.as_str(),
                    "projectDetails entry has no matching project record",
                )
                .with_file(file),
            );
        }
    }

    Ok(warnings)
}

fn empty_field(field: &str, record: &str, file: &Path) -> FolioError {
    FolioError::EmptyField {
        field: field.to_string(),
        record: record.to_string(),
        file: file.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Assertion, ContentRecord, FooterLinks, Hero, ProjectDetail};
    use crate::domain::value_objects::Slug;

    fn file() -> &'static Path {
        Path::new("projects.json")
    }

    fn projects() -> ProjectCopy {
        ProjectCopy::new(ContentRecord::new(Slug::featured(), "Coach", "f"))
            .with_professional(ContentRecord::new(Slug::parse("a").unwrap(), "A", "p"))
            .with_detail(
                Slug::featured(),
                ProjectDetail::new("c", "s", vec!["d".into()]),
            )
            .with_detail(
                Slug::parse("a").unwrap(),
                ProjectDetail::new("c", "s", vec!["d".into()]),
            )
    }

    fn assertion(id: &str) -> Assertion {
        Assertion {
            id: id.into(),
            claim: "claim".into(),
            explainer: "explainer".into(),
            mechanism: None,
        }
    }

    fn site(assertions: Vec<Assertion>) -> SiteCopy {
        SiteCopy {
            owner: None,
            hero: Hero {
                headline: "Headline".into(),
                subheadline: "Sub".into(),
                narrative_spine: None,
                cta: None,
            },
            about: None,
            assertions_title: None,
            assertions,
            boundaries: None,
            judgment_calls: None,
            writing: Vec::new(),
            links: FooterLinks::default(),
            disclosure: None,
        }
    }

    #[test]
    fn valid_projects_have_no_warnings() {
        assert!(validate_projects(&projects(), file()).unwrap().is_empty());
    }

    #[test]
    fn duplicate_professional_id_is_error() {
        let copy = projects().with_professional(ContentRecord::new(Slug::parse("a").unwrap(), "A2", "p"));
        let err = validate_projects(&copy, file()).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateId { ref id, .. } if id == "a"));
    }

    #[test]
    fn professional_id_colliding_with_featured_is_error() {
        let copy = projects().with_professional(ContentRecord::new(Slug::featured(), "Dup", "p"));
        assert!(validate_projects(&copy, file()).is_err());
    }

    #[test]
    fn empty_title_is_error() {
        let copy = projects().with_professional(ContentRecord::new(Slug::parse("b").unwrap(), " ", "p"));
        let err = validate_projects(&copy, file()).unwrap_err();
        assert!(matches!(err, FolioError::EmptyField { ref field, .. } if field == "title"));
    }

    #[test]
    fn featured_with_other_id_is_error() {
        let mut copy = projects();
        copy.featured.id = Slug::parse("coach").unwrap();
        let err = validate_projects(&copy, file()).unwrap_err();
        assert!(matches!(err, FolioError::FeaturedIdMismatch { .. }));
    }

    #[test]
    fn join_gaps_are_warnings() {
        let copy = projects()
            .with_professional(ContentRecord::new(Slug::parse("no-detail").unwrap(), "N", "p"))
            .with_detail(
                Slug::parse("orphan").unwrap(),
                ProjectDetail::new("c", "s", vec!["d".into()]),
            );
        let warnings = validate_projects(&copy, file()).unwrap();
        let subjects: Vec<&str> = warnings.iter().map(|w| w.subject.as_str()).collect();
        assert_eq!(subjects, vec!["no-detail", "orphan"]);
        assert!(warnings.iter().all(|w| w.kind == WarningKind::MissingJoin));
    }

    #[test]
    fn duplicate_assertion_id_is_error() {
        let copy = site(vec![assertion("x"), assertion("x")]);
        assert!(matches!(
            validate_site(&copy, Path::new("site.json")),
            Err(FolioError::DuplicateId { .. })
        ));
    }

    #[test]
    fn unique_assertions_pass() {
        let copy = site(vec![assertion("x"), assertion("y")]);
        assert!(validate_site(&copy, Path::new("site.json")).unwrap().is_empty());
    }
}
