//! Slug resolver
//!
//! Joins a route slug to its list-view record and its detail. Both halves
//! must exist; a slug with only one half is reported exactly like an unknown
//! slug.

use serde::Serialize;

use crate::domain::entities::{ContentRecord, ContentStore, ProjectDetail};
use crate::domain::value_objects::{Route, Slug, FEATURED_SLUG};

/// A record joined with its detail
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedProject<'a> {
    pub record: &'a ContentRecord,
    pub detail: &'a ProjectDetail,
}

impl ResolvedProject<'_> {
    pub fn slug(&self) -> &Slug {
        &self.record.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(ResolvedProject<'a>),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn found(self) -> Option<ResolvedProject<'a>> {
        match self {
            Resolution::Found(project) => Some(project),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Pure lookups over a borrowed store
#[derive(Debug, Clone, Copy)]
pub struct SlugResolver<'a> {
    store: &'a ContentStore,
}

impl<'a> SlugResolver<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        Self { store }
    }

    /// Resolve a slug to its joined record and detail.
    pub fn resolve(&self, slug: &str) -> Resolution<'a> {
        let Some(detail) = self.store.detail(slug) else {
            return Resolution::NotFound;
        };

        let record = if slug == FEATURED_SLUG {
            Some(self.store.featured())
        } else {
            self.store.professional().iter().find(|r| r.id == slug)
        };

        match record {
            Some(record) => Resolution::Found(ResolvedProject { record, detail }),
            None => Resolution::NotFound,
        }
    }

    /// Resolve a parsed route; only detail routes can resolve
    pub fn resolve_route(&self, route: &Route) -> Resolution<'a> {
        match route {
            Route::Project(slug) => self.resolve(slug.as_str()),
            Route::Home | Route::NotFound => Resolution::NotFound,
        }
    }

    /// Every slug that resolves, featured first then professional order
    pub fn resolvable(&self) -> Vec<ResolvedProject<'a>> {
        std::iter::once(self.store.featured())
            .chain(self.store.professional().iter())
            .filter_map(|record| self.resolve(record.id.as_str()).found())
            .collect()
    }

    /// Records listed on the home page whose slug does not resolve
    pub fn dangling_records(&self) -> Vec<&'a ContentRecord> {
        std::iter::once(self.store.featured())
            .chain(self.store.professional().iter())
            .filter(|record| !self.resolve(record.id.as_str()).is_found())
            .collect()
    }

    /// Detail entries that no record points at
    pub fn orphan_details(&self) -> Vec<&'a Slug> {
        self.store
            .details()
            .map(|(slug, _)| slug)
            .filter(|slug| !self.resolve(slug.as_str()).is_found())
            .collect()
    }
}
