//! Show Use Case
//!
//! Resolves one view the way a visitor would see it: a detail view, the
//! not-found view, or the list view's assertions after a sequence of
//! toggles.

use serde::Serialize;

use crate::domain::entities::ContentStore;
use crate::domain::services::{render_detail, AccordionState, DetailView, SlugResolver};
use crate::domain::value_objects::{ContentWarning, Route};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionView {
    pub id: String,
    pub claim: String,
    pub explainer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ShowView {
    Detail {
        route: String,
        detail: DetailView,
    },
    NotFound {
        location: String,
    },
    Home {
        title: Option<String>,
        expanded: Option<String>,
        assertions: Vec<AssertionView>,
    },
}

impl ShowView {
    pub fn warnings(&self) -> &[ContentWarning] {
        match self {
            ShowView::Detail { detail, .. } => &detail.warnings,
            ShowView::NotFound { .. } | ShowView::Home { .. } => &[],
        }
    }
}

/// Resolve a slug or a location (`/projects/x`, `#/projects/x`)
pub fn show_location(store: &ContentStore, location: &str) -> ShowView {
    let route = if location.contains('/') || location.contains('#') {
        Route::parse(location)
    } else {
        Route::parse(&format!("/projects/{}", location))
    };

    let resolver = SlugResolver::new(store);
    match resolver.resolve_route(&route).found() {
        Some(project) => ShowView::Detail {
            route: route.to_string(),
            detail: render_detail(project.record, project.detail),
        },
        None => ShowView::NotFound {
            location: location.to_string(),
        },
    }
}

/// The list view's assertions after replaying `toggles` on a fresh accordion
pub fn show_assertions<'a>(
    store: &ContentStore,
    toggles: impl IntoIterator<Item = &'a str>,
) -> ShowView {
    let accordion = AccordionState::replay(toggles);
    let site = store.site();
    ShowView::Home {
        title: site.assertions_title.clone(),
        expanded: accordion.expanded().map(str::to_string),
        assertions: site
            .assertions
            .iter()
            .map(|a| AssertionView {
                id: a.id.clone(),
                claim: a.claim.clone(),
                explainer: a.explainer.clone(),
                mechanism: a.mechanism.clone(),
                expanded: accordion.is_expanded(&a.id),
            })
            .collect(),
    }
}
