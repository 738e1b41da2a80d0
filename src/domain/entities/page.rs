//! Rendered page entity

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, Route};

/// One HTML file produced by a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    route: Route,
    /// Path relative to the output directory
    path: PathBuf,
    html: String,
}

impl RenderedPage {
    pub fn new(route: Route, html: impl Into<String>) -> Self {
        Self {
            path: route.output_path(),
            route,
            html: html.into(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.html)
    }
}
