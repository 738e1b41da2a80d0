//! Route value object
//!
//! The site has two logical views: the list view at `/` and a detail view at
//! `/projects/{slug}`. A `Route` is both a parsed location and a navigation
//! affordance the UI shell can turn into a link.

use std::fmt;
use std::path::PathBuf;

use super::slug::Slug;

const PROJECTS_SEGMENT: &str = "projects";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// List view
    Home,
    /// Detail view for one project
    Project(Slug),
    /// Anything that does not match a known view
    NotFound,
}

impl Route {
    /// Navigation affordance: go to the detail view for `slug`
    pub fn project(slug: Slug) -> Self {
        Route::Project(slug)
    }

    /// Match a location against the route table.
    ///
    /// Accepts plain paths (`/projects/x`), hash-router locations
    /// (`#/projects/x`, `/#/projects/x`), an optional trailing slash and a
    /// trailing `index.html`. Query strings are ignored. A detail route whose
    /// slug is not well-formed is `NotFound`; whether a well-formed slug has
    /// content is the resolver's business.
    pub fn parse(location: &str) -> Self {
        let location = location.split('?').next().unwrap_or_default();
        let path = match location.find('#') {
            Some(idx) => &location[idx + 1..],
            None => location,
        };
        let path = path.strip_suffix("index.html").unwrap_or(path);

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            [PROJECTS_SEGMENT, slug] => match Slug::parse(slug) {
                Ok(slug) => Route::Project(slug),
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    /// Link target relative to `base_path`.
    ///
    /// With `hash_routes` the detail view is addressed as `{base}#/projects/x`
    /// so the site works from a static host without rewrite rules.
    pub fn href(&self, base_path: &str, hash_routes: bool) -> String {
        let base = normalize_base(base_path);
        match (self, hash_routes) {
            (Route::Home, _) => base,
            (Route::Project(slug), false) => format!("{}{}/{}/", base, PROJECTS_SEGMENT, slug),
            (Route::Project(slug), true) => format!("{}#/{}/{}", base, PROJECTS_SEGMENT, slug),
            (Route::NotFound, _) => format!("{}404.html", base),
        }
    }

    /// File this route is written to, relative to the output directory
    pub fn output_path(&self) -> PathBuf {
        match self {
            Route::Home => PathBuf::from("index.html"),
            Route::Project(slug) => PathBuf::from(PROJECTS_SEGMENT)
                .join(slug.as_str())
                .join("index.html"),
            Route::NotFound => PathBuf::from("404.html"),
        }
    }

    pub fn slug(&self) -> Option<&Slug> {
        match self {
            Route::Project(slug) => Some(slug),
            _ => None,
        }
    }
}

fn normalize_base(base_path: &str) -> String {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Project(slug) => write!(f, "/{}/{}", PROJECTS_SEGMENT, slug),
            Route::NotFound => f.write_str("(not found)"),
        }
    }
}
