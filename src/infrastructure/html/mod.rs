//! HTML Renderer
//!
//! Implements the PageRenderer port as static HTML pages:
//! - `index.html` - list view
//! - `projects/{slug}/index.html` - one detail view per resolvable slug
//! - `404.html` - not-found view

mod detail;
mod escaping;
mod home;
mod layout;

use chrono::Datelike;

use crate::domain::entities::{ContentStore, RenderedPage};
use crate::domain::ports::PageRenderer;
use crate::domain::services::{AccordionState, DetailView};
use crate::domain::value_objects::Route;

pub use escaping::{escape_href, escape_html};

const DEFAULT_SITE_NAME: &str = "Portfolio";

/// Link and footer settings shared by every page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub base_path: String,
    pub hash_routes: bool,
    /// Year in the footer copyright line
    pub year: i32,
}

impl HtmlOptions {
    pub fn new(base_path: impl Into<String>, hash_routes: bool) -> Self {
        Self {
            base_path: base_path.into(),
            hash_routes,
            year: chrono::Local::now().year(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn href(&self, route: &Route) -> String {
        route.href(&self.base_path, self.hash_routes)
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new("/", false)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    fn page(&self, store: &ContentStore, route: Route, title: &str, body: &str) -> RenderedPage {
        let site_name = store.site().owner.as_deref().unwrap_or(DEFAULT_SITE_NAME);
        let home = self.options.href(&Route::Home);
        RenderedPage::new(route, layout::document(title, &home, site_name, body))
    }
}

impl PageRenderer for HtmlRenderer {
    fn render_home(&self, store: &ContentStore, accordion: &AccordionState) -> RenderedPage {
        let title = match &store.site().owner {
            Some(owner) => format!("{} | {}", owner, store.site().hero.headline),
            None => store.site().hero.headline.clone(),
        };
        let body = home::body(store, accordion, &self.options);
        self.page(store, Route::Home, &title, &body)
    }

    fn render_project(&self, store: &ContentStore, view: &DetailView) -> RenderedPage {
        let body = detail::body(view, &self.options);
        self.page(store, Route::project(view.slug.clone()), &view.title, &body)
    }

    fn render_not_found(&self, store: &ContentStore) -> RenderedPage {
        let body = detail::not_found_body(&self.options);
        self.page(store, Route::NotFound, "Project not found", &body)
    }
}
