//! Site compilation
//!
//! Decides which pages a build produces: the list view, one detail page per
//! resolvable slug (featured first), and the not-found page.

use crate::domain::entities::{ContentStore, RenderedPage};
use crate::domain::ports::PageRenderer;
use crate::domain::services::{render_detail, AccordionState, SlugResolver};
use crate::domain::value_objects::ContentWarning;

#[derive(Debug, Clone, Default)]
pub struct SiteRender {
    pub pages: Vec<RenderedPage>,
    /// Sections skipped while rendering detail pages
    pub warnings: Vec<ContentWarning>,
}

pub fn render_site<R: PageRenderer + ?Sized>(store: &ContentStore, renderer: &R) -> SiteRender {
    let mut render = SiteRender::default();

    // The static list view starts with every assertion collapsed
    render
        .pages
        .push(renderer.render_home(store, &AccordionState::new()));

    for project in SlugResolver::new(store).resolvable() {
        let view = render_detail(project.record, project.detail);
        render.pages.push(renderer.render_project(store, &view));
        render.warnings.extend(view.warnings);
    }

    render.pages.push(renderer.render_not_found(store));
    render
}
