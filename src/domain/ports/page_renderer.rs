//! PageRenderer port - turns views into output pages
//!
//! The build use case decides which pages exist; a renderer decides what
//! they look like.

use crate::domain::entities::{ContentStore, RenderedPage};
use crate::domain::services::{AccordionState, DetailView};

pub trait PageRenderer {
    /// List view, with the accordion in the given state
    fn render_home(&self, store: &ContentStore, accordion: &AccordionState) -> RenderedPage;

    /// Detail view for one resolved project
    fn render_project(&self, store: &ContentStore, view: &DetailView) -> RenderedPage;

    fn render_not_found(&self, store: &ContentStore) -> RenderedPage;
}
