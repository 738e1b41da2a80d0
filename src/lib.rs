//! Folio - static-site compiler for JSON-driven portfolio sites
//!
//! Folio reads two content documents (`site.json` and `projects.json`),
//! validates them once at load time, and renders a home page, one detail
//! page per project and a not-found page as plain HTML.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{ContentRecord, ContentStore, ProjectDetail, SiteCopy};
pub use domain::services::{render_detail, AccordionState, Resolution, SlugResolver};
pub use domain::value_objects::{ContentWarning, Route, Slug, WarningKind, FEATURED_SLUG};
pub use error::{FolioError, FolioResult};
