//! Domain Entities
//!
//! - `ContentRecord` - list-view project entry (featured or professional)
//! - `ProjectDetail` - detail-view content joined to a record by slug
//! - `SiteCopy` - hero, assertions and the rest of the site-level copy
//! - `ContentStore` - the read-only union of both content documents
//! - `RenderedPage` / `BuildManifest` - build output and its hash record

mod content_record;
mod content_store;
mod manifest;
mod page;
mod project_detail;
mod site;

pub use content_record::{ContentRecord, Family};
pub use content_store::{ContentStore, ProjectCopy};
pub use manifest::{normalize_manifest_path, BuildManifest};
pub use page::RenderedPage;
pub use project_detail::{ProjectDetail, ShapedText};
pub use site::{
    About, Assertion, CallToAction, FooterLinks, Hero, HeroCta, SiteCopy, TitledList, WritingLink,
};
