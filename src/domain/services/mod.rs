//! Domain Services
//!
//! Stateless logic over the content store:
//! - `SlugResolver` - route slug to (record, detail)
//! - `render_detail` - detail sections in fixed order
//! - `AccordionState` - single-open expand/collapse state
//! - `validate_content` - load-time integrity rules
//! - `lint_content` - editorial rules behind `folio check`
//! - `Planner` - which pages to write and which stale pages to remove

mod accordion;
mod content_lint;
mod content_validator;
mod planner;
mod resolver;
mod section_renderer;

pub use accordion::AccordionState;
pub use content_lint::{lint_content, LintItem, LintStatus};
pub use content_validator::{validate_content, validate_projects, validate_site};
pub use planner::{
    BuildPlan, OrphanAction, PageAction, PageState, PlannedOrphan, PlannedPage, Planner,
};
pub use resolver::{Resolution, ResolvedProject, SlugResolver};
pub use section_renderer::{
    link_label, render_detail, DetailView, LinkAction, Section, SectionBody, SectionKind,
};
