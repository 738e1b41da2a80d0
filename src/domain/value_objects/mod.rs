//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod content_warning;
mod hash;
mod route;
mod slug;

pub use content_warning::{ContentWarning, WarningKind};
pub use hash::ContentHash;
pub use route::Route;
pub use slug::{Slug, FEATURED_SLUG};
