//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `content/` - JSON content documents
//! - `fs/` - File system implementations
//! - `html/` - Static HTML page renderer
//! - `repositories/` - Build manifest persistence

pub mod content;
pub mod fs;
pub mod html;
pub mod repositories;
pub(crate) mod suggest;

pub use content::JsonContentRepository;
pub use fs::LocalFs;
pub use html::{HtmlOptions, HtmlRenderer};
pub use repositories::{TomlManifestRepository, MANIFEST_FILE};
