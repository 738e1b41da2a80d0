//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod content_repository;
pub mod file_system;
pub mod manifest_repository;
pub mod page_renderer;

pub use content_repository::ContentRepository;
pub use file_system::{FileSystem, FsError, FsResult};
pub use manifest_repository::{ManifestError, ManifestRepository, ManifestResult};
pub use page_renderer::PageRenderer;
