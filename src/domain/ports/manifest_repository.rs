//! ManifestRepository port - persistence for the build manifest
//!
//! The manifest records the hash of every page the last build wrote, so the
//! next build can skip unchanged pages and only remove files it owns.

use std::path::Path;

use crate::domain::entities::BuildManifest;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug)]
pub enum ManifestError {
    /// The file is not a manifest this version understands
    ParseError(String),
    VersionMismatch { found: u32, expected: u32 },
    IoError(String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::ParseError(msg) => write!(f, "invalid manifest format: {}", msg),
            ManifestError::VersionMismatch { found, expected } => write!(
                f,
                "manifest version {} is not supported (expected {})",
                found, expected
            ),
            ManifestError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ManifestError {}

pub trait ManifestRepository {
    /// Load the manifest; a missing file yields an empty manifest
    fn load(&self, path: &Path) -> ManifestResult<BuildManifest>;

    fn save(&self, manifest: &BuildManifest, path: &Path) -> ManifestResult<()>;
}
