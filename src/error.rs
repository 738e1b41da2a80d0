//! Error types for Folio
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// A content document does not exist
    #[error("content document not found: {path}")]
    ContentNotFound { path: PathBuf },

    /// Content document is not valid JSON or does not match the schema
    #[error("invalid content in {file}: {message}")]
    InvalidContent { file: PathBuf, message: String },

    /// A required field is present but empty
    #[error("empty required field '{field}' on '{record}' in {file}")]
    EmptyField {
        field: String,
        record: String,
        file: PathBuf,
    },

    /// Two records of the same family share an id
    #[error("duplicate id '{id}' in {file}")]
    DuplicateId { id: String, file: PathBuf },

    /// The featured record carries an id other than the featured sentinel
    #[error("featured record id '{found}' in {file} must be '{expected}'")]
    FeaturedIdMismatch {
        found: String,
        expected: String,
        file: PathBuf,
    },

    /// Slug contains characters that cannot form a route segment
    #[error("invalid slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Build manifest could not be read or written
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Watcher setup failed
    #[error("watch error: {0}")]
    Watch(String),
}
