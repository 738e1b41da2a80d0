//! Shared JSON event types for consistent CLI output.
//!
//! Every command writes these as NDJSON so CI consumers see the same field
//! names everywhere.

use serde::Serialize;

use folio::domain::value_objects::WarningKind;
use folio::{ContentWarning, FolioError};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes, with its counts flattened in.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn new(command: &'a str, success: bool, data: T) -> Self {
        Self {
            event: "complete",
            command,
            success,
            duration_ms: None,
            data,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            file: None,
        }
    }

    pub fn from_error(command: &'a str, err: &anyhow::Error) -> Self {
        let Some(folio) = err.downcast_ref::<FolioError>() else {
            return Self::new(command, "ERROR", err.to_string());
        };
        let mut event = Self::new(command, error_code(folio), folio.to_string());
        event.file = crate::ui::error::error_file(folio).map(|p| p.display().to_string());
        event
    }
}

/// One content warning.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub kind: &'static str,
    pub subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'a str>,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, warning: &'a ContentWarning) -> Self {
        Self {
            event: "warning",
            command,
            kind: warning_kind(warning.kind),
            subject: &warning.subject,
            field: warning.field.as_deref(),
            message: &warning.message,
            file: warning.file.as_ref().map(|p| p.display().to_string()),
            suggestion: warning.suggestion.as_deref(),
        }
    }
}

/// A page a command wrote, would write, or removed.
#[derive(Debug, Clone, Serialize)]
pub struct PageEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub path: String,
    pub action: &'static str,
}

impl<'a> PageEvent<'a> {
    pub fn new(command: &'a str, path: &std::path::Path, action: &'static str) -> Self {
        Self {
            event: "page",
            command,
            path: path.to_string_lossy().replace('\\', "/"),
            action,
        }
    }
}

/// Wrapper for data events that includes command context.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }

    /// Use a more specific event name than "data"
    pub fn with_event(mut self, event: &'static str) -> Self {
        self.event = event;
        self
    }
}

fn warning_kind(kind: WarningKind) -> &'static str {
    match kind {
        WarningKind::UnknownKey => "unknown_key",
        WarningKind::EmptyField => "empty_field",
        WarningKind::ShapeMismatch => "shape_mismatch",
        WarningKind::MissingJoin => "missing_join",
    }
}

fn error_code(err: &FolioError) -> &'static str {
    match err {
        FolioError::ContentNotFound { .. } => "CONTENT_NOT_FOUND",
        FolioError::InvalidContent { .. } => "INVALID_CONTENT",
        FolioError::EmptyField { .. } => "EMPTY_FIELD",
        FolioError::DuplicateId { .. } => "DUPLICATE_ID",
        FolioError::FeaturedIdMismatch { .. } => "FEATURED_ID_MISMATCH",
        FolioError::InvalidSlug { .. } => "INVALID_SLUG",
        FolioError::InvalidConfig { .. } => "INVALID_CONFIG",
        FolioError::InvalidManifest { .. } => "INVALID_MANIFEST",
        FolioError::DirectoryNotFound { .. } => "DIRECTORY_NOT_FOUND",
        FolioError::Io(_) => "IO",
        FolioError::Watch(_) => "WATCH",
    }
}
