//! Content warning value object.

use std::fmt;
use std::path::PathBuf;

/// What kind of data-integrity problem a warning describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Key present in a document that the schema does not know
    UnknownKey,
    /// Required text field is empty
    EmptyField,
    /// Field holds a value of the wrong shape (e.g. a number instead of text)
    ShapeMismatch,
    /// A record or detail exists without its counterpart
    MissingJoin,
}

/// Non-fatal content problem surfaced to content authors.
///
/// Rendering never fails on these; the affected section is skipped instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentWarning {
    pub kind: WarningKind,
    /// Record the warning belongs to, or the JSON path for unknown keys
    pub subject: String,
    /// Field name (camelCase, as written in the document)
    pub field: Option<String>,
    pub message: String,
    /// Document the warning was found in, when known
    pub file: Option<PathBuf>,
    pub suggestion: Option<String>,
}

impl ContentWarning {
    pub fn new(kind: WarningKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            field: None,
            message: message.into(),
            file: None,
            suggestion: None,
        }
    }

    pub fn empty_field(subject: impl Into<String>, field: &str) -> Self {
        Self::new(WarningKind::EmptyField, subject, format!("'{}' is empty", field)).with_field(field)
    }

    pub fn shape_mismatch(subject: impl Into<String>, field: &str, found: &str) -> Self {
        Self::new(
            WarningKind::ShapeMismatch,
            subject,
            format!("'{}' must be text or a list of text, found {}", field, found),
        )
        .with_field(field)
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)?;
        if let Some(file) = &self.file {
            write!(f, " ({})", file.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_names_field_and_found_type() {
        let w = ContentWarning::shape_mismatch("governed-data", "outcome", "a number");
        assert_eq!(w.kind, WarningKind::ShapeMismatch);
        assert_eq!(w.field.as_deref(), Some("outcome"));
        assert_eq!(
            w.to_string(),
            "governed-data: 'outcome' must be text or a list of text, found a number"
        );
    }

    #[test]
    fn display_includes_file_when_known() {
        let w = ContentWarning::empty_field("x", "context").with_file("content/projects.json");
        assert!(w.to_string().ends_with("(content/projects.json)"));
    }
}
