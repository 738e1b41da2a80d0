//! GitHub Actions workflow annotations for content problems.
//!
//! Each annotation points at the content document it came from, so the
//! problem shows up inline on the pull request that changed the copy.

use std::fmt;

use folio::application::{CheckItem, CheckStatus};
use folio::{ContentWarning, FolioError};

use crate::ui::error::{error_file, error_line};

/// True when running under GitHub Actions
pub fn in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub level: AnnotationLevel,
    pub title: String,
    pub message: String,
    pub file: Option<String>,
    pub line: Option<usize>,
}

impl Annotation {
    /// Titled by record and field, e.g. `governed-data.outcome`
    pub fn for_warning(warning: &ContentWarning) -> Self {
        let title = match &warning.field {
            Some(field) if !warning.subject.ends_with(field.as_str()) => {
                format!("{}.{}", warning.subject, field)
            }
            _ => warning.subject.clone(),
        };
        let mut message = warning.message.clone();
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        Self {
            level: AnnotationLevel::Warning,
            title,
            message,
            file: warning
                .file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            line: None,
        }
    }

    /// `None` for passing items
    pub fn for_check_item(item: &CheckItem) -> Option<Self> {
        let level = match item.status {
            CheckStatus::Pass => return None,
            CheckStatus::Warning => AnnotationLevel::Warning,
            CheckStatus::Error => AnnotationLevel::Error,
        };
        let mut message = item.message.clone();
        for detail in &item.details {
            message.push('\n');
            message.push_str(detail);
        }
        Some(Self {
            level,
            title: format!("{}: {}", item.area, item.name),
            message,
            file: None,
            line: None,
        })
    }

    pub fn for_error(err: &anyhow::Error) -> Self {
        let folio = err.downcast_ref::<FolioError>();
        Self {
            level: AnnotationLevel::Error,
            title: "folio".to_string(),
            message: err.to_string(),
            file: folio
                .and_then(error_file)
                .map(|p| p.to_string_lossy().to_string()),
            line: folio.and_then(|e| match e {
                FolioError::InvalidContent { message, .. }
                | FolioError::InvalidConfig { message, .. } => error_line(message),
                _ => None,
            }),
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Error => "error",
        };
        let mut props = Vec::new();
        if let Some(file) = &self.file {
            props.push(format!("file={}", escape_property(file)));
        }
        if let Some(line) = self.line {
            props.push(format!("line={}", line));
        }
        props.push(format!("title={}", escape_property(&self.title)));

        write!(
            f,
            "::{} {}::{}",
            level,
            props.join(","),
            escape_data(&self.message)
        )
    }
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

// Property values also reserve the separators of the property list
fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
