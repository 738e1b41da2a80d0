//! Check Use Case
//!
//! Loads content and runs the editorial lint rules, turning load failures
//! and load warnings into check items so one report shows everything.

use crate::domain::ports::ContentRepository;
use crate::domain::services::{lint_content, LintItem, LintStatus};
use crate::domain::value_objects::{ContentWarning, WarningKind};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat warnings as errors
    pub strict_warnings: bool,
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CheckItem {
    /// Grouping shown as a heading ("Content", "Projects", ...)
    pub area: String,
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub recommendation: Option<String>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl From<LintStatus> for CheckStatus {
    fn from(status: LintStatus) -> Self {
        match status {
            LintStatus::Pass => CheckStatus::Pass,
            LintStatus::Warning => CheckStatus::Warning,
            LintStatus::Error => CheckStatus::Error,
        }
    }
}

impl From<LintItem> for CheckItem {
    fn from(item: LintItem) -> Self {
        Self {
            area: item.area,
            name: item.name,
            status: item.status.into(),
            message: item.message,
            recommendation: item.recommendation,
            details: item.details,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckResult {
    /// No errors
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }

    /// Whether the command should exit successfully
    pub fn passes(&self, options: &CheckOptions) -> bool {
        if options.strict_warnings {
            self.is_clean()
        } else {
            self.is_success()
        }
    }

    fn push(&mut self, item: CheckItem) {
        match item.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(item);
    }
}

pub struct CheckUseCase<CR: ContentRepository> {
    content: CR,
}

impl<CR: ContentRepository> CheckUseCase<CR> {
    pub fn new(content: CR) -> Self {
        Self { content }
    }

    pub fn execute(&self) -> CheckResult {
        self.execute_with_callback(|_| {})
    }

    /// Execute with a callback for each item (for streaming UI)
    pub fn execute_with_callback<F>(&self, mut on_check: F) -> CheckResult
    where
        F: FnMut(&CheckItem),
    {
        let mut result = CheckResult::default();
        let mut emit = |item: CheckItem, result: &mut CheckResult| {
            on_check(&item);
            result.push(item);
        };

        let store = match self.content.load() {
            Ok(store) => store,
            Err(e) => {
                emit(
                    CheckItem {
                        area: "Content".to_string(),
                        name: "load".to_string(),
                        status: CheckStatus::Error,
                        message: e.to_string(),
                        recommendation: Some(
                            "Fix the content document; no other checks can run until it loads"
                                .to_string(),
                        ),
                        details: Vec::new(),
                    },
                    &mut result,
                );
                return result;
            }
        };

        emit(
            CheckItem {
                area: "Content".to_string(),
                name: "load".to_string(),
                status: CheckStatus::Pass,
                message: "both documents parse and validate".to_string(),
                recommendation: None,
                details: Vec::new(),
            },
            &mut result,
        );
        emit(load_warnings_item(store.load_warnings()), &mut result);

        for item in lint_content(&store) {
            emit(item.into(), &mut result);
        }

        result
    }
}

fn load_warnings_item(warnings: &[ContentWarning]) -> CheckItem {
    let unknown: Vec<&ContentWarning> = warnings
        .iter()
        .filter(|w| w.kind == WarningKind::UnknownKey)
        .collect();
    let others: Vec<&ContentWarning> = warnings
        .iter()
        .filter(|w| w.kind != WarningKind::UnknownKey)
        .collect();

    let details: Vec<String> = unknown
        .iter()
        .chain(others.iter())
        .map(|w| match &w.suggestion {
            Some(s) => format!("{} (did you mean '{}'?)", w, s),
            None => w.to_string(),
        })
        .collect();

    let status = if details.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Warning
    };
    let message = if details.is_empty() {
        "no unknown keys or dangling entries".to_string()
    } else {
        format!("{} content warning(s)", details.len())
    };

    CheckItem {
        area: "Content".to_string(),
        name: "schema".to_string(),
        status,
        message,
        recommendation: (!unknown.is_empty())
            .then(|| "Remove or rename unknown keys".to_string()),
        details,
    }
}
