use std::path::{Path, PathBuf};

use folio::FolioError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::{in_github_actions, Annotation};
use crate::ui::json::{emit_event, events::ErrorEvent};

pub fn format_folio_error(err: &FolioError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_folio_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_folio_error_with(err: &FolioError, supports_color: bool, supports_unicode: bool) -> String {
    match err {
        FolioError::ContentNotFound { path } => {
            ErrorBlock::new(path, "Content document not found.")
                .with_fix(
                    "Point --source at the directory holding site.json and projects.json,\n  or set [content] dir in folio.toml.",
                )
                .render(supports_color, supports_unicode)
        }
        FolioError::InvalidContent { file, message } => ErrorBlock::new(file, message)
            .with_line(error_line(message))
            .with_file_context(2, 2)
            .with_fix("Fix the JSON at the reported position and run `folio check`.")
            .render(supports_color, supports_unicode),
        FolioError::EmptyField { field, record, file } => ErrorBlock::new(
            file,
            format!("'{}' on record '{}' must not be empty.", field, record),
        )
        .with_fix(format!("Give '{}' a non-empty value.", field))
        .render(supports_color, supports_unicode),
        FolioError::DuplicateId { id, file } => {
            ErrorBlock::new(file, format!("Two records share the id '{}'.", id))
                .with_fix("Ids must be unique within projects and within details.")
                .render(supports_color, supports_unicode)
        }
        FolioError::FeaturedIdMismatch {
            found,
            expected,
            file,
        } => ErrorBlock::new(
            file,
            format!("The featured record has id '{}'.", found),
        )
        .with_fix(format!(
            "Set the featured id to '{}', or omit it to use the default.",
            expected
        ))
        .render(supports_color, supports_unicode),
        FolioError::InvalidConfig { file, message } => ErrorBlock::new(file, message)
            .with_line(error_line(message))
            .with_file_context(1, 1)
            .with_fix("Fix the TOML syntax, or delete the file to use defaults.")
            .render(supports_color, supports_unicode),
        FolioError::InvalidManifest { file, message } => ErrorBlock::new(file, message)
            .with_fix("Delete the manifest; the next build writes a fresh one.")
            .render(supports_color, supports_unicode),
        other => {
            let file = error_file(other)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("folio"));
            ErrorBlock::new(file, other.to_string()).render(supports_color, supports_unicode)
        }
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(folio) = err.downcast_ref::<FolioError>() {
        return format_folio_error(folio);
    }

    format!("[ERROR] {}\n", err)
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let _ = emit_event(&ErrorEvent::from_error(command, err));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && in_github_actions() {
        println!("{}", Annotation::for_error(err));
    }

    eprint!("{}", format_error(err));
}

pub(crate) fn error_file(err: &FolioError) -> Option<&Path> {
    match err {
        FolioError::ContentNotFound { path } | FolioError::DirectoryNotFound { path } => {
            Some(path.as_path())
        }
        FolioError::InvalidContent { file, .. }
        | FolioError::EmptyField { file, .. }
        | FolioError::DuplicateId { file, .. }
        | FolioError::FeaturedIdMismatch { file, .. }
        | FolioError::InvalidConfig { file, .. }
        | FolioError::InvalidManifest { file, .. } => Some(file.as_path()),
        FolioError::InvalidSlug { .. } | FolioError::Io(_) | FolioError::Watch(_) => None,
    }
}

/// Line number from parser messages such as "at line 3 column 7" or
/// "TOML parse error at line 2, column 5".
pub(crate) fn error_line(message: &str) -> Option<usize> {
    let rest = &message[message.rfind("line ")? + "line ".len()..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok().filter(|n| *n > 0)
}
