use std::path::Path;

use folio::application::BuildResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::{Outcome, ResultSummary};
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(
    source: &Path,
    out_dir: &Path,
    base_path: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Folio Build");
    header.add("Source", source.display().to_string());
    header.add("Output", out_dir.display().to_string());
    header.add("Base", base_path);
    if dry_run {
        header.add("Mode", "dry run (nothing written)");
    }
    header.render(supports_color, supports_unicode)
}

/// One line per page touched, shown with -v
pub fn render_build_pages(
    result: &BuildResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    let written = Icon::Success.colored(supports_color, supports_unicode);
    let removed = Icon::Trash.colored(supports_color, supports_unicode);
    let kept = Icon::Warning.colored(supports_color, supports_unicode);

    for path in &result.written {
        out.push_str(&format!("  {} {}\n", written, path.display()));
    }
    for path in &result.removed {
        out.push_str(&format!("  {} {}\n", removed, path.display()));
    }
    for path in &result.kept_modified {
        out.push_str(&format!("  {} {} (edited, kept)\n", kept, path.display()));
    }
    out
}

pub fn render_build_summary(
    result: &BuildResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (title, outcome) = match (result.dry_run, result.has_warnings()) {
        (true, _) => ("Dry Run Complete", Outcome::Success),
        (false, false) => ("Build Complete", Outcome::Success),
        (false, true) => ("Build Complete with warnings", Outcome::Partial),
    };

    let verb = if result.dry_run { "to write" } else { "written" };
    let mut summary = ResultSummary::new(title, outcome);
    summary.add_stat(format!("pages {}", verb), result.written.len());
    summary.add_stat("pages up to date", result.skipped.len());
    if !result.removed.is_empty() {
        let verb = if result.dry_run { "to remove" } else { "removed" };
        summary.add_stat(format!("stale pages {}", verb), result.removed.len());
    }

    for path in &result.kept_modified {
        summary.add_note(format!(
            "{} was edited after the last build; left in place",
            path.display()
        ));
    }
    if !result.warnings.is_empty() {
        summary.add_note(format!("{} content warning(s)", result.warnings.len()));
        summary.with_next_step("Run `folio check` for details");
    } else if result.dry_run {
        summary.with_next_step("Run `folio build` to write the pages");
    }

    summary.render(supports_color, supports_unicode)
}
