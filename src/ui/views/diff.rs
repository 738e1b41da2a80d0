use std::path::Path;

use folio::application::{DiffEntry, DiffResult};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::components::diff::render_page_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Unchanged lines kept around each hunk unless -vv asks for whole pages
const DIFF_CONTEXT: usize = 3;

pub fn render_diff_header(
    source: &Path,
    out_dir: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Diff, "Folio Diff");
    header.add("Source", source.display().to_string());
    header.add("Output", out_dir.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// Changed pages and stale pages, one line each; with -v each changed
/// page is followed by its diff
pub fn render_diff_listing(
    result: &DiffResult,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    let context = if verbose > 1 { None } else { Some(DIFF_CONTEXT) };

    let mut entry = |marker: &str, e: &DiffEntry| {
        out.push_str(&format!("  {} {}\n", marker, e.path.display()));
        if verbose > 0 {
            let path = e.path.to_string_lossy().replace('\\', "/");
            let old = e.old_content.as_deref().unwrap_or("");
            out.push_str(&render_page_diff(
                &path,
                old,
                &e.new_content,
                context,
                supports_color,
            ));
            out.push('\n');
        }
    };

    for e in &result.creates {
        entry("+", e);
    }
    for e in &result.updates {
        entry("~", e);
    }

    let trash = Icon::Trash.colored(supports_color, supports_unicode);
    for path in &result.orphans {
        out.push_str(&format!("  {} {}\n", trash, path.display()));
    }
    let kept = Icon::Warning.colored(supports_color, supports_unicode);
    for path in &result.modified_orphans {
        out.push_str(&format!("  {} {} (edited, would be kept)\n", kept, path.display()));
    }

    out
}

pub fn render_diff_summary(
    result: &DiffResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let header = format!(
        "{} Diff Summary",
        Icon::Diff.colored(supports_color, supports_unicode)
    );

    let mut b = Box::with_title(header).style(BoxStyle::Info);
    b.add_empty();
    b.add_line(format!("{} new", result.creates.len()));
    b.add_line(format!("{} modified", result.updates.len()));
    b.add_line(format!("{} unchanged", result.unchanged.len()));
    if !result.orphans.is_empty() {
        b.add_line(format!("{} stale", result.orphans.len()));
    }
    if !result.modified_orphans.is_empty() {
        b.add_line(format!("{} stale but edited", result.modified_orphans.len()));
    }
    if !result.has_changes() {
        b.add_empty();
        b.add_line("Output is up to date.");
    }
    b.render(supports_color, supports_unicode)
}
