use std::path::Path;

use folio::application::{CheckItem, CheckResult};

use crate::ui::blocks::check_item::render_check_item;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::{Outcome, ResultSummary};
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(
    source: &Path,
    strict_warnings: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Folio Check");
    header.add("Source", source.display().to_string());
    if strict_warnings {
        header.add("Strict", "failing on warnings");
    }
    header.render(supports_color, supports_unicode)
}

/// Items grouped under their area, in the order they were produced
pub fn render_check_report(
    items: &[CheckItem],
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    let mut current_area: Option<&str> = None;
    for item in items {
        if current_area != Some(item.area.as_str()) {
            if current_area.is_some() {
                out.push('\n');
            }
            out.push_str(&item.area);
            out.push('\n');
            current_area = Some(item.area.as_str());
        }

        out.push_str(&render_check_item(
            item,
            verbose > 0,
            supports_color,
            supports_unicode,
        ));
    }

    out
}

pub fn render_check_summary(
    result: &CheckResult,
    passed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (title, outcome) = if !passed {
        ("Check FAILED", Outcome::Failure)
    } else if result.warnings > 0 {
        ("Check passed with warnings", Outcome::Partial)
    } else {
        ("All checks passed", Outcome::Success)
    };

    let mut summary = ResultSummary::new(title, outcome);
    summary.add_stat("passed", result.passed);
    summary.add_stat("warnings", result.warnings);
    summary.add_stat("errors", result.errors);
    if passed {
        summary.with_next_step("Run `folio build` to render the site");
    } else {
        summary.with_next_step("Fix the errors above and run `folio check` again");
    }

    summary.render(supports_color, supports_unicode)
}
