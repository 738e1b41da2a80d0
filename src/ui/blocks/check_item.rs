use folio::application::{CheckItem, CheckStatus};

use crate::ui::primitives::icon::Icon;

pub fn status_icon(status: CheckStatus) -> Icon {
    match status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
}

/// One check line, its recommendation, and (verbose) its offending items
pub fn render_check_item(
    item: &CheckItem,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = status_icon(item.status).colored(supports_color, supports_unicode);
    let arrow = Icon::Arrow.colored(supports_color, supports_unicode);

    let mut out = String::new();
    out.push_str(&format!("  {} {} - {}\n", icon, item.name, item.message));

    if let Some(rec) = &item.recommendation {
        out.push_str(&format!("    {} {}\n", arrow, rec));
    }

    if verbose {
        for detail in &item.details {
            out.push_str(&format!("    {} {}\n", arrow, detail));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CheckItem {
        CheckItem {
            area: "Projects".to_string(),
            name: "domain tags".to_string(),
            status: CheckStatus::Warning,
            message: "1 record outside 2-4 tags".to_string(),
            recommendation: Some("Keep domain tags short and few".to_string()),
            details: vec!["governed-data".to_string()],
        }
    }

    #[test]
    fn render_includes_recommendation_line() {
        let rendered = render_check_item(&item(), false, false, false);
        assert!(rendered.contains("[WARN] domain tags - 1 record outside 2-4 tags"));
        assert!(rendered.contains("[>] Keep domain tags short and few"));
        assert!(!rendered.contains("governed-data"));
    }

    #[test]
    fn verbose_lists_details() {
        let rendered = render_check_item(&item(), true, false, false);
        assert!(rendered.contains("[>] governed-data"));
    }
}
