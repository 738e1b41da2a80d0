use folio::application::{AssertionView, ShowView};
use folio::domain::services::{DetailView, SectionBody};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Terminal outline of a resolved view
pub fn render_show_view(view: &ShowView, supports_color: bool, supports_unicode: bool) -> String {
    match view {
        ShowView::Detail { route, detail } => {
            render_detail(route, detail, supports_color, supports_unicode)
        }
        ShowView::NotFound { location } => render_not_found(location, supports_color, supports_unicode),
        ShowView::Home {
            title, assertions, ..
        } => render_assertions(title.as_deref(), assertions, supports_color, supports_unicode),
    }
}

fn render_detail(
    route: &str,
    detail: &DetailView,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let arrow = Icon::Arrow.render(supports_unicode);
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        Icon::Show.colored(supports_color, supports_unicode),
        ColoredText::info(detail.title.as_str()).bold().render(supports_color)
    ));
    out.push_str(&format!("{}\n", ColoredText::dim(route).render(supports_color)));
    out.push_str(&format!("\n{}\n", detail.summary));

    for section in &detail.sections {
        out.push_str(&format!(
            "\n{}\n",
            ColoredText::plain(section.kind.heading()).bold().render(supports_color)
        ));
        match &section.body {
            SectionBody::Text(text) => out.push_str(&format!("  {}\n", text)),
            SectionBody::Items(items) => {
                for item in items {
                    out.push_str(&format!("  - {}\n", item));
                }
            }
            SectionBody::Links(links) => {
                for link in links {
                    out.push_str(&format!("  {} {}: {}\n", arrow, link.label, link.url));
                }
            }
        }
    }

    out.push_str(&format!("\n{} Back to Projects\n", arrow));
    out
}

fn render_not_found(location: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n{}\n\n{} Back to home\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning("Project not found").bold().render(supports_color),
        ColoredText::dim(location).render(supports_color),
        Icon::Arrow.render(supports_unicode)
    )
}

fn render_assertions(
    title: Option<&str>,
    assertions: &[AssertionView],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(&format!(
            "{} {}\n\n",
            Icon::Show.colored(supports_color, supports_unicode),
            ColoredText::info(title).bold().render(supports_color)
        ));
    }

    for assertion in assertions {
        let icon = if assertion.expanded {
            Icon::Expanded
        } else {
            Icon::Collapsed
        };
        out.push_str(&format!(
            "{} {}\n",
            icon.colored(supports_color, supports_unicode),
            assertion.claim
        ));
        if assertion.expanded {
            out.push_str(&format!("    {}\n", assertion.explainer));
            if let Some(mechanism) = &assertion.mechanism {
                out.push_str(&format!(
                    "    {} {}\n",
                    ColoredText::dim("Mechanism:").render(supports_color),
                    mechanism
                ));
            }
        }
    }
    out
}
