//! Detail view and the not-found view

use crate::domain::services::{DetailView, SectionBody};
use crate::domain::value_objects::Route;

use super::escaping::{escape_href, escape_html};
use super::HtmlOptions;

pub fn body(view: &DetailView, options: &HtmlOptions) -> String {
    let home = escape_html(&options.href(&Route::Home));
    let mut out = String::from("<main class=\"project-detail\"><div class=\"container\">\n");
    out.push_str(&format!(
        "<a href=\"{}\" class=\"back-link\">\u{2190} Back to home</a>\n",
        home
    ));
    out.push_str("<header class=\"detail-header\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&view.title)));
    out.push_str(&format!(
        "<p class=\"detail-summary\">{}</p>\n",
        escape_html(&view.summary)
    ));
    out.push_str("</header>\n");

    for section in &view.sections {
        out.push_str(&format!(
            "<section class=\"detail-section\" data-section=\"{}\">\n<h2>{}</h2>\n",
            section.kind.field(),
            escape_html(section.kind.heading())
        ));
        match &section.body {
            SectionBody::Text(text) => {
                out.push_str(&format!("<p>{}</p>\n", escape_html(text)));
            }
            SectionBody::Items(items) => {
                out.push_str(&format!("<ul class=\"{}\">\n", section.kind.list_class()));
                for item in items {
                    out.push_str(&format!("<li>{}</li>\n", escape_html(item)));
                }
                out.push_str("</ul>\n");
            }
            SectionBody::Links(links) => {
                for link in links {
                    out.push_str(&format!(
                        "<a href=\"{}\" class=\"btn btn-primary\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
                        escape_href(&link.url),
                        escape_html(&link.label)
                    ));
                }
            }
        }
        out.push_str("</section>\n");
    }

    let projects = if options.hash_routes {
        home.clone()
    } else {
        format!("{}#projects", home)
    };
    out.push_str(&format!(
        "<a href=\"{}\" class=\"btn back-to-projects\">\u{2190} Back to Projects</a>\n",
        projects
    ));
    out.push_str("</div></main>\n");
    out
}

pub fn not_found_body(options: &HtmlOptions) -> String {
    let mut out = String::from("<main class=\"not-found\"><div class=\"container\">\n");
    out.push_str("<h1>Project not found</h1>\n");
    out.push_str(&format!(
        "<a href=\"{}\" class=\"btn\">\u{2190} Back to home</a>\n",
        escape_html(&options.href(&Route::Home))
    ));
    out.push_str("</div></main>\n");
    out
}
