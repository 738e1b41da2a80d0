//! List view: hero, assertions, featured work, professional systems, footer

use crate::domain::entities::{ContentRecord, ContentStore, SiteCopy, TitledList};
use crate::domain::services::{AccordionState, SlugResolver};
use crate::domain::value_objects::Route;

use super::escaping::{escape_href, escape_html, escape_js};
use super::HtmlOptions;

const DEFAULT_ASSERTIONS_TITLE: &str = "What I Believe";

/// Single-open accordion, mirroring `AccordionState::toggle`
const ACCORDION_SCRIPT: &str = "\
(function(){\
var items=document.querySelectorAll('.assertion-item');\
function setOpen(item,open){\
item.classList.toggle('expanded',open);\
var button=item.querySelector('.assertion-header');\
button.setAttribute('aria-expanded',open?'true':'false');\
item.querySelector('.assertion-toggle').textContent=open?'\\u2212':'+';\
item.querySelector('.assertion-explainer').hidden=!open;\
}\
items.forEach(function(item){\
item.querySelector('.assertion-header').addEventListener('click',function(){\
var wasOpen=item.classList.contains('expanded');\
items.forEach(function(other){setOpen(other,false);});\
if(!wasOpen){setOpen(item,true);}\
});\
});\
})();";

/// Hash-route dispatcher: `#/projects/{slug}` loads the written detail page,
/// any other `#/...` location loads `404.html`. Plain in-page anchors such as
/// `#contact` are left alone. Matching follows `Route::parse`.
const HASH_ROUTE_SCRIPT: &str = "\
(function(){\
var home='{home}';\
var known=[{known}];\
function route(){\
var hash=window.location.hash;\
if(hash.indexOf('#/')!==0){return;}\
var path=hash.slice(1).split('?')[0].replace(/index\\.html$/,'');\
var parts=path.split('/').filter(function(s){return s.length>0;});\
if(parts.length===0){return;}\
if(parts.length===2&&parts[0]==='projects'&&known.indexOf(parts[1])>=0){\
window.location.replace(home+'projects/'+parts[1]+'/');return;\
}\
window.location.replace(home+'404.html');\
}\
route();\
window.addEventListener('hashchange',route);\
})();";

/// Slugs a hash route may forward to, in page order
fn hash_route_targets(store: &ContentStore) -> Vec<String> {
    SlugResolver::new(store)
        .resolvable()
        .iter()
        .map(|project| project.slug().to_string())
        .collect()
}

fn hash_route_script(store: &ContentStore, options: &HtmlOptions) -> String {
    let known: Vec<String> = hash_route_targets(store)
        .iter()
        .map(|slug| format!("'{}'", escape_js(slug)))
        .collect();
    HASH_ROUTE_SCRIPT
        .replace("{home}", &escape_js(&options.href(&Route::Home)))
        .replace("{known}", &known.join(","))
}

pub fn body(store: &ContentStore, accordion: &AccordionState, options: &HtmlOptions) -> String {
    let site = store.site();
    let mut out = String::from("<main class=\"home\">\n");

    out.push_str(&hero(site));
    if let Some(about) = &site.about {
        out.push_str("<section class=\"about-section\"><div class=\"container\">\n");
        out.push_str(&format!(
            "<span class=\"about-location\">{}</span>\n",
            escape_html(&about.location)
        ));
        out.push_str(&format!(
            "<p class=\"about-text\">{}. {}</p>\n",
            escape_html(about.experience.trim_end_matches('.')),
            escape_html(&about.focus)
        ));
        out.push_str("</div></section>\n");
    }
    out.push_str(&assertions(site, accordion));
    out.push_str(&featured(store.featured(), options));
    out.push_str(&professional(store, options));
    if let Some(list) = &site.boundaries {
        out.push_str(&titled_list(list, "boundaries", "boundary-item"));
    }
    if let Some(list) = &site.judgment_calls {
        out.push_str(&titled_list(list, "judgment-calls", "judgment-call-item"));
    }
    out.push_str(&writing(site));
    out.push_str("</main>\n");
    out.push_str(&footer(site, options));
    out.push_str(&format!("<script>{}</script>\n", ACCORDION_SCRIPT));
    if options.hash_routes {
        out.push_str(&format!(
            "<script>{}</script>\n",
            hash_route_script(store, options)
        ));
    }
    out
}

fn hero(site: &SiteCopy) -> String {
    let hero = &site.hero;
    let mut out = String::from("<section class=\"hero\"><div class=\"container\">\n");
    out.push_str(&format!(
        "<h1 class=\"hero-headline\">{}</h1>\n",
        escape_html(&hero.headline)
    ));
    out.push_str(&format!(
        "<p class=\"hero-subheadline\">{}</p>\n",
        escape_html(&hero.subheadline)
    ));
    if let Some(spine) = &hero.narrative_spine {
        out.push_str(&format!(
            "<p class=\"hero-narrative\">{}</p>\n",
            escape_html(spine)
        ));
    }
    if let Some(cta) = &hero.cta {
        out.push_str("<div class=\"hero-cta\">\n");
        out.push_str(&format!(
            "<a href=\"{}\" class=\"btn btn-primary\">{}</a>\n",
            escape_href(&cta.primary.link),
            escape_html(&cta.primary.text)
        ));
        if let Some(secondary) = &cta.secondary {
            out.push_str(&format!(
                "<a href=\"{}\" class=\"btn\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
                escape_href(&secondary.link),
                escape_html(&secondary.text)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div></section>\n");
    out
}

fn assertions(site: &SiteCopy, accordion: &AccordionState) -> String {
    let title = site
        .assertions_title
        .as_deref()
        .unwrap_or(DEFAULT_ASSERTIONS_TITLE);
    let mut out = String::from("<section class=\"assertions section\" id=\"assertions\"><div class=\"container\">\n");
    out.push_str(&format!(
        "<h2 class=\"assertions-title\">{}</h2>\n",
        escape_html(title)
    ));
    out.push_str("<ul class=\"assertions-list\">\n");
    for assertion in &site.assertions {
        let open = accordion.is_expanded(&assertion.id);
        let id = escape_html(&assertion.id);
        out.push_str(&format!(
            "<li class=\"assertion-item{}\" data-assertion-id=\"{}\">\n",
            if open { " expanded" } else { "" },
            id
        ));
        out.push_str(&format!(
            "<button class=\"assertion-header\" aria-expanded=\"{}\" aria-controls=\"assertion-{}\">\
<span class=\"assertion-claim\">{}</span><span class=\"assertion-toggle\">{}</span></button>\n",
            open,
            id,
            escape_html(&assertion.claim),
            if open { "\u{2212}" } else { "+" }
        ));
        out.push_str(&format!(
            "<div class=\"assertion-explainer\" id=\"assertion-{}\"{}>\n<p>{}</p>\n",
            id,
            if open { "" } else { " hidden" },
            escape_html(&assertion.explainer)
        ));
        if let Some(mechanism) = &assertion.mechanism {
            out.push_str(&format!(
                "<div class=\"assertion-mechanism\">Mechanism: {}</div>\n",
                escape_html(mechanism)
            ));
        }
        out.push_str("</div>\n</li>\n");
    }
    out.push_str("</ul>\n</div></section>\n");
    out
}

fn tags(record: &ContentRecord) -> String {
    let tags = record.display_tags();
    if tags.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"tags\">");
    for tag in tags {
        out.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
    }
    out.push_str("</div>\n");
    out
}

fn detail_href(record: &ContentRecord, options: &HtmlOptions) -> String {
    escape_html(&options.href(&Route::project(record.id.clone())))
}

fn featured(record: &ContentRecord, options: &HtmlOptions) -> String {
    let mut out = String::from(
        "<section class=\"marquee-project section\" id=\"projects\"><div class=\"container\">\n",
    );
    out.push_str("<h2 class=\"section-title\">Featured Work</h2>\n");
    out.push_str("<div class=\"marquee-card\">\n<div class=\"marquee-header\">\n");
    if let Some(label) = &record.label {
        out.push_str(&format!(
            "<div class=\"marquee-label\">{}</div>\n",
            escape_html(label)
        ));
    }
    out.push_str(&format!(
        "<h3 class=\"marquee-title\">{}</h3>\n",
        escape_html(&record.title)
    ));
    if let Some(tagline) = &record.tagline {
        out.push_str(&format!(
            "<p class=\"marquee-tagline\">{}</p>\n",
            escape_html(tagline)
        ));
    }
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<p class=\"marquee-description\">{}</p>\n",
        escape_html(&record.summary)
    ));
    if let Some(approach) = &record.approach {
        out.push_str(&format!(
            "<p class=\"marquee-approach\">{}</p>\n",
            escape_html(approach)
        ));
    }
    if let Some(bridge) = &record.organizational_bridge {
        out.push_str(&format!(
            "<p class=\"marquee-bridge\">{}</p>\n",
            escape_html(bridge)
        ));
    }
    out.push_str(&tags(record));
    out.push_str(&format!(
        "<a href=\"{}\" class=\"btn btn-primary\">View Project</a>\n",
        detail_href(record, options)
    ));
    out.push_str("</div>\n</div></section>\n");
    out
}

fn professional(store: &ContentStore, options: &HtmlOptions) -> String {
    let records = store.professional();
    if records.is_empty() {
        return String::new();
    }

    let mut out = String::from(
        "<section class=\"professional-systems section\"><div class=\"container\">\n",
    );
    out.push_str("<h2 class=\"section-title\">Selected Professional Systems</h2>\n");
    if let Some(framing) = &store.projects().professional_framing {
        out.push_str(&format!(
            "<p class=\"section-framing\">{}</p>\n",
            escape_html(framing)
        ));
    }
    out.push_str("<div class=\"systems-grid\">\n");
    for record in records {
        out.push_str(&format!(
            "<a href=\"{}\" class=\"system-card card\">\n",
            detail_href(record, options)
        ));
        out.push_str(&format!(
            "<h3 class=\"system-title\">{}</h3>\n",
            escape_html(&record.title)
        ));
        let parts = [
            ("Problem", Some(record.summary.as_str())),
            ("Approach", record.approach.as_deref()),
            ("Outcome", record.outcome.as_deref()),
        ];
        for (heading, text) in parts {
            if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
                out.push_str(&format!(
                    "<div class=\"system-section\"><h4>{}</h4><p>{}</p></div>\n",
                    heading,
                    escape_html(text)
                ));
            }
        }
        out.push_str(&tags(record));
        if let Some(risk) = &record.risk_prevented {
            out.push_str(&format!(
                "<p class=\"system-risk\">Risk prevented: {}</p>\n",
                escape_html(risk)
            ));
        }
        out.push_str("<div class=\"system-link\">View System Design</div>\n</a>\n");
    }
    out.push_str("</div>\n</div></section>\n");
    out
}

fn titled_list(list: &TitledList, class: &str, item_class: &str) -> String {
    if list.items.is_empty() {
        return String::new();
    }
    let mut out = format!(
        "<section class=\"{} section\"><div class=\"container\">\n",
        class
    );
    out.push_str(&format!(
        "<h2 class=\"{}-title\">{}</h2>\n<ul class=\"{}-list\">\n",
        class,
        escape_html(&list.title),
        class
    ));
    for item in &list.items {
        out.push_str(&format!(
            "<li class=\"{}\">{}</li>\n",
            item_class,
            escape_html(item)
        ));
    }
    out.push_str("</ul>\n</div></section>\n");
    out
}

fn writing(site: &SiteCopy) -> String {
    if site.writing.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section class=\"writing section\"><div class=\"container\">\n");
    out.push_str("<h2 class=\"writing-title\">Writing</h2>\n<div class=\"writing-track\">\n");
    for post in &site.writing {
        out.push_str(&format!(
            "<a href=\"{}\" class=\"writing-card\" target=\"_blank\" rel=\"noopener noreferrer\">\
<h3 class=\"writing-card-title\">{}</h3>",
            escape_href(&post.url),
            escape_html(&post.title)
        ));
        if let Some(subtitle) = &post.subtitle {
            out.push_str(&format!(
                "<p class=\"writing-card-subtitle\">{}</p>",
                escape_html(subtitle)
            ));
        }
        out.push_str("</a>\n");
    }
    out.push_str("</div>\n</div></section>\n");
    out
}

fn footer(site: &SiteCopy, options: &HtmlOptions) -> String {
    let mut out = String::from("<footer class=\"footer\"><div class=\"container\">\n");
    let links = site.links.entries();
    if !links.is_empty() {
        out.push_str("<div class=\"footer-links\">\n");
        for (label, url) in links {
            out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
                escape_href(url),
                label
            ));
        }
        out.push_str("</div>\n");
    }
    if let Some(disclosure) = &site.disclosure {
        out.push_str(&format!(
            "<p class=\"footer-disclosure\">{}</p>\n",
            escape_html(disclosure)
        ));
    }
    if let Some(owner) = &site.owner {
        out.push_str(&format!(
            "<div class=\"footer-copyright\">&copy; {} {}. All rights reserved.</div>\n",
            options.year,
            escape_html(owner)
        ));
    }
    out.push_str("</div></footer>\n");
    out
}
