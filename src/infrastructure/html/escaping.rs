//! HTML escaping
//!
//! Every piece of content copy passes through here before it reaches a page.

/// Escape text for an element body or a double-quoted attribute
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape text for a single-quoted JavaScript string inside `<script>`
pub fn escape_js(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out
}

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Escape a URL for an `href`.
///
/// Relative links and `http`, `https` and `mailto` URLs pass; any other
/// scheme becomes `#`. Browsers ignore tabs, newlines and other control
/// characters inside a scheme, so those are removed before it is read.
pub fn escape_href(url: &str) -> String {
    let trimmed = url.trim();
    match scheme(trimmed) {
        Some(scheme) if !ALLOWED_SCHEMES.contains(&scheme.as_str()) => "#".to_string(),
        _ => escape_html(trimmed),
    }
}

/// Lowercased scheme of `url`, if it has one
fn scheme(url: &str) -> Option<String> {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let end = compact.find(|c| matches!(c, ':' | '/' | '?' | '#'))?;
    if !compact[end..].starts_with(':') {
        return None;
    }
    Some(compact[..end].to_ascii_lowercase())
}
