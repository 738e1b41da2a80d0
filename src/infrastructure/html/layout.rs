//! Page shell shared by every view

use super::escaping::escape_html;

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;line-height:1.6;color:#1a1a1a}\
.container{max-width:960px;margin:0 auto;padding:0 24px}\
.section{padding:64px 0}\
.btn{display:inline-block;padding:10px 20px;border:1px solid currentColor;text-decoration:none;color:inherit}\
.btn-primary{background:#1a1a1a;color:#fff}\
.tag{display:inline-block;margin:0 8px 8px 0;padding:2px 10px;border:1px solid #ccc;font-size:.85em}\
.systems-grid{display:grid;gap:24px;grid-template-columns:repeat(auto-fit,minmax(280px,1fr))}\
.system-card{display:block;padding:24px;border:1px solid #ddd;text-decoration:none;color:inherit}\
.assertions-list{list-style:none;padding:0}\
.assertion-header{display:flex;justify-content:space-between;width:100%;padding:16px 0;border:0;background:none;font:inherit;text-align:left;cursor:pointer}\
.assertion-item{border-bottom:1px solid #ddd}\
.footer{padding:48px 0;border-top:1px solid #ddd}";

/// Wrap a view body in a complete HTML document
pub fn document(title: &str, home_href: &str, site_name: &str, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(&format!("<style>{}</style>\n", STYLE));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!(
        "<nav class=\"site-nav\"><div class=\"container\"><a href=\"{}\" class=\"nav-home\">{}</a></div></nav>\n",
        escape_html(home_href),
        escape_html(site_name)
    ));
    out.push_str(body);
    out.push_str("</body>\n</html>\n");
    out
}
