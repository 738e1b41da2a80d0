//! Property tests for HTML escaping.

use proptest::prelude::*;

use folio::infrastructure::html::{escape_href, escape_html};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Escaped copy never contains raw markup characters.
    #[test]
    fn property_escaped_text_has_no_markup(s in "(?s).{0,200}") {
        let escaped = escape_html(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    /// PROPERTY: Text without special characters passes through unchanged.
    #[test]
    fn property_plain_text_is_unchanged(s in "[A-Za-z0-9 .,:;!?/-]{0,120}") {
        prop_assert_eq!(escape_html(&s), s);
    }

    /// PROPERTY: A `javascript:` URL never survives into an href.
    #[test]
    fn property_javascript_urls_are_dropped(
        scheme in "[jJ][aA][vV][aA][sS][cC][rR][iI][pP][tT]:",
        rest in ".{0,40}",
        pad in " {0,3}",
    ) {
        let url = format!("{}{}{}", pad, scheme, rest);
        prop_assert_eq!(escape_href(&url), "#");
    }

    /// PROPERTY: Tabs and newlines inside the scheme do not let it through.
    #[test]
    fn property_split_script_scheme_is_dropped(
        at in 1usize..10,
        gap in "[\t\n\r]{1,3}",
        rest in "[a-z(){}0-9]{0,20}",
    ) {
        let scheme = "javascript:";
        let url = format!("{}{}{}{}", &scheme[..at], gap, &scheme[at..], rest);
        prop_assert_eq!(escape_href(&url), "#");
    }
}
