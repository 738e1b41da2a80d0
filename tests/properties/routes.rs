//! Property tests for slugs and routes.

use proptest::prelude::*;

use folio::{Route, Slug};

fn valid_slug() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]([a-z0-9_-]{0,20}[a-z0-9])?").unwrap()
}

fn base_path() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        Just(String::new()),
        "/[a-z]{1,8}/?",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Slug and route parsing never panic on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = Slug::parse(&s);
        let _ = Route::parse(&s);
    }

    /// PROPERTY: Well-formed slugs parse and keep their text.
    #[test]
    fn property_valid_slug_round_trips(s in valid_slug()) {
        let slug = Slug::parse(&s).unwrap();
        prop_assert_eq!(slug.as_str(), s.as_str());
    }

    /// PROPERTY: Uppercase letters and whitespace are always rejected.
    #[test]
    fn property_invalid_characters_rejected(
        prefix in "[a-z]{0,5}",
        bad in "[A-Z \t/.]",
        suffix in "[a-z]{0,5}",
    ) {
        let s = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(Slug::parse(&s).is_err());
    }

    /// PROPERTY: Root-hosted detail links parse back to the same route.
    #[test]
    fn property_root_href_parses_back(s in valid_slug(), hash in any::<bool>()) {
        let route = Route::project(Slug::parse(&s).unwrap());
        prop_assert_eq!(Route::parse(&route.href("/", hash)), route);
    }

    /// PROPERTY: Hash links parse back under any base path.
    #[test]
    fn property_hash_href_parses_back_under_base(s in valid_slug(), base in base_path()) {
        let route = Route::project(Slug::parse(&s).unwrap());
        prop_assert_eq!(Route::parse(&route.href(&base, true)), route);
    }

    /// PROPERTY: Every detail route writes `projects/{slug}/index.html`.
    #[test]
    fn property_output_path_is_nested_index(s in valid_slug()) {
        let route = Route::project(Slug::parse(&s).unwrap());
        let path = route.output_path();
        let expected = std::path::Path::new("projects").join(&s).join("index.html");
        prop_assert_eq!(path, expected);
    }
}
