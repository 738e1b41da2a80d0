//! Property tests for slug resolution.

use proptest::prelude::*;

use folio::domain::entities::{ProjectCopy, ProjectDetail};
use folio::{ContentRecord, ContentStore, SiteCopy, Slug, SlugResolver, FEATURED_SLUG};

fn slug_string() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]([a-z0-9_-]{0,14}[a-z0-9])?").unwrap()
}

fn site() -> SiteCopy {
    serde_json::from_str(
        r#"{"hero": {"headline": "Governance before automation", "subheadline": "s"}, "assertions": []}"#,
    )
    .unwrap()
}

fn detail() -> ProjectDetail {
    ProjectDetail::new("context", "design", vec!["decision".to_string()])
}

/// Store with one professional record per id; only ids in `with_detail`
/// get a detail entry.
fn store(ids: &[String], with_detail: &[bool]) -> ContentStore {
    let mut projects = ProjectCopy::new(ContentRecord::new(
        Slug::featured(),
        "Featured",
        "Featured summary",
    ))
    .with_detail(Slug::featured(), detail());

    for (id, has_detail) in ids.iter().zip(with_detail) {
        let slug = Slug::parse(id).unwrap();
        projects = projects.with_professional(ContentRecord::new(slug.clone(), id.as_str(), "summary"));
        if *has_detail {
            projects = projects.with_detail(slug, detail());
        }
    }

    ContentStore::new(site(), projects)
}

fn records() -> impl Strategy<Value = (Vec<String>, Vec<bool>)> {
    proptest::collection::btree_set(slug_string(), 0..8)
        .prop_map(|set| {
            set.into_iter()
                .filter(|s| s != FEATURED_SLUG)
                .collect::<Vec<_>>()
        })
        .prop_flat_map(|ids| {
            let n = ids.len();
            (Just(ids), proptest::collection::vec(any::<bool>(), n))
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A slug resolves iff it has both a record and a detail, and
    /// the resolved record carries that slug.
    #[test]
    fn property_resolves_only_joined_slugs((ids, with_detail) in records()) {
        let store = store(&ids, &with_detail);
        let resolver = SlugResolver::new(&store);

        for (id, has_detail) in ids.iter().zip(&with_detail) {
            match resolver.resolve(id).found() {
                Some(project) => {
                    prop_assert!(*has_detail);
                    prop_assert_eq!(project.record.id.as_str(), id.as_str());
                }
                None => prop_assert!(!*has_detail),
            }
        }
    }

    /// PROPERTY: Slugs not listed anywhere never resolve.
    #[test]
    fn property_unknown_slug_is_not_found(
        (ids, with_detail) in records(),
        probe in "(?s).{0,24}",
    ) {
        prop_assume!(!ids.contains(&probe) && probe != FEATURED_SLUG);
        let store = store(&ids, &with_detail);

        prop_assert!(!SlugResolver::new(&store).resolve(&probe).is_found());
    }

    /// PROPERTY: The featured sentinel always resolves to the featured record.
    #[test]
    fn property_featured_sentinel_resolves((ids, with_detail) in records()) {
        let store = store(&ids, &with_detail);
        let project = SlugResolver::new(&store).resolve(FEATURED_SLUG).found();

        prop_assert!(project.is_some());
        prop_assert_eq!(project.unwrap().record.title.as_str(), "Featured");
    }
}
