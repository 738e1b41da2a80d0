//! Fixtures shared by unit tests

use crate::domain::entities::{
    Assertion, ContentRecord, ContentStore, FooterLinks, Hero, ProjectCopy, ProjectDetail,
    ShapedText, SiteCopy,
};
use crate::domain::value_objects::Slug;

pub fn site_copy() -> SiteCopy {
    SiteCopy {
        owner: Some("Jordan Reyes".into()),
        hero: Hero {
            headline: "Governance before automation".into(),
            subheadline: "Data systems people can trust".into(),
            narrative_spine: None,
            cta: None,
        },
        about: None,
        assertions_title: None,
        assertions: vec![Assertion {
            id: "authority".into(),
            claim: "Data must be authoritative first".into(),
            explainer: "Automation amplifies whatever it is fed.".into(),
            mechanism: None,
        }],
        boundaries: None,
        judgment_calls: None,
        writing: Vec::new(),
        links: FooterLinks::default(),
        disclosure: None,
    }
}

/// Featured project plus `governed-data`, both with details
pub fn governed_store() -> ContentStore {
    let governed = Slug::parse("governed-data").expect("valid slug");
    let projects = ProjectCopy::new(ContentRecord::new(
        Slug::featured(),
        "Health Coach",
        "Weekly coaching without guardrails",
    ))
    .with_professional(ContentRecord::new(
        governed.clone(),
        "Governed Data Platform",
        "Reports nobody trusted",
    ))
    .with_detail(
        Slug::featured(),
        ProjectDetail::new("Context", "Design", vec!["Decision".into()]),
    )
    .with_detail(
        governed,
        ProjectDetail::new("Context", "Design", vec!["d1".into(), "d2".into()])
            .with_governance_risk(ShapedText::Items(vec![
                "r1".into(),
                "r2".into(),
                "r3".into(),
            ]))
            .with_outcome("Reports became authoritative"),
    );
    ContentStore::new(site_copy(), projects)
}
