//! Scenario: Governed Data Detail Page
//!
//! Journey: a visitor opens `/projects/governed-data`, a project with no
//! links, then follows a mistyped link.
//!
//! Success Criteria:
//! - Sections appear in fixed order; the links section is absent
//! - A malformed section is skipped with a warning, never a failed build
//! - An unknown slug lands on the not-found view with one way home

use crate::common::*;

#[test]
fn scenario_governed_data_detail_page() {
    let env = TestEnv::with_fixture_content();

    let result = env.run(&["show", "governed-data"]);
    assert!(result.success);
    let outline = &result.stdout;

    let headings = [
        "\nContext\n",
        "\nSystem Design\n",
        "\nKey Decisions\n",
        "\nGovernance & Risk\n",
        "\nOutcome\n",
    ];
    let mut last = 0;
    for heading in headings {
        let at = outline[last..]
            .find(heading)
            .unwrap_or_else(|| panic!("missing or out of order: {:?}\n{}", heading, outline));
        last += at + heading.len();
    }
    assert!(!outline.contains("\nLinks\n"));
    assert!(outline.contains("  - Single owner per metric\n  - Reconcile before publish\n"));
    assert!(outline.trim_end().ends_with("Back to Projects"));

    // Mistyped link
    let result = env.run(&["show", "/projects/governed-dta"]);
    assert!(result.success);
    assert!(result.stdout.contains("Project not found"));
    assert!(result.stdout.contains("/projects/governed-dta"));
}

#[test]
fn scenario_malformed_outcome_is_skipped_not_fatal() {
    let env = TestEnv::builder()
        .with_projects(PROJECTS_JSON_BAD_OUTCOME)
        .build();

    let result = env.run(&["show", "governed-data", "-v"]);
    assert!(result.success);
    assert!(!result.stdout.contains("\nOutcome\n"));
    assert!(result.stderr.contains("outcome"), "stderr:\n{}", result.stderr);

    let result = env.run(&["build", "--json"]);
    assert!(result.success);
    let warnings: Vec<_> = result
        .events()
        .into_iter()
        .filter(|e| e["event"] == "warning")
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["kind"], "shape_mismatch");
    assert_eq!(warnings[0]["field"], "outcome");
    assert_eq!(warnings[0]["subject"], "governed-data");
}
