//! Scenario: Hosting Under a Sub-Path Without Rewrites
//!
//! Journey: the author publishes to `https://host/portfolio/` on a static
//! host that cannot rewrite unknown paths, so detail links use hash routes.
//!
//! Success Criteria:
//! - Every internal link carries the base path
//! - Detail links are hash routes; detail pages are still written
//! - The home page forwards each hash route to a page that exists
//! - Switching modes rewrites the home page and nothing is left stale

use crate::common::*;

#[test]
fn scenario_sub_path_hash_routing() {
    let env = TestEnv::builder()
        .with_project_config("[build]\nbase_path = \"/portfolio/\"\nhash_routes = true\n")
        .build();

    let result = env.run(&["build"]);
    assert!(result.success, "{}", result.stderr);

    let home = env.read_file("dist/index.html");
    assert!(home.contains("href=\"/portfolio/#/projects/governed-data\""));
    assert!(!home.contains("href=\"/projects/"));

    // Each hash link is forwarded by the home page script to a written page
    let marker = "href=\"/portfolio/#/projects/";
    let slugs: Vec<&str> = home
        .match_indices(marker)
        .map(|(at, _)| {
            let rest = &home[at + marker.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect();
    assert!(!slugs.is_empty());
    assert!(home.contains("var home='/portfolio/';"));
    for slug in slugs {
        assert!(home.contains(&format!("'{}'", slug)), "{} not forwarded", slug);
        assert!(env
            .project_path(&format!("dist/projects/{}/index.html", slug))
            .is_file());
    }

    let detail = env.read_file("dist/projects/governed-data/index.html");
    assert!(detail.contains("<a href=\"/portfolio/\" class=\"back-link\">"));

    // Back to path routes: same set of pages, home rewritten
    env.write_file("folio.toml", "[build]\nbase_path = \"/portfolio/\"\n");
    let result = env.run(&["build", "--json"]);
    assert!(result.success);
    let events = result.events();
    let complete = events.last().unwrap();
    assert_eq!(complete["removed"], 0);
    assert!(complete["written"].as_u64().unwrap() >= 1);
    assert!(env
        .read_file("dist/index.html")
        .contains("href=\"/portfolio/projects/governed-data/\""));
}
