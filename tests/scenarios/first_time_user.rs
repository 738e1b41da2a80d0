//! Scenario: First-Time Author
//!
//! Journey: someone with an empty repository wants a portfolio site.
//!
//! Steps:
//! 1. Runs `folio build` with no content - told what is missing
//! 2. Writes site.json and projects.json
//! 3. Runs `folio check` - passes (with editorial warnings)
//! 4. Runs `folio build` - pages appear
//! 5. Edits one detail and previews with `folio diff`
//! 6. Rebuilds - only the edited page is rewritten
//!
//! Success Criteria:
//! - Every failure names the file to fix
//! - Rebuilds touch only what changed

use crate::common::*;

#[test]
fn scenario_first_time_author_complete_journey() {
    let env = TestEnv::builder().without_site().build();
    env.remove_file("content/projects.json");

    // Step 1: nothing to build yet
    let result = env.run(&["build"]);
    assert!(!result.success, "Step 1: build without content must fail");
    assert!(
        result.stderr.contains("site.json") && result.stderr.contains("FIX:"),
        "Step 1: error should name the missing document.\nstderr:\n{}",
        result.stderr
    );

    // Step 2: write content
    env.write_file("content/site.json", SITE_JSON);
    env.write_file("content/projects.json", PROJECTS_JSON);

    // Step 3: lint
    let result = env.run(&["check"]);
    assert!(
        result.success,
        "Step 3: fixture content has no errors.\nstdout:\n{}",
        result.stdout
    );

    // Step 4: first build
    let result = env.run(&["build"]);
    assert!(result.success, "Step 4: build should succeed.\n{}", result.stderr);
    assert!(env.project_path("dist/index.html").exists());
    assert!(env
        .project_path("dist/projects/governed-data/index.html")
        .exists());

    // Step 5: edit and preview
    env.write_file(
        "content/projects.json",
        &PROJECTS_JSON.replace("Lineage recorded", "Lineage recorded end to end"),
    );
    let result = env.run(&["diff"]);
    assert!(result.success);
    assert!(
        result.stdout.contains("~ projects/governed-data/index.html"),
        "Step 5: diff should list the edited page.\nstdout:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("1 modified"));

    // Step 6: incremental rebuild
    let result = env.run(&["build", "--json"]);
    assert!(result.success);
    let events = result.events();
    let written: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "page" && e["action"] == "write")
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert_eq!(written, vec!["projects/governed-data/index.html"]);
}
