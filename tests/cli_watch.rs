//! E2E tests for `folio watch`

mod common;

use std::process::Stdio;
use std::thread;
use std::time::Duration;

use common::*;

#[test]
fn watch_builds_once_and_emits_json_events() {
    let env = TestEnv::with_fixture_content();

    let mut child = env
        .command(env.project_root.path())
        .args(["watch", "--json"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start folio watch");

    thread::sleep(Duration::from_millis(800));

    let _ = child.kill();
    let output = child.wait_with_output().expect("Failed to get output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("\"event\":\"watch_started\""),
        "Expected watch_started. Got: {}",
        stdout
    );
    assert!(stdout.contains("\"command\":\"watch\""));
    assert_page!(env, "dist/index.html");
}

#[test]
fn watch_rebuilds_after_content_change() {
    let env = TestEnv::with_fixture_content();

    let mut child = env
        .command(env.project_root.path())
        .args(["watch", "--json"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start folio watch");

    thread::sleep(Duration::from_millis(800));
    env.write_file(
        "content/projects.json",
        &common::PROJECTS_JSON.replace("Finance reports disagreed.", "Finance reports conflicted."),
    );
    thread::sleep(Duration::from_millis(1500));

    let _ = child.kill();
    let output = child.wait_with_output().expect("Failed to get output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("file_changed"), "Got: {}", stdout);
    assert!(env
        .read_file("dist/projects/governed-data/index.html")
        .contains("Finance reports conflicted."));
}

#[test]
fn watch_fails_fast_when_content_dir_is_missing() {
    let env = TestEnv::builder().with_content_dir("elsewhere").build();

    let result = env.run(&["watch", "--source", "missing"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "directory not found");
}
