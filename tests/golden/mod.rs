//! Golden tests: the fixture content must render byte-for-byte as recorded
//! under `snapshots/`.

use folio::domain::ports::{ContentRepository, PageRenderer};
use folio::infrastructure::{HtmlOptions, HtmlRenderer, JsonContentRepository};
use folio::{render_detail, ContentStore, SlugResolver};

use crate::common::*;

fn fixture_store() -> ContentStore {
    let dir = tempfile::tempdir().unwrap();
    let site = dir.path().join("site.json");
    let projects = dir.path().join("projects.json");
    std::fs::write(&site, SITE_JSON).unwrap();
    std::fs::write(&projects, PROJECTS_JSON).unwrap();

    JsonContentRepository::new(site, projects).load().unwrap()
}

/// Page markup without the document head (title and inline stylesheet)
fn page_body(html: &str) -> &str {
    let start = html.find("<nav").expect("page has a nav");
    let end = html.find("</body>").expect("page has a body");
    &html[start..end]
}

fn snapshot(name: &str, content: &str) {
    insta::with_settings!({ prepend_module_to_snapshot => false }, {
        insta::assert_snapshot!(name, content);
    });
}

#[test]
fn golden_detail_page_governed_data() {
    let store = fixture_store();
    let project = SlugResolver::new(&store)
        .resolve("governed-data")
        .found()
        .unwrap();
    let view = render_detail(project.record, project.detail);

    let renderer = HtmlRenderer::new(HtmlOptions::new("/", false));
    let page = renderer.render_project(&store, &view);

    snapshot("detail_page_governed_data", page_body(page.html()));
}

#[test]
fn golden_not_found_page() {
    let store = fixture_store();
    let renderer = HtmlRenderer::new(HtmlOptions::new("/portfolio/", true));
    let page = renderer.render_not_found(&store);

    snapshot("not_found_page", page_body(page.html()));
}

#[test]
fn golden_show_governed_data() {
    let env = TestEnv::with_fixture_content();
    let result = env.run(&["show", "governed-data"]);
    assert!(result.success, "{}", result.stderr);

    snapshot("show_governed_data", &result.stdout);
}

#[test]
fn golden_show_assertions_with_one_open() {
    let env = TestEnv::with_fixture_content();
    let result = env.run(&["show", "--toggle", "authority"]);
    assert!(result.success, "{}", result.stderr);

    snapshot("show_assertions_authority_open", &result.stdout);
}
