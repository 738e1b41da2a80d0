use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use folio::application::{BuildOptions, DiffResult, DiffUseCase};

use super::project::Project;
use super::GlobalArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, PageEvent, StartEvent};
use crate::ui::output::{print_config_warnings, print_content_warnings};

pub fn cmd_diff(global: &GlobalArgs, source: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let project = Project::open(source.as_deref())?;
    let ui = project.ui(global);
    if !ui.json {
        print_config_warnings(&project.config_warnings);
    }

    let out_dir = project.out_dir(out.as_deref());
    let options = BuildOptions::new(&out_dir)
        .with_dry_run(true)
        .with_clean_orphans(project.config.build.clean_orphans);

    if ui.json {
        let _ = emit_event(&StartEvent::new("diff"));
    } else if ui.decorate() {
        print!(
            "{}",
            crate::ui::views::diff::render_diff_header(
                project.display_path(&project.content_dir),
                project.display_path(&out_dir),
                ui.color,
                ui.unicode
            )
        );
    }

    let use_case = DiffUseCase::new(project.build_use_case(project.renderer(None, false)));
    let result = use_case.execute(&options)?;

    print_content_warnings(&ui, "diff", &result.warnings);

    if ui.json {
        emit_pages(&result);
        let _ = emit_event(&CompleteEvent::new(
            "diff",
            true,
            json!({
                "new": result.creates.len(),
                "modified": result.updates.len(),
                "unchanged": result.unchanged.len(),
                "stale": result.orphans.len(),
                "stale_modified": result.modified_orphans.len(),
                "has_changes": result.has_changes(),
            }),
        ));
        return Ok(());
    }

    print!(
        "{}",
        crate::ui::views::diff::render_diff_listing(&result, ui.verbose, ui.color, ui.unicode)
    );
    if ui.decorate() {
        print!(
            "{}",
            crate::ui::views::diff::render_diff_summary(&result, ui.color, ui.unicode)
        );
    }

    Ok(())
}

fn emit_pages(result: &DiffResult) {
    for entry in &result.creates {
        let _ = emit_event(&PageEvent::new("diff", &entry.path, "create"));
    }
    for entry in &result.updates {
        let _ = emit_event(&PageEvent::new("diff", &entry.path, "update"));
    }
    for path in &result.orphans {
        let _ = emit_event(&PageEvent::new("diff", path, "remove"));
    }
    for path in &result.modified_orphans {
        let _ = emit_event(&PageEvent::new("diff", path, "keep_modified"));
    }
}
