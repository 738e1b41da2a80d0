use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use serde_json::json;

use folio::application::{BuildOptions, BuildResult};

use super::project::Project;
use super::GlobalArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, PageEvent, StartEvent};
use crate::ui::output::{print_config_warnings, print_content_warnings};

#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    pub source: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub base_path: Option<String>,
    pub hash_routes: bool,
    pub keep_orphans: bool,
    pub dry_run: bool,
}

pub fn cmd_build(global: &GlobalArgs, args: BuildArgs) -> Result<()> {
    let project = Project::open(args.source.as_deref())?;
    let ui = project.ui(global);
    if !ui.json {
        print_config_warnings(&project.config_warnings);
    }

    let out_dir = project.out_dir(args.out.as_deref());
    let renderer = project.renderer(args.base_path.as_deref(), args.hash_routes);
    let options = BuildOptions::new(&out_dir)
        .with_dry_run(args.dry_run)
        .with_clean_orphans(project.config.build.clean_orphans && !args.keep_orphans);

    if ui.json {
        let _ = emit_event(&StartEvent::new("build"));
    } else if ui.decorate() {
        print!(
            "{}",
            crate::ui::views::build::render_build_header(
                project.display_path(&project.content_dir),
                project.display_path(&out_dir),
                &renderer.options().base_path,
                args.dry_run,
                ui.color,
                ui.unicode
            )
        );
    }

    let started = Instant::now();
    let result = project.build_use_case(renderer).execute(&options)?;
    let elapsed = started.elapsed().as_millis() as u64;

    print_content_warnings(&ui, "build", &result.warnings);

    if ui.json {
        emit_pages(&result);
        let _ = emit_event(
            &CompleteEvent::new(
                "build",
                true,
                json!({
                    "written": result.written.len(),
                    "skipped": result.skipped.len(),
                    "removed": result.removed.len(),
                    "kept_modified": result.kept_modified.len(),
                    "warnings": result.warnings.len(),
                    "dry_run": result.dry_run,
                }),
            )
            .with_duration(elapsed),
        );
        return Ok(());
    }

    if ui.verbose > 0 {
        print!(
            "{}",
            crate::ui::views::build::render_build_pages(&result, ui.color, ui.unicode)
        );
    }
    if ui.decorate() {
        print!(
            "{}",
            crate::ui::views::build::render_build_summary(&result, ui.color, ui.unicode)
        );
    }

    Ok(())
}

fn emit_pages(result: &BuildResult) {
    let (write, remove) = if result.dry_run {
        ("would_write", "would_remove")
    } else {
        ("write", "remove")
    };
    for path in &result.written {
        let _ = emit_event(&PageEvent::new("build", path, write));
    }
    for path in &result.removed {
        let _ = emit_event(&PageEvent::new("build", path, remove));
    }
    for path in &result.kept_modified {
        let _ = emit_event(&PageEvent::new("build", path, "keep_modified"));
    }
}
