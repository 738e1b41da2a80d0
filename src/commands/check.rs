use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use folio::application::{CheckItem, CheckOptions, CheckResult, CheckStatus, CheckUseCase};

use super::project::Project;
use super::GlobalArgs;
use crate::ui::ci::{in_github_actions, Annotation};
use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::json::{emit_event, write_typed_event};
use crate::ui::output::print_config_warnings;

pub fn cmd_check(global: &GlobalArgs, source: Option<PathBuf>, strict_warnings: bool) -> Result<()> {
    let project = Project::open(source.as_deref())?;
    let ui = project.ui(global);
    if !ui.json {
        print_config_warnings(&project.config_warnings);
    }

    let options = CheckOptions {
        strict_warnings: strict_warnings || project.config.check.strict_warnings,
    };

    if ui.json {
        let _ = emit_event(&StartEvent::new("check"));
    } else if ui.decorate() {
        print!(
            "{}",
            crate::ui::views::check::render_check_header(
                project.display_path(&project.content_dir),
                options.strict_warnings,
                ui.color,
                ui.unicode
            )
        );
    }

    let use_case = CheckUseCase::new(project.repository());
    let result = if ui.json {
        let mut out = std::io::stdout().lock();
        use_case.execute_with_callback(|item| {
            let _ = write_typed_event(&mut out, &DataEvent::new("check", item).with_event("check"));
        })
    } else {
        use_case.execute()
    };

    let passed = result.passes(&options);

    if ui.json {
        let _ = emit_event(&CompleteEvent::new(
            "check",
            passed,
            json!({
                "passed": result.passed,
                "warnings": result.warnings,
                "errors": result.errors,
                "strict_warnings": options.strict_warnings,
            }),
        ));
    } else {
        render_result(&result, passed, &ui);
        if ui.caps.is_ci && in_github_actions() {
            emit_github_annotations(&result.items);
        }
    }

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}

fn render_result(result: &CheckResult, passed: bool, ui: &UiContext) {
    // Failing items are always printed, even in quiet mode
    if ui.quiet {
        let failing: Vec<CheckItem> = result
            .items
            .iter()
            .filter(|i| i.status != CheckStatus::Pass)
            .cloned()
            .collect();
        print!(
            "{}",
            crate::ui::views::check::render_check_report(&failing, 0, ui.color, ui.unicode)
        );
        return;
    }

    print!(
        "{}",
        crate::ui::views::check::render_check_report(
            &result.items,
            ui.verbose,
            ui.color,
            ui.unicode
        )
    );
    println!();
    print!(
        "{}",
        crate::ui::views::check::render_check_summary(result, passed, ui.color, ui.unicode)
    );
}

fn emit_github_annotations(items: &[CheckItem]) {
    for annotation in items.iter().filter_map(Annotation::for_check_item) {
        println!("{}", annotation);
    }
}
