use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};

use folio::application::{BuildOptions, WatchEvent, WatchOptions, WatchUseCase};
use folio::FolioError;

use super::project::Project;
use super::GlobalArgs;
use crate::ui::output::print_config_warnings;

pub fn cmd_watch(global: &GlobalArgs, source: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let project = Project::open(source.as_deref())?;
    let ui = project.ui(global);
    if !ui.json {
        print_config_warnings(&project.config_warnings);
    }

    if !project.content_dir.is_dir() {
        return Err(FolioError::DirectoryNotFound {
            path: project.content_dir.clone(),
        }
        .into());
    }

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .map_err(|e| anyhow!("failed to install Ctrl+C handler: {}", e))?;

    if ui.decorate() {
        let out_dir = project.out_dir(out.as_deref());
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(
                &project.display_path(&project.content_dir).display().to_string(),
                &project.display_path(&out_dir).display().to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    // Config is re-read on every rebuild so edits to folio.toml apply live
    let rebuild = || {
        let current = project.reload()?;
        let options = BuildOptions::new(current.out_dir(out.as_deref()))
            .with_clean_orphans(current.config.build.clean_orphans);
        current
            .build_use_case(current.renderer(None, false))
            .execute(&options)
    };

    let options = WatchOptions::new(project.watch_sources()).with_json(ui.json);
    WatchUseCase::new(options).start(running, rebuild, |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered =
            crate::ui::views::watch::render_watch_event(&timestamp, &event, ui.color, ui.unicode);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
