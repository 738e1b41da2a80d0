use std::path::PathBuf;

use anyhow::Result;

use folio::application::{show_assertions, show_location};
use folio::domain::ports::ContentRepository;

use super::project::Project;
use super::GlobalArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::output::{print_config_warnings, print_content_warnings};

pub fn cmd_show(
    global: &GlobalArgs,
    slug: Option<&str>,
    toggles: &[String],
    source: Option<PathBuf>,
) -> Result<()> {
    let project = Project::open(source.as_deref())?;
    let ui = project.ui(global);
    if !ui.json {
        print_config_warnings(&project.config_warnings);
    }

    let store = project.repository().load()?;
    let view = match slug {
        Some(location) => show_location(&store, location),
        None => show_assertions(&store, toggles.iter().map(String::as_str)),
    };

    let mut warnings = store.load_warnings().to_vec();
    warnings.extend(view.warnings().iter().cloned());
    if ui.verbose > 0 || ui.json {
        print_content_warnings(&ui, "show", &warnings);
    }

    if ui.json {
        let _ = emit_event(&DataEvent::new("show", &view).with_event("show"));
        return Ok(());
    }

    print!(
        "{}",
        crate::ui::views::show::render_show_view(&view, ui.color, ui.unicode)
    );
    Ok(())
}
