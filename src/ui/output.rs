use folio::config::ConfigWarning;
use folio::ContentWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::ci::{in_github_actions, Annotation};
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::WarningEvent};

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Report content warnings in whichever form the context asks for.
pub fn print_content_warnings(ui: &UiContext, command: &str, warnings: &[ContentWarning]) {
    if warnings.is_empty() {
        return;
    }

    if ui.json {
        for warning in warnings {
            let _ = emit_event(&WarningEvent::new(command, warning));
        }
        return;
    }

    if ui.caps.is_ci && in_github_actions() {
        for warning in warnings {
            println!("{}", Annotation::for_warning(warning));
        }
    }

    if ui.quiet {
        return;
    }
    eprint!(
        "{}",
        WarningBlock::for_content(warnings).render(ui.color, ui.unicode, ui.caps.width)
    );
}
