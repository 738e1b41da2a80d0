use folio::ContentWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed list of content warnings, one entry per warning
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn for_content(warnings: &[ContentWarning]) -> Self {
        let noun = if warnings.len() == 1 { "warning" } else { "warnings" };
        let mut block = Self::new(format!("{} content {}", warnings.len(), noun));
        for warning in warnings {
            let mut line = format!("- {}", warning);
            if let Some(suggestion) = &warning.suggestion {
                line.push_str(&format!(" (did you mean '{}'?)", suggestion));
            }
            block.add_line(line);
        }
        block
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool, width: u16) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut b = Box::with_title(header)
            .style(BoxStyle::Warning)
            .max_width(width);
        for line in &self.lines {
            b.add_line(line.clone());
        }
        b.render(supports_color, supports_unicode)
    }
}
