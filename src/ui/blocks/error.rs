use std::path::{Path, PathBuf};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// (line number, text, is the reported line)
type ContextLine = (usize, String, bool);

/// Boxed error pointing at a file, optionally with surrounding lines
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: PathBuf,
    line: Option<usize>,
    message: String,
    code_context: Option<Vec<ContextLine>>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
            message: message.into(),
            code_context: None,
            fix: None,
        }
    }

    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn with_file_context(mut self, before: usize, after: usize) -> Self {
        let Some(line) = self.line else { return self };
        self.code_context = read_code_context(&self.file, line, before, after);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut b = Box::with_title("ERROR").style(BoxStyle::Error);

        match self.line {
            Some(line) => b.add_line(format!("{}:{}", self.file.display(), line)),
            None => b.add_line(self.file.display().to_string()),
        }
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(lines) = &self.code_context {
            b.add_empty();
            for (no, text, highlight) in lines {
                let prefix = if *highlight {
                    Icon::Pointer.render(supports_unicode)
                } else {
                    " "
                };
                let text = if *highlight {
                    ColoredText::error(text.as_str()).render(supports_color)
                } else {
                    text.clone()
                };
                b.add_line(format!("{} {:>4} | {}", prefix, no, text));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}

fn read_code_context(
    file: &Path,
    line: usize,
    before: usize,
    after: usize,
) -> Option<Vec<ContextLine>> {
    let content = std::fs::read_to_string(file).ok()?;
    let lines: Vec<&str> = content.lines().collect();
    if line == 0 || line > lines.len() {
        return None;
    }

    let start = line.saturating_sub(before + 1);
    let end = (line + after).min(lines.len());

    Some(
        lines[start..end]
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let no = start + idx + 1;
                (no, (*text).to_string(), no == line)
            })
            .collect(),
    )
}
