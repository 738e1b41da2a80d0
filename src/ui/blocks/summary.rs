use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Partial,
    Failure,
}

impl Outcome {
    fn style(self) -> (BoxStyle, Icon) {
        match self {
            Outcome::Success => (BoxStyle::Success, Icon::Success),
            Outcome::Partial => (BoxStyle::Warning, Icon::Warning),
            Outcome::Failure => (BoxStyle::Error, Icon::Error),
        }
    }

    fn title(self, title: &str) -> ColoredText {
        match self {
            Outcome::Success => ColoredText::success(title),
            Outcome::Partial => ColoredText::warning(title),
            Outcome::Failure => ColoredText::error(title),
        }
    }
}

/// Closing box of a command: counts, notes and a next step
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    outcome: Outcome,
    stats: Vec<(String, usize)>,
    notes: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn new(title: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            title: title.into(),
            outcome,
            stats: Vec::new(),
            notes: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Line shown with a warning icon under the stats
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon) = self.outcome.style();
        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            self.outcome
                .title(&self.title)
                .bold()
                .render(supports_color)
        );

        let mut b = Box::with_title(header).style(style);
        b.add_empty();

        for (label, count) in &self.stats {
            b.add_line(format!("{} {}", count, label));
        }

        if !self.notes.is_empty() {
            b.add_empty();
            for note in &self.notes {
                b.add_line(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    note
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
