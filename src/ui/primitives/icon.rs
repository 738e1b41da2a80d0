use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Pointer,
    Expanded,
    Collapsed,
    Build,
    Check,
    Show,
    Diff,
    Watch,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Pointer) => theme::icons::POINTER,
            (true, Icon::Expanded) => theme::icons::EXPANDED,
            (true, Icon::Collapsed) => theme::icons::COLLAPSED,
            (true, Icon::Build) => theme::icons::BUILD,
            (true, Icon::Check) => theme::icons::CHECK,
            (true, Icon::Show) => theme::icons::SHOW,
            (true, Icon::Diff) => theme::icons::DIFF,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Trash) => theme::icons::TRASH,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Pointer) => theme::icons_ascii::POINTER,
            (false, Icon::Expanded) => theme::icons_ascii::EXPANDED,
            (false, Icon::Collapsed) => theme::icons_ascii::COLLAPSED,
            (false, Icon::Build) => theme::icons_ascii::BUILD,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
            (false, Icon::Show) => theme::icons_ascii::SHOW,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error | Icon::Pointer => theme::colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Trash => theme::colors::WARNING,
            Icon::Arrow | Icon::Collapsed => theme::colors::DIM,
            Icon::Expanded
            | Icon::Build
            | Icon::Check
            | Icon::Show
            | Icon::Diff
            | Icon::Watch => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
