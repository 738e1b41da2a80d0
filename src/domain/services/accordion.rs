//! Expand/collapse state for one list
//!
//! At most one item is open. The state belongs to a single rendered list and
//! is passed explicitly to whatever renders that list.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccordionState {
    expanded: Option<String>,
}

impl AccordionState {
    /// Fresh list: nothing expanded
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `id`: collapse it if open, otherwise open it (closing any other)
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    /// Apply a sequence of toggles in order
    pub fn replay<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut state = Self::new();
        for id in ids {
            state.toggle(id);
        }
        state
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}
