use serde::{Deserialize, Serialize};

/// Which preview the statistics edit screen currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewView {
    #[default]
    Table,
    Graph,
}

impl PreviewView {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Table => Self::Graph,
            Self::Graph => Self::Table,
        }
    }
}

/// Table/graph toggle of the report preview.
///
/// Only one preview is visible at a time, and the switch icon shown is the
/// one leading to the other view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewSwitch {
    current: PreviewView,
}

impl PreviewSwitch {
    #[must_use]
    pub fn new(initial: PreviewView) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub fn current(&self) -> PreviewView {
        self.current
    }

    /// Switch icon the user can click to leave the current view.
    #[must_use]
    pub fn visible_switch(&self) -> PreviewView {
        self.current.opposite()
    }

    #[must_use]
    pub fn is_visible(&self, view: PreviewView) -> bool {
        self.current == view
    }

    /// Returns `true` when the view changed.
    pub fn show_table(&mut self) -> bool {
        self.show(PreviewView::Table)
    }

    /// Returns `true` when the view changed.
    pub fn show_graph(&mut self) -> bool {
        self.show(PreviewView::Graph)
    }

    pub fn toggle(&mut self) -> PreviewView {
        self.current = self.current.opposite();
        self.current
    }

    fn show(&mut self, view: PreviewView) -> bool {
        if self.current == view {
            return false;
        }
        self.current = view;
        true
    }
}
