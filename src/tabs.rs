// View selector - which dashboard panel is visible
//
// Purely local UI state: switching tabs never touches the request
// controller and never triggers a fetch.

use serde::Serialize;

/// Dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Gear,
    Runs,
    Yearly,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Gear, Tab::Runs, Tab::Yearly];

    /// Get the next tab in cycle
    pub fn next(self) -> Self {
        match self {
            Tab::Gear => Tab::Runs,
            Tab::Runs => Tab::Yearly,
            Tab::Yearly => Tab::Gear,
        }
    }

    /// Get the previous tab in cycle
    pub fn prev(self) -> Self {
        match self {
            Tab::Gear => Tab::Yearly,
            Tab::Runs => Tab::Gear,
            Tab::Yearly => Tab::Runs,
        }
    }

    /// Position in the tab bar
    pub fn index(self) -> usize {
        match self {
            Tab::Gear => 0,
            Tab::Runs => 1,
            Tab::Yearly => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get display name for the tab bar
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Gear => "Gear",
            Tab::Runs => "Runs",
            Tab::Yearly => "Yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewSelector {
    tab: Tab,
}

impl ViewSelector {
    pub fn current(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }
}
