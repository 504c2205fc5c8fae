/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for size thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

/// Terminals shorter than this drop the log panel
const MIN_HEIGHT_FOR_LOGS: u16 = 24;

/// Log panel height including borders
pub const LOG_PANEL_HEIGHT: u16 = 7;

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Runs table shows the Gear column
    pub fn shows_gear_column(&self) -> bool {
        self.at_least(Breakpoint::Normal)
    }

    /// Status bar uses labelled format
    pub fn verbose_status(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }
}

/// Log panel height for a terminal of this size (0 = hidden)
pub fn log_panel_height(width: u16, height: u16) -> u16 {
    if height < MIN_HEIGHT_FOR_LOGS || !Breakpoint::from_width(width).at_least(Breakpoint::Normal) {
        0
    } else {
        LOG_PANEL_HEIGHT
    }
}
