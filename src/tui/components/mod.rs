// Components module - reusable UI building blocks
//
// Shell components are rendered on every frame:
// - Title bar: app name, backend, loading spinner
// - Controls bar: start date field, all-time flag, key hints
// - Logs panel: recent log entries
// - Status bar: request state and totals
//
// Tab panels render one derived view each (gear, runs, yearly).

pub mod controls_bar;
pub mod gear_panel;
pub mod logs_panel;
pub mod runs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod yearly_panel;

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders},
};

/// Bordered block used by every content panel
pub fn panel_block<'a>(title: String, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .title(title)
        .title_style(theme.title_style())
}

/// Rows available inside a bordered table with a header line
pub fn table_capacity(area: Rect) -> usize {
    area.height.saturating_sub(3) as usize
}
