//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer, newest at the bottom, colored
//! by level. The buffer is shared with the tracing layer; this panel only
//! reads it.

use super::panel_block;
use crate::format::truncate_to_width;
use crate::logging::LogEntry;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    widgets::{List, ListItem},
    Frame,
};

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn items<'a>(entries: &[LogEntry], width: usize, theme: &Theme) -> Vec<ListItem<'a>> {
    entries
        .iter()
        .map(|entry| {
            let line = truncate_to_width(&format_log_entry(entry), width);
            ListItem::new(line).style(theme.log_style(entry.level))
        })
        .collect()
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let width = area.width.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(height);

    let list = List::new(items(&entries, width, &app.theme))
        .block(panel_block(" Logs ".to_string(), &app.theme));

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{Local, TimeZone};

    #[test]
    fn entry_format_has_time_level_message() {
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 7, 8, 9).unwrap(),
            level: LogLevel::Warn,
            target: "shoebox::controller".to_string(),
            message: "Stats request #2 failed: HTTP 502".to_string(),
        };
        assert_eq!(
            format_log_entry(&entry),
            "[07:08:09] WARN  Stats request #2 failed: HTTP 502"
        );
    }
}
