// Status bar component
//
// Request state, current tab, totals for the loaded period, uptime.

use crate::dashboard::StatusKind;
use crate::format::{format_km, format_minutes};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Adapts to terminal width: labelled on wide terminals, compact otherwise
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.dashboard.snapshot();
    let bp = Breakpoint::from_width(area.width);

    let state = match snapshot.status {
        StatusKind::Loading => format!("{} {}", app.spinner_char(), snapshot.status.label()),
        _ => snapshot.status.label().to_string(),
    };

    let totals = &snapshot.totals;
    let text = if bp.verbose_status() {
        format!(
            " {} │ {} │ {} runs │ {} km │ {} min │ theme {} │ up {}",
            state,
            snapshot.tab.name(),
            totals.runs,
            format_km(totals.km),
            format_minutes(totals.min),
            app.theme_kind.name(),
            app.uptime(),
        )
    } else {
        format!(
            " {} │ {} │ 🏃 {} │ {} km",
            state,
            snapshot.tab.name(),
            totals.runs,
            format_km(totals.km),
        )
    };

    let style = if snapshot.status == StatusKind::Failed {
        app.theme.error_style()
    } else {
        Style::default().fg(app.theme.status_bar)
    };

    let status = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::TOP).border_style(app.theme.border_style()));

    f.render_widget(status, area);
}
