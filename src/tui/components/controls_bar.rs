// Controls bar component
//
// The start date field, the all-time flag and the key hints. While the date
// is being edited the field shows a cursor, and turns red after a rejected
// Enter.

use crate::tui::app::{App, InputMode};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let date_style = match &app.mode {
        InputMode::EditingDate { invalid: true, .. } => theme.error_style(),
        InputMode::EditingDate { .. } => Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::UNDERLINED),
        InputMode::Normal if app.dashboard.all_time() => {
            theme.muted_style().add_modifier(Modifier::CROSSED_OUT)
        }
        InputMode::Normal => Style::default().fg(theme.fg),
    };

    let cursor = if app.is_editing() { "▏" } else { "" };
    let check = if app.dashboard.all_time() { "x" } else { " " };

    let mut spans = vec![
        Span::styled(" From ", theme.muted_style()),
        Span::styled(format!("[{}{}]", app.date_field(), cursor), date_style),
        Span::styled("  All time ", theme.muted_style()),
        Span::styled(format!("[{}]", check), Style::default().fg(theme.fg)),
    ];

    let hints = if app.is_editing() {
        "Enter:apply  Esc:cancel"
    } else if bp.at_least(Breakpoint::Wide) {
        "r:load  a:all-time  d:date  Tab:view  t:theme  q:quit"
    } else {
        "r a d Tab t q"
    };
    spans.push(Span::styled(format!("   {}", hints), theme.muted_style()));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style()),
    );

    f.render_widget(bar, area);
}
