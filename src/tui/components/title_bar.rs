// Title bar component
//
// App name and version on the left, spinner while a request is in flight,
// backend URL on the right.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let loading = if app.dashboard.is_loading() {
        format!("  {} loading", app.spinner_char())
    } else {
        String::new()
    };

    let title = Paragraph::new(format!(" 👟 Shoebox v{}{}", VERSION, loading))
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(app.theme.border_style())
                .title_top(Line::from(format!(" {} ", app.api_url)).right_aligned()),
        );

    f.render_widget(title, area);
}
