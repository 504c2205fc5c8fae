// Stats view - tab bar plus the selected derived view
//
// Only a successful load has anything to tabulate; idle, loading and failed
// states replace the tab content with a single message.

use crate::dashboard::{DashboardSnapshot, StatusKind};
use crate::tabs::Tab;
use crate::tui::app::App;
use crate::tui::components::{gear_panel, panel_block, runs_panel, yearly_panel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.dashboard.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_tab_bar(f, chunks[0], app, &snapshot);
    render_tab_content(f, chunks[1], app, &snapshot);
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App, snapshot: &DashboardSnapshot<'_>) {
    let titles: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| format!(" {}│{} ", tab.index() + 1, tab.name()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style()),
        )
        .select(snapshot.tab.index())
        .style(Style::default().fg(app.theme.fg))
        .highlight_style(
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn render_message(f: &mut Frame, area: Rect, app: &App, text: String, style: Style) {
    let message = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(panel_block(String::new(), &app.theme));
    f.render_widget(message, area);
}

fn render_tab_content(f: &mut Frame, area: Rect, app: &App, snapshot: &DashboardSnapshot<'_>) {
    let theme = &app.theme;

    match snapshot.status {
        StatusKind::Idle => render_message(
            f,
            area,
            app,
            " Press r to load activities".to_string(),
            theme.muted_style(),
        ),
        StatusKind::Loading => render_message(
            f,
            area,
            app,
            format!(" {} Loading activities…", app.spinner_char()),
            theme.muted_style(),
        ),
        StatusKind::Failed => render_message(
            f,
            area,
            app,
            format!(" Error: {}", snapshot.error.unwrap_or("unknown error")),
            theme.error_style(),
        ),
        StatusKind::Success => match snapshot.tab {
            Tab::Gear => gear_panel::render(f, area, snapshot.gear, theme),
            Tab::Runs => runs_panel::render(f, area, snapshot, theme),
            Tab::Yearly => yearly_panel::render(f, area, snapshot.yearly, theme),
        },
    }
}
