// Views module - screen-level rendering
//
// Shell layout, top to bottom:
// title bar │ controls bar │ stats view (tabs + content) │ logs │ status bar
//
// The log panel is dropped on small terminals (see `layout::log_panel_height`).

mod stats;

use super::app::App;
use super::components::{controls_bar, logs_panel, status_bar, title_bar};
use super::layout::log_panel_height;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(Block::default().style(app.theme.base_style()), area);

    let logs_height = log_panel_height(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(logs_height),
            Constraint::Length(2),
        ])
        .split(area);

    title_bar::render(f, chunks[0], app);
    controls_bar::render(f, chunks[1], app);
    stats::render(f, chunks[2], app);
    if logs_height > 0 {
        logs_panel::render(f, chunks[3], app);
    }
    status_bar::render(f, chunks[4], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::logging::LogBuffer;
    use crate::stats::{Activity, GearInfo, StatsResponse, YearOrder};
    use crate::tabs::Tab;
    use crate::tui::theme::ThemeKind;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        App::new(
            Dashboard::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), YearOrder::Ascending),
            ThemeKind::Dark,
            LogBuffer::new(),
            "http://127.0.0.1:3000".to_string(),
        )
    }

    fn loaded_app() -> App {
        let mut app = app();
        let ticket = app.dashboard.load();
        app.dashboard.resolve(
            ticket,
            Ok(StatsResponse {
                activities: vec![
                    Activity {
                        date: "2023-12-30".to_string(),
                        name: "Year End Run".to_string(),
                        km: 10.0,
                        min: 55.0,
                        gear: "Pegasus".to_string(),
                    },
                    Activity {
                        date: "2024-01-06".to_string(),
                        name: "Tempo Tuesday".to_string(),
                        km: 8.25,
                        min: 40.0,
                        gear: "Pegasus".to_string(),
                    },
                ],
                gear_summary: vec![(
                    "Pegasus",
                    GearInfo { km: 18.25, total_km: 600.0, limit_km: Some(800.0) },
                )]
                .into_iter()
                .collect(),
                error: None,
            }),
        );
        app
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn idle_screen_prompts_for_load() {
        let text = render(&app(), 100, 30);
        assert!(text.contains("Shoebox"));
        assert!(text.contains("2024-01-01"));
        assert!(text.contains("Press r to load"));
    }

    #[test]
    fn gear_tab_shows_wear() {
        let text = render(&loaded_app(), 110, 30);
        assert!(text.contains("Pegasus"));
        assert!(text.contains("75%"));
        assert!(text.contains("high"));
    }

    #[test]
    fn runs_tab_hides_gear_column_when_narrow() {
        let mut app = loaded_app();
        app.dashboard.select_tab(Tab::Runs);

        let wide = render(&app, 110, 30);
        assert!(wide.contains("Runs (2)"));
        assert!(wide.contains("Tempo Tuesday"));
        assert!(wide.contains("Gear "));

        let narrow = render(&app, 50, 30);
        assert!(narrow.contains("Tempo Tuesday"));
        assert!(!narrow.contains("Pegasus"));
    }

    #[test]
    fn yearly_tab_lists_years() {
        let mut app = loaded_app();
        app.dashboard.select_tab(Tab::Yearly);
        let text = render(&app, 110, 30);
        assert!(text.contains("2023"));
        assert!(text.contains("10.00"));
        assert!(text.contains("8.25"));
    }

    #[test]
    fn failure_is_shown_in_place_of_data() {
        let mut app = app();
        let ticket = app.dashboard.load();
        app.dashboard.resolve(
            ticket,
            Ok(StatsResponse {
                error: Some("token expired".to_string()),
                ..Default::default()
            }),
        );
        let text = render(&app, 100, 30);
        assert!(text.contains("token expired"));
    }
}
