// Runs tab - activities newest first
//
// The Gear column is dropped on narrow terminals. Rows beyond the panel
// height are summarized in the title rather than scrolled.

use super::{panel_block, table_capacity};
use crate::dashboard::DashboardSnapshot;
use crate::format::{format_km, format_minutes};
use crate::stats::Activity;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Paragraph, Row, Table},
    Frame,
};

/// `Runs (12) — 84.20 km, 431 min`, plus a hint when rows are cut off
fn title(snapshot: &DashboardSnapshot<'_>, shown: usize) -> String {
    let totals = &snapshot.totals;
    let mut title = format!(
        " Runs ({}) — {} km, {} min ",
        totals.runs,
        format_km(totals.km),
        format_minutes(totals.min)
    );
    if shown < snapshot.runs.len() {
        title.push_str(&format!("[showing {}] ", shown));
    }
    title
}

fn row<'a>(run: &Activity, with_gear: bool) -> Row<'a> {
    let mut cells = vec![
        run.date.clone(),
        run.name.clone(),
        format_km(run.km),
        format_minutes(run.min),
    ];
    if with_gear {
        cells.push(run.gear.clone());
    }
    Row::new(cells)
}

pub fn render(f: &mut Frame, area: Rect, snapshot: &DashboardSnapshot<'_>, theme: &Theme) {
    let with_gear = Breakpoint::from_width(area.width).shows_gear_column();
    let shown = snapshot.runs.len().min(table_capacity(area));
    let block = panel_block(title(snapshot, shown), theme);

    if snapshot.runs.is_empty() {
        let empty = Paragraph::new(" No runs in this period")
            .style(theme.muted_style())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut headers = vec!["Date", "Name", "Km", "Min"];
    let mut widths = vec![
        Constraint::Length(10),
        Constraint::Min(12),
        Constraint::Length(9),
        Constraint::Length(6),
    ];
    if with_gear {
        headers.push("Gear");
        widths.push(Constraint::Min(12));
    }

    let rows: Vec<Row> = snapshot
        .runs
        .iter()
        .take(shown)
        .map(|run| row(run, with_gear))
        .collect();

    let table = Table::new(rows, widths)
        .header(Row::new(headers).style(theme.header_style()))
        .style(theme.base_style())
        .block(block);

    f.render_widget(table, area);
}
