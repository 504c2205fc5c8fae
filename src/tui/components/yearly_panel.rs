// Yearly tab - kilometers per calendar year
//
// Bar chart on the left, exact figures on the right. On compact terminals
// only the table is drawn.

use super::panel_block;
use crate::format::format_km;
use crate::stats::YearRow;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph, Row, Table},
    Frame,
};

/// Bar heights are whole kilometers
fn bars<'a>(yearly: &[YearRow], theme: &Theme) -> Vec<Bar<'a>> {
    yearly
        .iter()
        .map(|y| {
            Bar::default()
                .label(Line::from(y.year.clone()))
                .value(y.km.max(0.0).round() as u64)
                .text_value(format!("{:.0}", y.km))
                .style(Style::default().fg(theme.chart))
        })
        .collect()
}

fn render_chart(f: &mut Frame, area: Rect, yearly: &[YearRow], theme: &Theme) {
    let bars = bars(yearly, theme);
    let chart = BarChart::default()
        .block(panel_block(" Km per year ".to_string(), theme))
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(2)
        .value_style(Style::default().fg(theme.bg).bg(theme.chart))
        .label_style(theme.muted_style());

    f.render_widget(chart, area);
}

fn render_table(f: &mut Frame, area: Rect, yearly: &[YearRow], theme: &Theme) {
    let rows: Vec<Row> = yearly
        .iter()
        .map(|y| Row::new(vec![y.year.clone(), format_km(y.km)]))
        .collect();

    let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(10)])
        .header(Row::new(vec!["Year", "Km"]).style(theme.header_style()))
        .style(theme.base_style())
        .block(panel_block(" Yearly km ".to_string(), theme));

    f.render_widget(table, area);
}

pub fn render(f: &mut Frame, area: Rect, yearly: &[YearRow], theme: &Theme) {
    if yearly.is_empty() {
        let empty = Paragraph::new(" No runs in this period")
            .style(theme.muted_style())
            .block(panel_block(" Yearly km ".to_string(), theme));
        f.render_widget(empty, area);
        return;
    }

    if !Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        render_table(f, area, yearly, theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_chart(f, chunks[0], yearly, theme);
    render_table(f, chunks[1], yearly, theme);
}

