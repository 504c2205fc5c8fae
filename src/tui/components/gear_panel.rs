// Gear tab - kilometers per shoe with wear against its limit
//
// Rows arrive sorted by period km. The wear column is colored by tier and
// carries a small bar; gear without a limit shows the placeholder.

use super::panel_block;
use crate::format::{format_km, format_wear, WEAR_PLACEHOLDER};
use crate::stats::GearRow;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

const WEAR_BAR_WIDTH: usize = 10;

/// `███████░░░` for a wear percentage, capped at full
fn wear_bar(percent: u32) -> String {
    let filled = ((percent.min(100) as usize * WEAR_BAR_WIDTH) + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(WEAR_BAR_WIDTH - filled)
    )
}

fn row<'a>(gear: &GearRow, theme: &Theme) -> Row<'a> {
    let tier_style = theme.tier_style(gear.tier);
    let limit = gear
        .limit_km
        .map(format_km)
        .unwrap_or_else(|| WEAR_PLACEHOLDER.to_string());
    let bar = gear.wear_percent.map(wear_bar).unwrap_or_default();
    let tier = gear.tier.map(|t| t.as_str()).unwrap_or("");

    Row::new(vec![
        Cell::from(gear.name.clone()),
        Cell::from(format_km(gear.km)),
        Cell::from(format_km(gear.total_km)),
        Cell::from(limit),
        Cell::from(format_wear(gear.wear_percent)).style(tier_style),
        Cell::from(bar).style(tier_style),
        Cell::from(tier).style(tier_style),
    ])
}

pub fn render(f: &mut Frame, area: Rect, gear: &[GearRow], theme: &Theme) {
    let block = panel_block(format!(" Gear ({}) ", gear.len()), theme);

    if gear.is_empty() {
        let empty = Paragraph::new(" No gear used in this period")
            .style(theme.muted_style())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Gear", "Km", "Lifetime", "Limit", "Wear", "", "Tier"])
        .style(theme.header_style());

    let rows: Vec<Row> = gear.iter().map(|g| row(g, theme)).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(WEAR_BAR_WIDTH as u16),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .style(theme.base_style())
    .block(block);

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wear_bar_scales_and_caps() {
        assert_eq!(wear_bar(0), "░░░░░░░░░░");
        assert_eq!(wear_bar(60), "██████░░░░");
        assert_eq!(wear_bar(100), "██████████");
        assert_eq!(wear_bar(140), "██████████");
    }
}
