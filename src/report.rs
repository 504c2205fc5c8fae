// Plain-text report for headless runs
//
// Renders a dashboard snapshot as grid tables on stdout, the same three
// views the TUI shows: gear summary, runs, yearly km.

use crate::dashboard::{DashboardSnapshot, StatusKind};
use crate::format::{format_km, format_minutes, format_wear};
use unicode_width::UnicodeWidthStr;

fn grid_rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&fill.to_string().repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn grid_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(w.saturating_sub(cell.width()) + 1));
        line.push('|');
    }
    line.push('\n');
    line
}

/// Render a grid table: `+---+` rules, `+===+` under the header
fn grid_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let mut out = grid_rule(&widths, '-');
    out.push_str(&grid_row(headers, &widths));
    out.push_str(&grid_rule(&widths, '='));
    for row in rows {
        out.push_str(&grid_row(row.as_slice(), &widths));
        out.push_str(&grid_rule(&widths, '-'));
    }
    out
}

/// Render the whole report
pub fn render(snapshot: &DashboardSnapshot<'_>) -> String {
    if snapshot.status == StatusKind::Failed {
        return format!("error: {}\n", snapshot.error.unwrap_or("unknown error"));
    }

    let mut out = String::new();

    out.push_str("Kilometers by gear:\n");
    if snapshot.gear.is_empty() {
        out.push_str("  (no gear)\n");
    }
    for gear in snapshot.gear {
        let tier = gear
            .tier
            .map(|t| format!(" {}", t.as_str()))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {}: {} km (lifetime {} km, wear {}{})\n",
            gear.name,
            format_km(gear.km),
            format_km(gear.total_km),
            format_wear(gear.wear_percent),
            tier,
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Runs ({}) — {} km, {} min\n",
        snapshot.totals.runs,
        format_km(snapshot.totals.km),
        format_minutes(snapshot.totals.min)
    ));
    let runs: Vec<Vec<String>> = snapshot
        .runs
        .iter()
        .map(|run| {
            vec![
                run.date.clone(),
                run.name.clone(),
                format_km(run.km),
                format_minutes(run.min),
                run.gear.clone(),
            ]
        })
        .collect();
    out.push_str(&grid_table(&["Date", "Name", "Km", "Min", "Gear"], &runs));

    if !snapshot.yearly.is_empty() {
        out.push('\n');
        out.push_str("Yearly km:\n");
        let years: Vec<Vec<String>> = snapshot
            .yearly
            .iter()
            .map(|y| vec![y.year.clone(), format_km(y.km)])
            .collect();
        out.push_str(&grid_table(&["Year", "Km"], &years));
    }

    out
}
