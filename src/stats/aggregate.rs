//! Derived views over a fetched [`StatsResponse`]
//!
//! Everything in here is a pure function of the response: no I/O, no caching,
//! and the input is never mutated. The dashboard rebuilds a [`DerivedViews`]
//! every time a new response is accepted and drops it on failure.

use super::models::{Activity, GearInfo, StatsResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ─────────────────────────────────────────────────────────────────────────────
// Wear classification
// ─────────────────────────────────────────────────────────────────────────────

/// Display emphasis for a gear entry, by rounded wear percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WearTier {
    /// Below 50%
    Low,
    /// 50–69%
    Moderate,
    /// 70–79%
    High,
    /// 80% and above
    Critical,
}

impl WearTier {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            0..=49 => WearTier::Low,
            50..=69 => WearTier::Moderate,
            70..=79 => WearTier::High,
            _ => WearTier::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WearTier::Low => "low",
            WearTier::Moderate => "moderate",
            WearTier::High => "high",
            WearTier::Critical => "critical",
        }
    }
}

/// `round(total_km / limit_km * 100)`, or `None` when no usable limit is set
pub fn wear_percent(gear: &GearInfo) -> Option<u32> {
    let limit = gear.effective_limit()?;
    let percent = (gear.total_km / limit * 100.0).round();
    if percent.is_finite() {
        // `as` saturates, so a negative lifetime distance clamps to 0
        Some(percent as u32)
    } else {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View rows
// ─────────────────────────────────────────────────────────────────────────────

/// Sum of km, minutes and run count over the fetched activities
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub runs: usize,
    pub km: f64,
    pub min: f64,
}

/// One line of the Gear view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearRow {
    pub name: String,
    pub km: f64,
    pub total_km: f64,
    pub limit_km: Option<f64>,
    pub wear_percent: Option<u32>,
    pub tier: Option<WearTier>,
}

impl GearRow {
    fn from_entry(name: &str, info: &GearInfo) -> Self {
        let wear_percent = wear_percent(info);
        Self {
            name: name.to_string(),
            km: info.km,
            total_km: info.total_km,
            limit_km: info.effective_limit(),
            wear_percent,
            tier: wear_percent.map(WearTier::from_percent),
        }
    }
}

/// One line of the Yearly view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRow {
    pub year: String,
    pub km: f64,
}

/// Direction of the Yearly view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearOrder {
    /// Oldest year first
    #[default]
    Ascending,
    /// Most recent year first
    Descending,
}

impl YearOrder {
    /// Parse from a config string, falling back to ascending
    pub fn from_config(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "descending" | "desc" => YearOrder::Descending,
            _ => YearOrder::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            YearOrder::Ascending => "ascending",
            YearOrder::Descending => "descending",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Aggregation
// ─────────────────────────────────────────────────────────────────────────────

pub fn totals(activities: &[Activity]) -> Totals {
    activities.iter().fold(Totals::default(), |acc, run| Totals {
        runs: acc.runs + 1,
        km: acc.km + run.km,
        min: acc.min + run.min,
    })
}

/// Km per year, keyed by the first four characters of each date
pub fn yearly_km(activities: &[Activity]) -> BTreeMap<String, f64> {
    let mut years: BTreeMap<String, f64> = BTreeMap::new();
    for run in activities {
        *years.entry(run.year().to_string()).or_insert(0.0) += run.km;
    }
    years
}

/// Period km descending; equal km keep their incoming order
pub fn sort_gear(rows: &mut [GearRow]) {
    rows.sort_by(|a, b| b.km.total_cmp(&a.km));
}

/// Most recent first; runs on the same date keep their incoming order
///
/// Dates are fixed-width ISO strings, so lexical order is calendar order.
pub fn sort_runs(runs: &mut [Activity]) {
    runs.sort_by(|a, b| b.date.cmp(&a.date));
}

/// All derived view models for one accepted response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedViews {
    pub totals: Totals,
    pub gear: Vec<GearRow>,
    pub yearly: Vec<YearRow>,
    pub runs: Vec<Activity>,
}

impl DerivedViews {
    pub fn from_response(response: &StatsResponse, year_order: YearOrder) -> Self {
        let mut gear: Vec<GearRow> = response
            .gear_summary
            .iter()
            .map(|(name, info)| GearRow::from_entry(name, info))
            .collect();
        sort_gear(&mut gear);

        let mut yearly: Vec<YearRow> = yearly_km(&response.activities)
            .into_iter()
            .map(|(year, km)| YearRow { year, km })
            .collect();
        if year_order == YearOrder::Descending {
            yearly.reverse();
        }

        let mut runs = response.activities.clone();
        sort_runs(&mut runs);

        Self {
            totals: totals(&response.activities),
            gear,
            yearly,
            runs,
        }
    }
}
