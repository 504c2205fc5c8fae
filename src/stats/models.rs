// Wire types for the stats API
//
// These mirror the JSON body of `GET /api/stats`. Everything here is plain
// data: derived values (totals, wear, rollups) live in `aggregate`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One recorded run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// ISO-8601 calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub name: String,
    pub km: f64,
    pub min: f64,
    /// Name of the gear entry this run was logged with
    #[serde(default)]
    pub gear: String,
}

impl Activity {
    /// Year bucket for the yearly rollup: the first four characters of `date`
    pub fn year(&self) -> &str {
        match self.date.char_indices().nth(4) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}

/// Distance attributed to one piece of gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearInfo {
    /// Distance within the requested period
    pub km: f64,
    /// Lifetime distance
    #[serde(default)]
    pub total_km: f64,
    /// Wear limit, absent when none is tracked
    #[serde(default)]
    pub limit_km: Option<f64>,
}

impl GearInfo {
    /// Usable wear limit. A zero, negative or non-finite limit counts as none.
    pub fn effective_limit(&self) -> Option<f64> {
        self.limit_km.filter(|limit| limit.is_finite() && *limit > 0.0)
    }
}

/// Gear name → info, in the order the backend sent the keys
///
/// JSON objects are unordered in principle, but the gear view breaks km ties
/// by document order, so entries are kept as an ordered list rather than a
/// hash map. A repeated key replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GearSummary(Vec<(String, GearInfo)>);

impl GearSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, keeping the first-seen position
    pub fn insert(&mut self, name: impl Into<String>, info: GearInfo) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = info,
            None => self.0.push((name, info)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&GearInfo> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, info)| info)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GearInfo)> {
        self.0.iter().map(|(name, info)| (name.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, GearInfo)> for GearSummary {
    fn from_iter<I: IntoIterator<Item = (N, GearInfo)>>(iter: I) -> Self {
        let mut summary = GearSummary::new();
        for (name, info) in iter {
            summary.insert(name, info);
        }
        summary
    }
}

impl Serialize for GearSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, info) in &self.0 {
            map.serialize_entry(name, info)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GearSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GearSummaryVisitor;

        impl<'de> Visitor<'de> for GearSummaryVisitor {
            type Value = GearSummary;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of gear name to gear info")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut summary = GearSummary::new();
                while let Some((name, info)) = access.next_entry::<String, GearInfo>()? {
                    summary.insert(name, info);
                }
                Ok(summary)
            }

            // The backend never sends null, but an absent map and a null map mean the same
            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(GearSummary::new())
            }
        }

        deserializer.deserialize_any(GearSummaryVisitor)
    }
}

/// Body of `GET /api/stats`
///
/// When `error` is set the other fields carry no meaning and the backend
/// usually omits them, so both default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub activities: Vec<Activity>,
    pub gear_summary: GearSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatsResponse {
    /// Backend-reported error text, if any non-empty one is present
    pub fn backend_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }
}
