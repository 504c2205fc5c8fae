// Stats domain: wire types, the HTTP client and the aggregation engine

pub mod aggregate;
pub mod client;
pub mod models;

pub use aggregate::{DerivedViews, GearRow, Totals, WearTier, YearOrder, YearRow};
pub use client::{FetchError, StatsClient};
pub use models::{Activity, GearInfo, GearSummary, StatsResponse};
