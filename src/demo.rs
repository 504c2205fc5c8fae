// Demo mode: serve generated stats from an in-process backend
//
// Spins up a small axum server on an ephemeral local port that speaks the
// same `GET /api/stats?after_date=` contract as the real backend, backed by
// a deterministic set of runs spread over the last three years. Handy for
// trying the dashboard without a backend or API credentials.
//
// Run with: SHOEBOX_DEMO=1 cargo run --release

use crate::stats::{Activity, GearInfo, GearSummary, StatsResponse};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Duration as ChronoDuration, Local, NaiveDate};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Artificial latency so the loading state is visible
const RESPONSE_DELAY: Duration = Duration::from_millis(350);

struct DemoShoe {
    name: &'static str,
    limit_km: Option<f64>,
    /// Mileage logged before the generated history starts
    prior_km: f64,
}

const SHOES: [DemoShoe; 3] = [
    DemoShoe { name: "Pegasus 40", limit_km: Some(800.0), prior_km: 310.0 },
    DemoShoe { name: "Clifton 9", limit_km: Some(700.0), prior_km: 95.0 },
    DemoShoe { name: "Trail Spikes", limit_km: None, prior_km: 40.0 },
];

const RUN_NAMES: [&str; 6] = [
    "Morning Run",
    "Easy Recovery",
    "Tempo Tuesday",
    "Hill Repeats",
    "Long Sunday Run",
    "Lunch Run",
];

/// Generated history shared by all requests
struct DemoData {
    runs: Vec<Activity>,
}

impl DemoData {
    /// Runs every other or third day from January 1 two years ago up to `today`
    fn generate(today: NaiveDate) -> Self {
        let mut runs = Vec::new();
        let Some(mut day) = NaiveDate::from_ymd_opt(today.year() - 2, 1, 1) else {
            return Self { runs };
        };

        // Small LCG so the data looks varied but is identical on every start
        let mut seed: u64 = 0x5EED;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as u32
        };

        while day <= today {
            let roll = next();
            let name = RUN_NAMES[roll as usize % RUN_NAMES.len()];
            let shoe = &SHOES[(roll as usize / 7) % SHOES.len()];
            let km = 4.0 + (roll % 1700) as f64 / 100.0;
            let pace_min_per_km = 5.0 + (roll % 90) as f64 / 60.0;

            runs.push(Activity {
                date: day.format("%Y-%m-%d").to_string(),
                name: name.to_string(),
                km: (km * 100.0).round() / 100.0,
                min: (km * pace_min_per_km).floor(),
                gear: shoe.name.to_string(),
            });

            day += ChronoDuration::days(2 + (roll % 2) as i64);
        }

        Self { runs }
    }

    /// Build the response the real backend would give for `after`
    fn response_after(&self, after: NaiveDate) -> StatsResponse {
        let after = after.format("%Y-%m-%d").to_string();
        let activities: Vec<Activity> = self
            .runs
            .iter()
            .filter(|run| run.date >= after)
            .cloned()
            .collect();

        let mut gear_summary = GearSummary::new();
        for shoe in &SHOES {
            let period_km: f64 = activities
                .iter()
                .filter(|run| run.gear == shoe.name)
                .map(|run| run.km)
                .sum();
            if period_km == 0.0 {
                continue;
            }
            let lifetime_km: f64 = shoe.prior_km
                + self
                    .runs
                    .iter()
                    .filter(|run| run.gear == shoe.name)
                    .map(|run| run.km)
                    .sum::<f64>();

            gear_summary.insert(
                shoe.name,
                GearInfo {
                    km: (period_km * 100.0).round() / 100.0,
                    total_km: (lifetime_km * 100.0).round() / 100.0,
                    limit_km: shoe.limit_km,
                },
            );
        }

        StatsResponse {
            activities,
            gear_summary,
            error: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StatsQuery {
    after_date: Option<String>,
}

async fn stats_handler(
    State(data): State<Arc<DemoData>>,
    Query(query): Query<StatsQuery>,
) -> (StatusCode, Json<StatsResponse>) {
    tokio::time::sleep(RESPONSE_DELAY).await;

    let after = match query.after_date.as_deref() {
        None => NaiveDate::from_ymd_opt(Local::now().year(), 1, 1).unwrap_or_default(),
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                let body = StatsResponse {
                    error: Some(format!("invalid after_date {:?}: {}", raw, e)),
                    ..Default::default()
                };
                return (StatusCode::BAD_REQUEST, Json(body));
            }
        },
    };

    (StatusCode::OK, Json(data.response_after(after)))
}

/// Running demo backend; dropping it stops the server
pub struct DemoBackend {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl DemoBackend {
    /// Base URL to hand to the stats client
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the server and wait for it to finish
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = (&mut self.handle).await;
    }
}

impl Drop for DemoBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Start the demo backend on `127.0.0.1` with an OS-assigned port
pub async fn spawn_demo_backend() -> Result<DemoBackend> {
    let data = Arc::new(DemoData::generate(Local::now().date_naive()));
    tracing::info!("Demo backend generated {} runs", data.runs.len());

    let app = Router::new()
        .route("/api/stats", get(stats_handler))
        .with_state(data);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind demo backend")?;
    let addr = listener
        .local_addr()
        .context("Failed to read demo backend address")?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
        if let Err(e) = result {
            tracing::error!("Demo backend stopped: {}", e);
        }
    });

    tracing::info!("Demo backend listening on {}", addr);

    Ok(DemoBackend {
        addr,
        shutdown_tx: Some(shutdown_tx),
        handle,
    })
}
