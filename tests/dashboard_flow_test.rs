//! End-to-end: dashboard -> client -> mock backend -> derived views -> report

use chrono::NaiveDate;
use serde_json::json;
use shoebox::dashboard::{Dashboard, StatusKind};
use shoebox::report;
use shoebox::stats::{StatsClient, WearTier, YearOrder};
use shoebox::tabs::Tab;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .and(query_param("after_date", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activities": [
                {"date": "2023-12-31", "name": "NYE Shakeout", "km": 5.0, "min": 28, "gear": "Clifton"},
                {"date": "2024-01-07", "name": "Long Run", "km": 18.5, "min": 102, "gear": "Pegasus"},
                {"date": "2024-01-03", "name": "Easy", "km": 7.25, "min": 41, "gear": "Clifton"}
            ],
            "gear_summary": {
                "Clifton": {"km": 12.25, "total_km": 690.0, "limit_km": 700},
                "Pegasus": {"km": 18.5, "total_km": 250.0, "limit_km": 800}
            }
        })))
        .mount(&server)
        .await;

    // All-time requests are answered with a backend error
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .and(query_param("after_date", "1970-01-01"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "backend warming up"})))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn load_derives_every_view() {
    let server = backend().await;
    let client = StatsClient::new(&server.uri(), Duration::from_secs(5)).unwrap();

    let mut dash = Dashboard::new(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(), YearOrder::Ascending);
    let ticket = dash.load();
    dash.resolve(ticket, client.fetch(ticket.after_date).await);

    let snapshot = dash.snapshot();
    assert_eq!(snapshot.status, StatusKind::Success);
    assert_eq!(snapshot.totals.runs, 3);
    assert!((snapshot.totals.km - 30.75).abs() < 1e-9);
    assert!((snapshot.totals.min - 171.0).abs() < 1e-9);

    // Gear sorted by period km, descending
    assert_eq!(snapshot.gear[0].name, "Pegasus");
    assert_eq!(snapshot.gear[0].wear_percent, Some(31));
    assert_eq!(snapshot.gear[1].name, "Clifton");
    assert_eq!(snapshot.gear[1].wear_percent, Some(99));
    assert_eq!(snapshot.gear[1].tier, Some(WearTier::Critical));

    // Runs newest first
    let dates: Vec<&str> = snapshot.runs.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-07", "2024-01-03", "2023-12-31"]);

    // Years oldest first
    let years: Vec<&str> = snapshot.yearly.iter().map(|y| y.year.as_str()).collect();
    assert_eq!(years, vec!["2023", "2024"]);

    let text = report::render(&snapshot);
    assert!(text.contains("Runs (3) — 30.75 km, 171 min"));
    assert!(text.contains("Clifton: 12.25 km"));
}

#[tokio::test]
async fn failed_reload_clears_previous_data() {
    let server = backend().await;
    let client = StatsClient::new(&server.uri(), Duration::from_secs(5)).unwrap();

    let mut dash = Dashboard::new(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(), YearOrder::Descending);
    let ticket = dash.load();
    dash.resolve(ticket, client.fetch(ticket.after_date).await);
    assert_eq!(dash.snapshot().yearly[0].year, "2024");

    dash.select_tab(Tab::Runs);
    dash.set_all_time(true);
    let ticket = dash.load();
    assert_eq!(ticket.after_date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    dash.resolve(ticket, client.fetch(ticket.after_date).await);

    let snapshot = dash.snapshot();
    assert_eq!(snapshot.status, StatusKind::Failed);
    assert_eq!(snapshot.error, Some("backend warming up"));
    assert!(snapshot.runs.is_empty());
    assert_eq!(snapshot.tab, Tab::Runs);
    assert_eq!(report::render(&snapshot), "error: backend warming up\n");
}

#[tokio::test]
async fn superseded_response_is_discarded() {
    let server = backend().await;
    let client = StatsClient::new(&server.uri(), Duration::from_secs(5)).unwrap();

    let mut dash = Dashboard::new(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(), YearOrder::Ascending);
    let first = dash.load();
    let first_result = client.fetch(first.after_date).await;

    // A second load is issued before the first one lands
    dash.set_all_time(true);
    let second = dash.load();

    dash.resolve(first, first_result);
    assert_eq!(dash.snapshot().status, StatusKind::Loading);

    dash.resolve(second, client.fetch(second.after_date).await);
    assert_eq!(dash.snapshot().status, StatusKind::Failed);
}
