//! HTTP client for the stats backend
//!
//! One call: `GET {api_url}/api/stats?after_date=YYYY-MM-DD`. Anything that
//! keeps the caller from getting a usable [`StatsResponse`] comes back as a
//! [`FetchError`] whose `Display` text is what the dashboard shows the user.

use super::models::StatsResponse;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::time::Duration;
use thiserror::Error;

/// Path of the stats endpoint, relative to the configured API URL
pub const STATS_PATH: &str = "/api/stats";

/// Why a fetch produced no data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with an `error` field; shown verbatim
    #[error("{0}")]
    Backend(String),

    /// Non-2xx status without a usable error message in the body
    #[error("HTTP {0}")]
    Http(u16),

    /// Connection, timeout or body read failure
    #[error("{0}")]
    Transport(String),

    /// 2xx status but the body is not a stats response
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Async client for the stats endpoint
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    api_url: String,
}

impl StatsClient {
    /// Build a client against `api_url` (scheme + host, optional path prefix)
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch runs and gear usage on or after `after_date`
    pub async fn fetch(&self, after_date: NaiveDate) -> Result<StatsResponse, FetchError> {
        let url = format!("{}{}", self.api_url, STATS_PATH);
        let after = after_date.format("%Y-%m-%d").to_string();

        tracing::debug!("GET {} after_date={}", url, after);

        let response = self
            .client
            .get(&url)
            .query(&[("after_date", after.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        interpret_body(status.as_u16(), &body)
    }
}

/// Turn a status + raw body into a response or the error to show
///
/// A backend error message wins over the status code; the bare status is
/// only used when the body has nothing better to say. The `error` field is
/// read before the strict shape so an error-only body still surfaces its text.
pub(crate) fn interpret_body(status: u16, body: &str) -> Result<StatsResponse, FetchError> {
    let success = (200..300).contains(&status);

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !success => return Err(FetchError::Http(status)),
        Err(e) => return Err(FetchError::Decode(e.to_string())),
    };

    if let Some(message) = value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|msg| !msg.is_empty())
    {
        return Err(FetchError::Backend(message.to_string()));
    }
    if !success {
        return Err(FetchError::Http(status));
    }

    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_body_parses() {
        let body = r#"{"activities": [{"date": "2024-01-02", "name": "Easy", "km": 6.2, "min": 35, "gear": "Pegasus"}],
                       "gear_summary": {"Pegasus": {"km": 6.2, "total_km": 412.9, "limit_km": 800}}}"#;
        let resp = interpret_body(200, body).unwrap();
        assert_eq!(resp.activities.len(), 1);
        assert_eq!(resp.activities[0].min, 35.0);
        assert_eq!(resp.gear_summary.len(), 1);
    }

    #[test]
    fn backend_error_wins_over_status() {
        let err = interpret_body(500, r#"{"error": "rate limited"}"#).unwrap_err();
        assert_eq!(err, FetchError::Backend("rate limited".to_string()));
        assert_eq!(err.to_string(), "rate limited");

        let err = interpret_body(200, r#"{"error": "token expired"}"#).unwrap_err();
        assert_eq!(err.to_string(), "token expired");
    }

    #[test]
    fn unparseable_error_page_reports_status() {
        let err = interpret_body(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, FetchError::Http(502));
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn non_2xx_without_message_reports_status() {
        let err = interpret_body(404, "{}").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = interpret_body(200, r#"{"activities": "nope"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("invalid response body"));
    }

    #[test]
    fn success_body_without_stats_shape_is_decode_error() {
        let err = interpret_body(200, r#"{"message":"ok"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = interpret_body(200, "{}").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn whitespace_error_still_fails_the_load() {
        let body = r#"{"activities": [{"date": "2024-01-02", "name": "Easy", "km": 6.2, "min": 35, "gear": "Pegasus"}],
                       "gear_summary": {}, "error": "   "}"#;
        let err = interpret_body(200, body).unwrap_err();
        assert_eq!(err, FetchError::Backend("   ".to_string()));
    }

    #[test]
    fn empty_error_field_is_ignored() {
        let body = r#"{"activities": [], "gear_summary": {}, "error": ""}"#;
        let resp = interpret_body(200, body).unwrap();
        assert!(resp.activities.is_empty());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = StatsClient::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.api_url(), "http://localhost:3000");
    }
}
