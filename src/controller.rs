//! Request lifecycle for the stats fetch
//!
//! The controller owns the date selection and the Idle → Loading →
//! Success/Failed state machine. It never performs I/O itself: [`load`]
//! hands out a [`LoadTicket`] describing the request to issue, and the
//! caller reports the outcome back through [`resolve`].
//!
//! Overlapping loads are allowed. Every ticket carries a sequence token and
//! only the most recently issued one may change state, so a slow response
//! to an older request is dropped even if it arrives last
//! (last-issued-wins).
//!
//! [`load`]: RequestController::load
//! [`resolve`]: RequestController::resolve

use crate::stats::{FetchError, StatsResponse};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

/// Lower bound sent for "all time"
pub fn epoch_min() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// January 1 of the current local year
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(Local::now().year(), 1, 1).unwrap_or_else(epoch_min)
}

/// Where the current request stands
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum RequestStatus {
    Idle,
    Loading,
    Success(StatsResponse),
    Failed(String),
}

/// A request the caller should issue on the controller's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadTicket {
    /// Monotonic sequence number; higher means issued later
    pub token: u64,
    /// Effective `after_date` for this request
    pub after_date: NaiveDate,
}

/// Whether a resolved response changed the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// Superseded by a later `load()` (or already resolved); discarded
    Stale,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestController {
    date_range_start: NaiveDate,
    all_time: bool,
    status: RequestStatus,
    latest_token: u64,
}

impl RequestController {
    pub fn new(date_range_start: NaiveDate) -> Self {
        Self {
            date_range_start,
            all_time: false,
            status: RequestStatus::Idle,
            latest_token: 0,
        }
    }

    pub fn date_range_start(&self) -> NaiveDate {
        self.date_range_start
    }

    pub fn all_time(&self) -> bool {
        self.all_time
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading)
    }

    /// Accepted response, only while in `Success`
    pub fn response(&self) -> Option<&StatsResponse> {
        match &self.status {
            RequestStatus::Success(response) => Some(response),
            _ => None,
        }
    }

    /// Failure text, only while in `Failed`
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Set the lower bound for the next load; an in-flight request is unaffected
    pub fn set_date_range_start(&mut self, date: NaiveDate) {
        self.date_range_start = date;
    }

    /// When set, the next load asks for everything since the epoch
    pub fn set_all_time(&mut self, all_time: bool) {
        self.all_time = all_time;
    }

    /// Lower bound the next `load()` will use
    pub fn effective_after_date(&self) -> NaiveDate {
        if self.all_time {
            epoch_min()
        } else {
            self.date_range_start
        }
    }

    /// Start a new request, dropping any data or error from the previous one
    pub fn load(&mut self) -> LoadTicket {
        self.latest_token += 1;
        self.status = RequestStatus::Loading;

        let ticket = LoadTicket {
            token: self.latest_token,
            after_date: self.effective_after_date(),
        };
        tracing::info!(
            "Loading stats after {} (request #{})",
            ticket.after_date,
            ticket.token
        );
        ticket
    }

    /// Report the outcome of the request identified by `token`
    pub fn resolve(
        &mut self,
        token: u64,
        result: Result<StatsResponse, FetchError>,
    ) -> Resolution {
        if token != self.latest_token || !self.is_loading() {
            tracing::debug!(
                "Discarding response for request #{} (latest is #{})",
                token,
                self.latest_token
            );
            return Resolution::Stale;
        }

        self.status = match result {
            Ok(response) => match response.backend_error() {
                Some(message) => {
                    tracing::warn!("Stats backend reported an error: {}", message);
                    RequestStatus::Failed(message.to_string())
                }
                None => {
                    tracing::info!(
                        "Loaded {} runs and {} gear entries (request #{})",
                        response.activities.len(),
                        response.gear_summary.len(),
                        token
                    );
                    RequestStatus::Success(response)
                }
            },
            Err(e) => {
                tracing::warn!("Stats request #{} failed: {}", token, e);
                RequestStatus::Failed(e.to_string())
            }
        };

        Resolution::Applied
    }
}

impl Default for RequestController {
    fn default() -> Self {
        Self::new(default_start_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Activity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn response_with_run(name: &str) -> StatsResponse {
        StatsResponse {
            activities: vec![Activity {
                date: "2024-04-01".to_string(),
                name: name.to_string(),
                km: 5.0,
                min: 30.0,
                gear: "ShoeA".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn starts_idle() {
        let controller = RequestController::new(date(2024, 1, 1));
        assert_eq!(controller.status(), &RequestStatus::Idle);
        assert!(controller.response().is_none());
        assert!(controller.error().is_none());
    }

    #[test]
    fn default_start_is_january_first() {
        let start = default_start_date();
        assert_eq!((start.month(), start.day()), (1, 1));
        assert_eq!(start.year(), Local::now().year());
    }

    #[test]
    fn load_uses_explicit_date() {
        let mut controller = RequestController::new(date(2024, 3, 15));
        let ticket = controller.load();
        assert_eq!(ticket.after_date, date(2024, 3, 15));
        assert!(controller.is_loading());
    }

    #[test]
    fn all_time_overrides_date() {
        let mut controller = RequestController::new(date(2024, 3, 15));
        controller.set_all_time(true);
        assert_eq!(controller.load().after_date, date(1970, 1, 1));

        controller.set_all_time(false);
        assert_eq!(controller.load().after_date, date(2024, 3, 15));
    }

    #[test]
    fn date_change_during_flight_applies_to_next_load() {
        let mut controller = RequestController::new(date(2024, 1, 1));
        let first = controller.load();
        controller.set_date_range_start(date(2023, 6, 1));

        assert_eq!(first.after_date, date(2024, 1, 1));
        assert!(controller.is_loading());
        assert_eq!(controller.load().after_date, date(2023, 6, 1));
    }

    #[test]
    fn success_stores_response() {
        let mut controller = RequestController::new(date(2024, 1, 1));
        let ticket = controller.load();
        let resolution = controller.resolve(ticket.token, Ok(response_with_run("Tempo")));

        assert_eq!(resolution, Resolution::Applied);
        assert_eq!(controller.response().unwrap().activities[0].name, "Tempo");
    }

    #[test]
    fn backend_error_field_fails_the_load() {
        let mut controller = RequestController::new(date(2024, 1, 1));
        let ticket = controller.load();
        let response = StatsResponse {
            error: Some("rate limited".to_string()),
            ..response_with_run("ignored")
        };
        controller.resolve(ticket.token, Ok(response));

        assert_eq!(
            controller.status(),
            &RequestStatus::Failed("rate limited".to_string())
        );
        assert!(controller.response().is_none());
    }

    #[test]
    fn transport_error_message_is_kept() {
        let mut controller = RequestController::new(date(2024, 1, 1));
        let ticket = controller.load();
        controller.resolve(ticket.token, Err(FetchError::Http(503)));
        assert_eq!(controller.error(), Some("HTTP 503"));
    }

    #[test]
    fn new_load_clears_previous_data_and_error() {
        let mut controller = RequestController::new(date(2024, 1, 1));
        let ticket = controller.load();
        controller.resolve(ticket.token, Ok(response_with_run("a")));
        controller.load();
        assert!(controller.response().is_none());

        let ticket = controller.load();
        controller.resolve(ticket.token, Err(FetchError::Transport("refused".into())));
        controller.load();
        assert!(controller.error().is_none());
    }

    #[test]
    fn older_response_arriving_last_is_discarded() {
        let mut controller = RequestController::new(date(2024, 1, 1));
        let first = controller.load();
        let second = controller.load();

        assert_eq!(
            controller.resolve(second.token, Ok(response_with_run("second"))),
            Resolution::Applied
        );
        assert_eq!(
            controller.resolve(first.token, Ok(response_with_run("first"))),
            Resolution::Stale
        );
        assert_eq!(controller.response().unwrap().activities[0].name, "second");
    }

    #[test]
    fn older_response_arriving_first_does_not_end_loading() {
        let mut controller = RequestController::new(date(2024, 1, 1));
        let first = controller.load();
        let second = controller.load();

        assert_eq!(
            controller.resolve(first.token, Err(FetchError::Http(500))),
            Resolution::Stale
        );
        assert!(controller.is_loading());

        controller.resolve(second.token, Ok(response_with_run("second")));
        assert_eq!(controller.response().unwrap().activities[0].name, "second");
    }

    #[test]
    fn duplicate_resolution_is_ignored() {
        let mut controller = RequestController::new(date(2024, 1, 1));
        let ticket = controller.load();
        controller.resolve(ticket.token, Ok(response_with_run("kept")));
        assert_eq!(
            controller.resolve(ticket.token, Err(FetchError::Http(500))),
            Resolution::Stale
        );
        assert!(controller.response().is_some());
    }

    #[test]
    fn tokens_increase() {
        let mut controller = RequestController::default();
        let a = controller.load();
        let b = controller.load();
        assert!(b.token > a.token);
    }

    #[test]
    fn state_serializes() {
        let mut controller = RequestController::new(date(2024, 2, 1));
        controller.set_all_time(true);
        let json = serde_json::to_value(&controller).unwrap();
        assert_eq!(json["date_range_start"], "2024-02-01");
        assert_eq!(json["all_time"], true);
        assert_eq!(json["status"]["state"], "idle");
    }
}
