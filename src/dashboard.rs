//! Dashboard state: request controller + view selector + derived views
//!
//! This is the single owner of everything the presentation layer may read.
//! Front-ends drive it only through the operations below and read it only
//! through [`Dashboard::snapshot`]; no field is reachable directly.

use crate::controller::{LoadTicket, RequestController, RequestStatus, Resolution};
use crate::stats::{Activity, DerivedViews, FetchError, GearRow, StatsResponse, Totals, YearOrder, YearRow};
use crate::tabs::{Tab, ViewSelector};
use chrono::NaiveDate;
use serde::Serialize;

/// Coarse request state for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Idle,
    Loading,
    Success,
    Failed,
}

impl StatusKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Idle => "idle",
            StatusKind::Loading => "loading",
            StatusKind::Success => "ready",
            StatusKind::Failed => "error",
        }
    }
}

/// Everything a render pass may consume
///
/// Borrowed from the dashboard, so it is cheap to take one per frame.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub status: StatusKind,
    pub error: Option<&'a str>,
    pub totals: Totals,
    pub gear: &'a [GearRow],
    pub yearly: &'a [YearRow],
    pub runs: &'a [Activity],
    pub tab: Tab,
}

impl DashboardSnapshot<'_> {
    /// True when there is data to draw (success, even if empty)
    pub fn has_data(&self) -> bool {
        self.status == StatusKind::Success
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    controller: RequestController,
    selector: ViewSelector,
    year_order: YearOrder,
    /// Present only while the controller is in `Success`
    views: Option<DerivedViews>,
}

impl Dashboard {
    pub fn new(date_range_start: NaiveDate, year_order: YearOrder) -> Self {
        Self {
            controller: RequestController::new(date_range_start),
            selector: ViewSelector::default(),
            year_order,
            views: None,
        }
    }

    pub fn date_range_start(&self) -> NaiveDate {
        self.controller.date_range_start()
    }

    pub fn all_time(&self) -> bool {
        self.controller.all_time()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    pub fn tab(&self) -> Tab {
        self.selector.current()
    }

    pub fn set_date_range_start(&mut self, date: NaiveDate) {
        self.controller.set_date_range_start(date);
    }

    pub fn set_all_time(&mut self, all_time: bool) {
        self.controller.set_all_time(all_time);
    }

    pub fn toggle_all_time(&mut self) {
        let all_time = !self.controller.all_time();
        self.controller.set_all_time(all_time);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.selector.select_tab(tab);
    }

    pub fn next_tab(&mut self) {
        self.selector.next_tab();
    }

    pub fn prev_tab(&mut self) {
        self.selector.prev_tab();
    }

    /// Begin a load; derived views are dropped immediately
    pub fn load(&mut self) -> LoadTicket {
        self.views = None;
        self.controller.load()
    }

    /// Feed back a fetch outcome and rebuild derived views if it was applied
    pub fn resolve(
        &mut self,
        ticket: LoadTicket,
        result: Result<StatsResponse, FetchError>,
    ) -> Resolution {
        let resolution = self.controller.resolve(ticket.token, result);
        if resolution == Resolution::Applied {
            self.views = self
                .controller
                .response()
                .map(|response| DerivedViews::from_response(response, self.year_order));
        }
        resolution
    }

    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        let status = match self.controller.status() {
            RequestStatus::Idle => StatusKind::Idle,
            RequestStatus::Loading => StatusKind::Loading,
            RequestStatus::Success(_) => StatusKind::Success,
            RequestStatus::Failed(_) => StatusKind::Failed,
        };

        match &self.views {
            Some(views) => DashboardSnapshot {
                status,
                error: self.controller.error(),
                totals: views.totals,
                gear: &views.gear,
                yearly: &views.yearly,
                runs: &views.runs,
                tab: self.selector.current(),
            },
            None => DashboardSnapshot {
                status,
                error: self.controller.error(),
                totals: Totals::default(),
                gear: &[],
                yearly: &[],
                runs: &[],
                tab: self.selector.current(),
            },
        }
    }
}
