//! Report generation over a date range.
//!
//! This module walks the authorizations of a report in display order,
//! reconciles each one, and accumulates per-employee statistics.

use std::collections::HashMap;
use std::fmt::{Display, Write};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{
    DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, DisplayConfig, ReconciliationConfig,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuthorizationRecord, ComplianceReport, EmployeeStats, ReconciliationResult, ReportRow,
};

use super::orchestrator::reconcile_authorization;
use super::punch_source::PunchSource;
use super::used_punches::UsedPunchTracker;

/// The audience a report is ordered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportView {
    /// Newest date first, then by expected departure.
    #[default]
    Admin,
    /// Newest date first; same-day records keep their supplied order.
    Employee,
}

/// A validated report request.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::reconciliation::ReportQuery;
/// use chrono::NaiveDate;
///
/// let feb = |d| NaiveDate::from_ymd_opt(2026, 2, d).unwrap();
/// assert!(ReportQuery::new(feb(1), feb(28)).is_ok());
/// assert!(ReportQuery::new(feb(28), feb(1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    from: NaiveDate,
    to: NaiveDate,
    employee_id: Option<String>,
    view: ReportView,
}

impl ReportQuery {
    /// Creates a query over the inclusive range `from..=to`.
    ///
    /// Returns `InvalidDateRange` when `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        if from > to {
            return Err(EngineError::InvalidDateRange { from, to });
        }
        Ok(Self {
            from,
            to,
            employee_id: None,
            view: ReportView::Admin,
        })
    }

    /// Restricts the report to one employee.
    pub fn for_employee(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    /// Sets the ordering view.
    pub fn with_view(mut self, view: ReportView) -> Self {
        self.view = view;
        self
    }

    /// Start of the range.
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    /// End of the range.
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// The employee filter, if any.
    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    /// The ordering view.
    pub fn view(&self) -> ReportView {
        self.view
    }

    fn includes(&self, record: &AuthorizationRecord) -> bool {
        record.date >= self.from
            && record.date <= self.to
            && self
                .employee_id
                .as_deref()
                .is_none_or(|id| id == record.employee_id)
    }
}

/// Generates a compliance report.
///
/// Records outside the query are skipped. The rest are ordered for the
/// query's view and reconciled in that order against a tracker owned by this
/// call, so earlier authorizations on a date get first pick of its punches.
///
/// # Arguments
///
/// * `records` - Authorizations supplied by the data layer, in any order
/// * `punches` - Punch sets for the employees and dates involved
/// * `query` - Date range, optional employee filter and view
/// * `config` - Matching, classification and display settings
///
/// # Returns
///
/// One row per included authorization, and per-employee statistics in order
/// of first appearance. Every evaluated event adds one to `total`; an
/// authorization resolved from a single interior punch evaluates only the
/// event that punch was assigned to.
///
/// The configuration is not required to be validated. A display format
/// chrono cannot render falls back to the default format.
pub fn generate_report<S: PunchSource + ?Sized>(
    records: &[AuthorizationRecord],
    punches: &S,
    query: &ReportQuery,
    config: &ReconciliationConfig,
) -> ComplianceReport {
    if let Err(err) = config.validate() {
        warn!(error = %err, "Generating report with an invalid configuration");
    }

    let mut selected: Vec<&AuthorizationRecord> =
        records.iter().filter(|r| query.includes(r)).collect();
    order_for_view(&mut selected, query.view());

    let mut tracker = UsedPunchTracker::new();
    let mut rows = Vec::with_capacity(selected.len());
    let mut employee_stats: Vec<EmployeeStats> = Vec::new();
    let mut stats_index: HashMap<String, usize> = HashMap::new();

    for record in selected {
        let punch_set = punches.punch_set(&record.employee_id, record.date);
        let result = reconcile_authorization(record, punch_set, &mut tracker, config);

        let position = *stats_index
            .entry(record.employee_id.clone())
            .or_insert_with(|| {
                employee_stats.push(EmployeeStats::new(
                    &record.employee_id,
                    &record.employee_name,
                ));
                employee_stats.len() - 1
            });
        for state in result.counted_states() {
            employee_stats[position].record(state);
        }

        rows.push(build_row(record, result, &config.display));
    }

    info!(
        from = %query.from(),
        to = %query.to(),
        rows = rows.len(),
        employees = employee_stats.len(),
        punches_used = tracker.len(),
        "Compliance report generated"
    );

    ComplianceReport {
        rows,
        employee_stats,
    }
}

fn order_for_view(records: &mut [&AuthorizationRecord], view: ReportView) {
    match view {
        ReportView::Admin => records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| departure_key(a).cmp(&departure_key(b)))
        }),
        ReportView::Employee => records.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// Records without an expected departure sort after those with one.
fn departure_key(record: &AuthorizationRecord) -> (bool, Option<NaiveTime>) {
    (record.expected_departure.is_none(), record.expected_departure)
}

fn build_row(
    record: &AuthorizationRecord,
    result: ReconciliationResult,
    display: &DisplayConfig,
) -> ReportRow {
    let time_or_sentinel = |time: Option<NaiveTime>| match time {
        Some(t) => render(t.format(&display.time_format))
            .unwrap_or_else(|| t.format(DEFAULT_TIME_FORMAT).to_string()),
        None => display.missing_punch.clone(),
    };
    let display_date = render(record.date.format(&display.date_format))
        .unwrap_or_else(|| record.date.format(DEFAULT_DATE_FORMAT).to_string());

    ReportRow {
        authorization_id: record.id.clone(),
        employee_id: record.employee_id.clone(),
        employee_name: record.employee_name.clone(),
        date: record.date,
        display_date,
        reason: record.reason.clone(),
        destination: record.destination.clone(),
        approved: record.approved,
        expected_departure: time_or_sentinel(record.expected_departure),
        expected_return: time_or_sentinel(record.expected_return),
        matched_departure: time_or_sentinel(result.departure_punch),
        matched_return: time_or_sentinel(result.return_punch),
        result,
    }
}

/// Formats into a fresh string; `None` when chrono rejects the format.
fn render(value: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", value).ok()?;
    Some(out)
}
