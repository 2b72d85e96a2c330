//! Request types for the exit compliance API.
//!
//! This module defines the JSON request structures for the `/reconcile` endpoint.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{AuthorizationRecord, PunchSet, RawPunch};
use crate::reconciliation::ReportView;

/// Request body for the `/reconcile` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// First date of the report (inclusive).
    pub from: NaiveDate,
    /// Last date of the report (inclusive).
    pub to: NaiveDate,
    /// Restrict the report to one employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Ordering of the report rows.
    #[serde(default)]
    pub view: ReportView,
    /// Authorizations fetched for the range.
    #[serde(default)]
    pub authorizations: Vec<AuthorizationRequest>,
    /// Punch sets for the employees and dates involved.
    #[serde(default)]
    pub punches: Vec<PunchSetRequest>,
}

/// Authorization information in a reconcile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    /// Unique identifier for the authorization.
    pub id: String,
    /// The employee who filed it.
    pub employee_id: String,
    /// Display name of the employee.
    #[serde(default)]
    pub employee_name: String,
    /// The date of the exit.
    pub date: NaiveDate,
    /// Expected departure time.
    #[serde(default)]
    pub expected_departure: Option<NaiveTime>,
    /// Expected return time.
    #[serde(default)]
    pub expected_return: Option<NaiveTime>,
    /// Reason for leaving.
    #[serde(default)]
    pub reason: String,
    /// Destination.
    #[serde(default)]
    pub destination: String,
    /// Whether the authorization was approved.
    #[serde(default)]
    pub approved: bool,
}

/// Punch information in a reconcile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchSetRequest {
    /// The employee the punches belong to.
    pub employee_id: String,
    /// The date the punches were recorded.
    pub date: NaiveDate,
    /// Raw slot values as exported by the time clock; `null` for empty slots.
    #[serde(default)]
    pub slots: Vec<Option<String>>,
}

impl From<AuthorizationRequest> for AuthorizationRecord {
    fn from(req: AuthorizationRequest) -> Self {
        AuthorizationRecord {
            id: req.id,
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            date: req.date,
            expected_departure: req.expected_departure,
            expected_return: req.expected_return,
            reason: req.reason,
            destination: req.destination,
            approved: req.approved,
        }
    }
}

impl From<PunchSetRequest> for PunchSet {
    fn from(req: PunchSetRequest) -> Self {
        PunchSet {
            employee_id: req.employee_id,
            date: req.date,
            slots: req
                .slots
                .into_iter()
                .map(|slot| slot.map(RawPunch::Text))
                .collect(),
        }
    }
}
