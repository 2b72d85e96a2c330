//! Exit authorization model.
//!
//! An authorization is an employee's request to leave the workplace during a
//! shift and come back, with the expected departure and return times.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// An exit authorization filed by an employee for one calendar date.
///
/// One employee may file several authorizations for the same date; each one
/// is reconciled independently. The engine never mutates these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRecord {
    /// Unique identifier for the authorization.
    pub id: String,
    /// Stable identifier of the employee who filed it.
    pub employee_id: String,
    /// Display name of the employee, already joined by the data layer.
    #[serde(default)]
    pub employee_name: String,
    /// The date the exit applies to.
    pub date: NaiveDate,
    /// When the employee expects to leave.
    pub expected_departure: Option<NaiveTime>,
    /// When the employee expects to be back.
    pub expected_return: Option<NaiveTime>,
    /// Free-text reason for leaving.
    #[serde(default)]
    pub reason: String,
    /// Free-text destination.
    #[serde(default)]
    pub destination: String,
    /// Whether an administrator has approved the request.
    #[serde(default)]
    pub approved: bool,
}

impl AuthorizationRecord {
    /// Returns both expected times when the record carries them.
    ///
    /// # Examples
    ///
    /// ```
    /// use exit_compliance_engine::models::AuthorizationRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let record = AuthorizationRecord {
    ///     id: "auth_001".to_string(),
    ///     employee_id: "4512873".to_string(),
    ///     employee_name: "Ana Benitez".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
    ///     expected_departure: NaiveTime::from_hms_opt(12, 0, 0),
    ///     expected_return: None,
    ///     reason: "Bank".to_string(),
    ///     destination: "Downtown".to_string(),
    ///     approved: false,
    /// };
    /// assert!(record.expected_times().is_none());
    /// ```
    pub fn expected_times(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((self.expected_departure?, self.expected_return?))
    }

    /// Returns true while the request is still awaiting approval.
    pub fn is_pending(&self) -> bool {
        !self.approved
    }
}
