//! Report output models.
//!
//! This module contains the display rows and per-employee statistics produced
//! by a report run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ComplianceState, ReconciliationResult};

/// Running compliance counters for one employee within a report run.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::models::{ComplianceState, EmployeeStats};
/// use rust_decimal::Decimal;
///
/// let mut stats = EmployeeStats::new("4512873", "Ana Benitez");
/// stats.record(ComplianceState::OnTime);
/// stats.record(ComplianceState::NotPunched);
///
/// assert_eq!(stats.total, 2);
/// assert_eq!(stats.violation, 1);
/// assert_eq!(stats.compliance_rate(), Decimal::new(5000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStats {
    /// Display name of the employee.
    pub name: String,
    /// Stable identifier of the employee.
    pub employee_id: String,
    /// Number of evaluated events.
    pub total: u32,
    /// Events classified `OnTime`.
    pub compliant: u32,
    /// Events classified `Warning`.
    pub warning: u32,
    /// Events classified `Violation` or `NotPunched`.
    pub violation: u32,
}

impl EmployeeStats {
    /// Creates zeroed counters for an employee.
    pub fn new(employee_id: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            employee_id: employee_id.to_string(),
            total: 0,
            compliant: 0,
            warning: 0,
            violation: 0,
        }
    }

    /// Counts one evaluated event.
    pub fn record(&mut self, state: ComplianceState) {
        self.total += 1;
        match state {
            ComplianceState::OnTime => self.compliant += 1,
            ComplianceState::Warning => self.warning += 1,
            ComplianceState::Violation | ComplianceState::NotPunched => self.violation += 1,
        }
    }

    /// Percentage of evaluated events that were on time, to two decimal places.
    pub fn compliance_rate(&self) -> Decimal {
        if self.total == 0 {
            return Decimal::ZERO;
        }
        (Decimal::from(self.compliant) * Decimal::ONE_HUNDRED / Decimal::from(self.total))
            .round_dp(2)
    }
}

/// One authorization as shown in a report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The authorization this row was derived from.
    pub authorization_id: String,
    /// Stable identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// The date of the authorization.
    pub date: NaiveDate,
    /// The date formatted for display.
    pub display_date: String,
    /// Free-text reason.
    pub reason: String,
    /// Free-text destination.
    pub destination: String,
    /// Whether the authorization was approved.
    pub approved: bool,
    /// Expected departure formatted for display.
    pub expected_departure: String,
    /// Expected return formatted for display.
    pub expected_return: String,
    /// Matched departure punch, or the missing-punch sentinel.
    pub matched_departure: String,
    /// Matched return punch, or the missing-punch sentinel.
    pub matched_return: String,
    /// The typed result behind the display strings; its fields sit inline in JSON.
    #[serde(flatten)]
    pub result: ReconciliationResult,
}

/// The complete output of one report run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// One row per authorization, in report order.
    pub rows: Vec<ReportRow>,
    /// Per-employee counters, ordered by first appearance.
    pub employee_stats: Vec<EmployeeStats>,
}

impl ComplianceReport {
    /// Looks up the statistics for one employee.
    pub fn stats_for(&self, employee_id: &str) -> Option<&EmployeeStats> {
        self.employee_stats
            .iter()
            .find(|s| s.employee_id == employee_id)
    }
}
