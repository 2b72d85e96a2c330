//! Compliance states assigned to expected exit events.

use serde::{Deserialize, Serialize};

/// How well a punch matched an expected departure or return time.
///
/// This is a closed set; labels and colours belong to the presentation layer.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::models::ComplianceState;
///
/// assert_eq!(ComplianceState::OnTime.to_string(), "on_time");
/// assert!(ComplianceState::NotPunched.counts_as_violation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceState {
    /// The punch was within the warning threshold, or an early return.
    OnTime,
    /// The punch deviated by at least the warning threshold.
    Warning,
    /// The punch deviated by at least the violation threshold.
    Violation,
    /// No punch could be matched to the event.
    NotPunched,
}

impl ComplianceState {
    /// Returns true for states that land in the `violation` statistics bucket.
    pub fn counts_as_violation(self) -> bool {
        matches!(self, ComplianceState::Violation | ComplianceState::NotPunched)
    }
}

impl std::fmt::Display for ComplianceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceState::OnTime => write!(f, "on_time"),
            ComplianceState::Warning => write!(f, "warning"),
            ComplianceState::Violation => write!(f, "violation"),
            ComplianceState::NotPunched => write!(f, "not_punched"),
        }
    }
}
