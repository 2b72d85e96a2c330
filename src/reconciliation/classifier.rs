//! Compliance classification of matched punches.
//!
//! This module turns the gap between an expected time and the punch matched
//! to it into a [`ComplianceState`].

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::config::ThresholdConfig;
use crate::models::ComplianceState;

use super::nearest_match::{signed_offset, time_distance};

/// Classifies a matched punch against its expected time.
///
/// # Arguments
///
/// * `expected` - The time the employee said the event would happen
/// * `actual` - The matched punch, `None` when nothing matched
/// * `is_return` - Whether the event is the return leg
/// * `thresholds` - Warning and violation thresholds
///
/// # Rules
///
/// - No punch is `NotPunched`.
/// - A return punched strictly before it was expected is always `OnTime`.
/// - Otherwise a deviation of at least `violation_minutes` is a `Violation`,
///   at least `warning_minutes` a `Warning`, anything less `OnTime`.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::config::ThresholdConfig;
/// use exit_compliance_engine::models::ComplianceState;
/// use exit_compliance_engine::reconciliation::classify;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let thresholds = ThresholdConfig::default();
///
/// assert_eq!(classify(t(10, 0), Some(t(8, 0)), true, &thresholds), ComplianceState::OnTime);
/// assert_eq!(classify(t(10, 0), Some(t(8, 0)), false, &thresholds), ComplianceState::Violation);
/// assert_eq!(classify(t(10, 0), None, false, &thresholds), ComplianceState::NotPunched);
/// ```
pub fn classify(
    expected: NaiveTime,
    actual: Option<NaiveTime>,
    is_return: bool,
    thresholds: &ThresholdConfig,
) -> ComplianceState {
    let Some(actual) = actual else {
        return ComplianceState::NotPunched;
    };

    if is_return && actual < expected {
        return ComplianceState::OnTime;
    }

    let deviation = time_distance(actual, expected);
    if deviation >= thresholds.violation() {
        ComplianceState::Violation
    } else if deviation >= thresholds.warning() {
        ComplianceState::Warning
    } else {
        ComplianceState::OnTime
    }
}

/// Signed deviation of `actual` from `expected` in minutes, to two decimal places.
///
/// Positive values mean the punch came after the expected time.
pub fn deviation_minutes(expected: NaiveTime, actual: NaiveTime) -> Decimal {
    let millis = signed_offset(expected, actual).num_milliseconds();
    (Decimal::new(millis, 3) / Decimal::from(60)).round_dp(2)
}
