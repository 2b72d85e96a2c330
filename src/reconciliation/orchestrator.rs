//! Per-authorization reconciliation.
//!
//! This module assigns an employee's punches to the expected departure and
//! return of one authorization and classifies each assignment. Punches taken
//! by earlier authorizations on the same date are skipped.

use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::config::ReconciliationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuthorizationRecord, EventSlot, MatchStrategy, PunchSet, ReconciliationResult,
};

use super::classifier::{classify, deviation_minutes};
use super::nearest_match::{find_nearest, interior_punches, time_distance};
use super::punch_normalizer::normalize_punches;
use super::used_punches::UsedPunchTracker;

/// Reconciles one authorization against the employee's punches for that date.
///
/// This never fails. A malformed record is logged and yields a result with no
/// matches and both events `NotPunched`, so a batch can always continue.
///
/// # Arguments
///
/// * `record` - The authorization to reconcile
/// * `punches` - The employee's punch set for the record's date, if any
/// * `tracker` - Punches consumed so far in this report run; updated in place
/// * `config` - Matching window and classification thresholds
///
/// # Behavior
///
/// 1. Missing expected times or a missing punch set yield `NotPunched` for both events.
/// 2. Punches already in `tracker` are removed from consideration.
/// 3. If exactly one interior punch remains it goes to whichever expected time
///    it is closer to (departure on a tie); the other event stays unmatched.
/// 4. Otherwise departure is matched first, then return from what is left.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::config::ReconciliationConfig;
/// use exit_compliance_engine::models::{AuthorizationRecord, ComplianceState, PunchSet};
/// use exit_compliance_engine::reconciliation::{reconcile_authorization, UsedPunchTracker};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
/// let record = AuthorizationRecord {
///     id: "auth_001".to_string(),
///     employee_id: "4512873".to_string(),
///     employee_name: "Ana Benitez".to_string(),
///     date,
///     expected_departure: NaiveTime::from_hms_opt(12, 0, 0),
///     expected_return: NaiveTime::from_hms_opt(13, 0, 0),
///     reason: String::new(),
///     destination: String::new(),
///     approved: true,
/// };
/// let punches = PunchSet::from_text(
///     "4512873",
///     date,
///     &[Some("07:05"), Some("12:02"), Some("13:10"), Some("15:00")],
/// );
///
/// let mut tracker = UsedPunchTracker::new();
/// let result = reconcile_authorization(
///     &record,
///     Some(&punches),
///     &mut tracker,
///     &ReconciliationConfig::default(),
/// );
///
/// assert_eq!(result.departure_punch, NaiveTime::from_hms_opt(12, 2, 0));
/// assert_eq!(result.return_punch, NaiveTime::from_hms_opt(13, 10, 0));
/// assert_eq!(result.departure_state, ComplianceState::OnTime);
/// assert_eq!(result.return_state, ComplianceState::OnTime);
/// ```
pub fn reconcile_authorization(
    record: &AuthorizationRecord,
    punches: Option<&PunchSet>,
    tracker: &mut UsedPunchTracker,
    config: &ReconciliationConfig,
) -> ReconciliationResult {
    match try_reconcile(record, punches, tracker, config) {
        Ok(result) => result,
        Err(err) => {
            warn!(
                authorization_id = %record.id,
                employee_id = %record.employee_id,
                date = %record.date,
                error = %err,
                "Authorization degraded to not punched"
            );
            ReconciliationResult::not_punched(MatchStrategy::Degraded)
        }
    }
}

fn try_reconcile(
    record: &AuthorizationRecord,
    punches: Option<&PunchSet>,
    tracker: &mut UsedPunchTracker,
    config: &ReconciliationConfig,
) -> EngineResult<ReconciliationResult> {
    validate_record(record, punches)?;

    let Some((expected_departure, expected_return)) = record.expected_times() else {
        debug!(authorization_id = %record.id, "Authorization has no expected times");
        return Ok(ReconciliationResult::not_punched(
            MatchStrategy::MissingExpectedTimes,
        ));
    };

    let Some(punch_set) = punches else {
        debug!(authorization_id = %record.id, "No punches recorded for date");
        return Ok(ReconciliationResult::not_punched(MatchStrategy::NoPunchSet));
    };

    let all_punches = normalize_punches(punch_set);
    let available = tracker.available(&record.employee_id, record.date, &all_punches);

    let candidates = if config.matching.trim_extremes {
        interior_punches(&available)
    } else {
        available.clone()
    };

    if let [only] = candidates.as_slice() {
        return Ok(assign_single_candidate(
            record,
            *only,
            expected_departure,
            expected_return,
            tracker,
            config,
        ));
    }

    Ok(match_nearest(
        record,
        available,
        expected_departure,
        expected_return,
        tracker,
        config,
    ))
}

/// Rejects records whose data cannot be reconciled meaningfully.
fn validate_record(record: &AuthorizationRecord, punches: Option<&PunchSet>) -> EngineResult<()> {
    if record.employee_id.trim().is_empty() {
        return Err(EngineError::InvalidAuthorization {
            authorization_id: record.id.clone(),
            message: "employee id is blank".to_string(),
        });
    }

    if let Some(set) = punches {
        if set.employee_id != record.employee_id || set.date != record.date {
            return Err(EngineError::InvalidAuthorization {
                authorization_id: record.id.clone(),
                message: format!(
                    "punch set for '{}' on {} does not belong to this authorization",
                    set.employee_id, set.date
                ),
            });
        }
    }

    Ok(())
}

fn assign_single_candidate(
    record: &AuthorizationRecord,
    punch: NaiveTime,
    expected_departure: NaiveTime,
    expected_return: NaiveTime,
    tracker: &mut UsedPunchTracker,
    config: &ReconciliationConfig,
) -> ReconciliationResult {
    let slot = if time_distance(punch, expected_departure) <= time_distance(punch, expected_return)
    {
        EventSlot::Departure
    } else {
        EventSlot::Return
    };

    tracker.mark_used(&record.employee_id, record.date, punch);

    let mut result = ReconciliationResult::not_punched(MatchStrategy::SingleCandidate { slot });
    match slot {
        EventSlot::Departure => {
            result.departure_punch = Some(punch);
            result.departure_state =
                classify(expected_departure, Some(punch), false, &config.thresholds);
            result.departure_deviation_minutes = Some(deviation_minutes(expected_departure, punch));
        }
        EventSlot::Return => {
            result.return_punch = Some(punch);
            result.return_state = classify(expected_return, Some(punch), true, &config.thresholds);
            result.return_deviation_minutes = Some(deviation_minutes(expected_return, punch));
        }
    }

    debug!(
        authorization_id = %record.id,
        punch = %punch,
        slot = ?slot,
        "Single interior punch assigned"
    );
    result
}

fn match_nearest(
    record: &AuthorizationRecord,
    mut available: Vec<NaiveTime>,
    expected_departure: NaiveTime,
    expected_return: NaiveTime,
    tracker: &mut UsedPunchTracker,
    config: &ReconciliationConfig,
) -> ReconciliationResult {
    let window = config.matching.window();
    let trim = config.matching.trim_extremes;

    let departure_punch = find_nearest(Some(expected_departure), &available, window, trim);
    if let Some(punch) = departure_punch {
        tracker.mark_used(&record.employee_id, record.date, punch);
        if let Some(i) = available.iter().position(|t| *t == punch) {
            available.remove(i);
        }
    }

    // A duplicate of the departure time still shapes the interior but can't be the return.
    let pool = if trim {
        interior_punches(&available)
    } else {
        available
    };
    let return_candidates: Vec<NaiveTime> = pool
        .into_iter()
        .filter(|t| Some(*t) != departure_punch)
        .collect();
    let return_punch = find_nearest(Some(expected_return), &return_candidates, window, false);
    if let Some(punch) = return_punch {
        tracker.mark_used(&record.employee_id, record.date, punch);
    }

    let result = ReconciliationResult {
        departure_punch,
        return_punch,
        departure_state: classify(expected_departure, departure_punch, false, &config.thresholds),
        return_state: classify(expected_return, return_punch, true, &config.thresholds),
        departure_deviation_minutes: departure_punch
            .map(|punch| deviation_minutes(expected_departure, punch)),
        return_deviation_minutes: return_punch.map(|punch| deviation_minutes(expected_return, punch)),
        strategy: MatchStrategy::Nearest,
    };

    debug!(
        authorization_id = %record.id,
        departure = ?result.departure_punch,
        departure_state = %result.departure_state,
        return_punch = ?result.return_punch,
        return_state = %result.return_state,
        "Authorization reconciled"
    );
    result
}
