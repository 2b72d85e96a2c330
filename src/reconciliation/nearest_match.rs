//! Nearest-punch matching.
//!
//! This module finds the punch closest to an expected time, optionally
//! restricted to the interior punches of the day.

use chrono::{Duration, NaiveDate, NaiveTime};

/// Default matching window around an expected time, in minutes.
pub const DEFAULT_MATCH_WINDOW_MINUTES: i64 = 60;

/// Absolute distance between two times of day.
///
/// Both times are placed on the same arbitrary calendar date before
/// subtracting, so there is no wraparound at midnight.
pub fn time_distance(a: NaiveTime, b: NaiveTime) -> Duration {
    signed_offset(a, b).abs()
}

/// Signed offset of `actual` from `expected` on a shared reference date.
///
/// Positive when `actual` is later than `expected`.
pub fn signed_offset(expected: NaiveTime, actual: NaiveTime) -> Duration {
    let day = NaiveDate::default();
    day.and_time(actual) - day.and_time(expected)
}

/// Returns the interior punches of a day.
///
/// The punches are sorted and the first and last are dropped, as they are the
/// ordinary clock-in and clock-out. Two or fewer punches have no interior.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::reconciliation::interior_punches;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// assert_eq!(
///     interior_punches(&[t(15, 0), t(7, 0), t(12, 5), t(12, 1)]),
///     vec![t(12, 1), t(12, 5)]
/// );
/// assert!(interior_punches(&[t(7, 0), t(15, 0)]).is_empty());
/// ```
pub fn interior_punches(punches: &[NaiveTime]) -> Vec<NaiveTime> {
    if punches.len() <= 2 {
        return Vec::new();
    }
    let mut sorted = punches.to_vec();
    sorted.sort();
    sorted[1..sorted.len() - 1].to_vec()
}

/// Finds the candidate closest to `target` within `window`.
///
/// # Arguments
///
/// * `target` - The expected time; `None` never matches
/// * `candidates` - Punch times in the order they should be scanned
/// * `window` - Candidates further than this from `target` are ignored
/// * `trim_extremes` - Scan only the interior punches (see [`interior_punches`])
///
/// # Behavior
///
/// - Ties go to the candidate scanned last. With `trim_extremes` the interior
///   is sorted, so that is the chronologically later punch.
/// - A candidate exactly `window` away still qualifies.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::reconciliation::find_nearest;
/// use chrono::{Duration, NaiveTime};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let punches = [t(7, 5), t(12, 2), t(13, 10), t(15, 0)];
///
/// assert_eq!(
///     find_nearest(Some(t(12, 0)), &punches, Duration::minutes(60), true),
///     Some(t(12, 2))
/// );
/// ```
pub fn find_nearest(
    target: Option<NaiveTime>,
    candidates: &[NaiveTime],
    window: Duration,
    trim_extremes: bool,
) -> Option<NaiveTime> {
    let target = target?;
    if candidates.is_empty() {
        return None;
    }

    let pool = if trim_extremes {
        let interior = interior_punches(candidates);
        if interior.is_empty() {
            return None;
        }
        interior
    } else {
        candidates.to_vec()
    };

    let mut best = None;
    let mut best_distance = window;
    for candidate in pool {
        let distance = time_distance(candidate, target);
        if distance <= best_distance {
            best_distance = distance;
            best = Some(candidate);
        }
    }
    best
}
