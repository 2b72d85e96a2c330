//! Tracking of punches already consumed within a report run.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

/// Identifies one punch of one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsedPunchKey {
    /// The employee the punch belongs to.
    pub employee_id: String,
    /// The date of the punch.
    pub date: NaiveDate,
    /// The punch time.
    pub time: NaiveTime,
}

impl UsedPunchKey {
    fn new(employee_id: &str, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            date,
            time,
        }
    }
}

/// The set of punches consumed by earlier authorizations in a report run.
///
/// A punch time may satisfy at most one departure or return across all of an
/// employee's authorizations on a date. Each report run owns a fresh tracker;
/// it must never be shared between runs.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::reconciliation::UsedPunchTracker;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
///
/// let mut tracker = UsedPunchTracker::new();
/// assert!(tracker.mark_used("4512873", date, noon));
/// assert!(!tracker.mark_used("4512873", date, noon));
/// assert!(tracker.is_used("4512873", date, noon));
/// assert!(!tracker.is_used("9000001", date, noon));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UsedPunchTracker {
    used: HashSet<UsedPunchKey>,
}

impl UsedPunchTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a punch as consumed. Returns false if it already was.
    pub fn mark_used(&mut self, employee_id: &str, date: NaiveDate, time: NaiveTime) -> bool {
        self.used.insert(UsedPunchKey::new(employee_id, date, time))
    }

    /// Returns true if the punch has been consumed.
    pub fn is_used(&self, employee_id: &str, date: NaiveDate, time: NaiveTime) -> bool {
        self.used
            .contains(&UsedPunchKey::new(employee_id, date, time))
    }

    /// Returns the punches not yet consumed, in their original order.
    pub fn available(
        &self,
        employee_id: &str,
        date: NaiveDate,
        punches: &[NaiveTime],
    ) -> Vec<NaiveTime> {
        punches
            .iter()
            .copied()
            .filter(|time| !self.is_used(employee_id, date, *time))
            .collect()
    }

    /// Number of consumed punches.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Returns true if nothing has been consumed.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
