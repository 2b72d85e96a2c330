//! Access to punch sets supplied by the time-clock system.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::PunchSet;

/// Supplies the punch set for an employee and date.
///
/// Implemented by whatever layer materializes time-clock data before a report
/// run. The engine only reads through this trait.
pub trait PunchSource {
    /// Returns the punches for `employee_id` on `date`, if any were recorded.
    fn punch_set(&self, employee_id: &str, date: NaiveDate) -> Option<&PunchSet>;
}

/// An in-memory [`PunchSource`] keyed by employee and date.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::models::PunchSet;
/// use exit_compliance_engine::reconciliation::{PunchIndex, PunchSource};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
/// let index = PunchIndex::new(vec![PunchSet::from_text("4512873", date, &[Some("07:05")])]);
///
/// assert!(index.punch_set("4512873", date).is_some());
/// assert!(index.punch_set("4512873", date.succ_opt().unwrap()).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PunchIndex {
    sets: HashMap<(String, NaiveDate), PunchSet>,
}

impl PunchIndex {
    /// Indexes punch sets. A later set for the same employee and date replaces an earlier one.
    pub fn new(sets: impl IntoIterator<Item = PunchSet>) -> Self {
        let sets = sets
            .into_iter()
            .map(|set| ((set.employee_id.clone(), set.date), set))
            .collect();
        Self { sets }
    }

    /// Number of indexed punch sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if no punch sets are indexed.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl PunchSource for PunchIndex {
    fn punch_set(&self, employee_id: &str, date: NaiveDate) -> Option<&PunchSet> {
        self.sets.get(&(employee_id.to_string(), date))
    }
}
