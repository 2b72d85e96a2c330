//! Punch set model.
//!
//! Punches are read-only clock-terminal events supplied by the external
//! time-clock system, one fixed-width row of slots per employee and date.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The number of punch slots the time-clock export provides per day.
pub const MAX_PUNCH_SLOTS: usize = 10;

/// A raw punch value as delivered by the time-clock system.
///
/// Exports usually carry text (`"07:58:12"`, `"12:05"`), but callers that
/// already hold typed times can pass them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPunch {
    /// A textual time-of-day, possibly malformed.
    Text(String),
    /// An already-typed time-of-day.
    Time(NaiveTime),
}

impl From<&str> for RawPunch {
    fn from(value: &str) -> Self {
        RawPunch::Text(value.to_string())
    }
}

impl From<NaiveTime> for RawPunch {
    fn from(value: NaiveTime) -> Self {
        RawPunch::Time(value)
    }
}

/// The punches recorded for one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchSet {
    /// The employee the punches belong to.
    pub employee_id: String,
    /// The date the punches were recorded on.
    pub date: NaiveDate,
    /// Raw slot values in terminal order. Only the first
    /// [`MAX_PUNCH_SLOTS`] entries are considered.
    #[serde(default)]
    pub slots: Vec<Option<RawPunch>>,
}

impl PunchSet {
    /// Builds a punch set from textual slot values, `None` marking an empty slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use exit_compliance_engine::models::PunchSet;
    /// use chrono::NaiveDate;
    ///
    /// let set = PunchSet::from_text(
    ///     "4512873",
    ///     NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
    ///     &[Some("07:05"), Some("12:02"), None, Some("15:00")],
    /// );
    /// assert_eq!(set.slots.len(), 4);
    /// ```
    pub fn from_text(employee_id: &str, date: NaiveDate, values: &[Option<&str>]) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            date,
            slots: values.iter().map(|v| v.map(RawPunch::from)).collect(),
        }
    }

    /// Returns the slots the time-clock export can actually hold.
    pub fn bounded_slots(&self) -> &[Option<RawPunch>] {
        let end = self.slots.len().min(MAX_PUNCH_SLOTS);
        &self.slots[..end]
    }
}
