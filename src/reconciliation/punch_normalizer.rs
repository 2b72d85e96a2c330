//! Punch normalization.
//!
//! Turns the raw slot row of a [`PunchSet`] into the plain sequence of valid
//! times the matcher works on.

use chrono::NaiveTime;

use crate::models::{PunchSet, RawPunch};

/// Parses one raw punch value.
///
/// Text at least eight characters long is read as `HH:MM:SS`, shorter text as
/// `HH:MM`. Surrounding whitespace is ignored. Returns `None` for anything
/// that does not parse.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::models::RawPunch;
/// use exit_compliance_engine::reconciliation::parse_punch;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_punch(&RawPunch::from("12:05")), NaiveTime::from_hms_opt(12, 5, 0));
/// assert_eq!(parse_punch(&RawPunch::from("abc")), None);
/// ```
pub fn parse_punch(raw: &RawPunch) -> Option<NaiveTime> {
    match raw {
        RawPunch::Time(time) => Some(*time),
        RawPunch::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            let format = if text.len() >= 8 { "%H:%M:%S" } else { "%H:%M" };
            NaiveTime::parse_from_str(text, format).ok()
        }
    }
}

/// Normalizes raw slot values into valid times.
///
/// Order is preserved exactly as given and duplicates are kept. Empty and
/// unparseable slots are dropped without error.
pub fn normalize_slots(slots: &[Option<RawPunch>]) -> Vec<NaiveTime> {
    slots.iter().flatten().filter_map(parse_punch).collect()
}

/// Normalizes the bounded slots of a punch set.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::models::PunchSet;
/// use exit_compliance_engine::reconciliation::normalize_punches;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let set = PunchSet::from_text(
///     "4512873",
///     NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
///     &[Some("07:05:00"), Some("abc"), None, Some("15:00")],
/// );
/// assert_eq!(
///     normalize_punches(&set),
///     vec![
///         NaiveTime::from_hms_opt(7, 5, 0).unwrap(),
///         NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     ]
/// );
/// ```
pub fn normalize_punches(set: &PunchSet) -> Vec<NaiveTime> {
    normalize_slots(set.bounded_slots())
}
