//! Per-authorization reconciliation result.
//!
//! A [`ReconciliationResult`] is derived for every authorization record and
//! consumed immediately by the report; it is never persisted.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ComplianceState;

/// One of the two expected events of an exit authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSlot {
    /// The employee leaving the workplace.
    Departure,
    /// The employee coming back.
    Return,
}

/// How the engine arrived at a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The authorization lacked an expected departure or return time.
    MissingExpectedTimes,
    /// The time-clock system had no punches for the employee and date.
    NoPunchSet,
    /// Exactly one interior punch was available and went to the closer slot.
    SingleCandidate {
        /// The slot that received the punch.
        slot: EventSlot,
    },
    /// Departure and return were matched independently to their nearest punch.
    Nearest,
    /// The record was malformed and degraded to a conservative result.
    Degraded,
}

/// The outcome of reconciling one authorization against its punches.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::models::{ComplianceState, MatchStrategy, ReconciliationResult};
///
/// let result = ReconciliationResult::not_punched(MatchStrategy::NoPunchSet);
/// assert_eq!(result.departure_state, ComplianceState::NotPunched);
/// assert_eq!(result.counted_states().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// The punch matched to the expected departure, if any.
    pub departure_punch: Option<NaiveTime>,
    /// The punch matched to the expected return, if any.
    pub return_punch: Option<NaiveTime>,
    /// Compliance of the departure event.
    pub departure_state: ComplianceState,
    /// Compliance of the return event.
    pub return_state: ComplianceState,
    /// Signed minutes between matched and expected departure (positive = late).
    pub departure_deviation_minutes: Option<Decimal>,
    /// Signed minutes between matched and expected return (positive = late).
    pub return_deviation_minutes: Option<Decimal>,
    /// How the result was produced.
    pub strategy: MatchStrategy,
}

impl ReconciliationResult {
    /// A result with no matched punches and both events `NotPunched`.
    pub fn not_punched(strategy: MatchStrategy) -> Self {
        Self {
            departure_punch: None,
            return_punch: None,
            departure_state: ComplianceState::NotPunched,
            return_state: ComplianceState::NotPunched,
            departure_deviation_minutes: None,
            return_deviation_minutes: None,
            strategy,
        }
    }

    /// Returns the matched punch for a slot.
    pub fn punch(&self, slot: EventSlot) -> Option<NaiveTime> {
        match slot {
            EventSlot::Departure => self.departure_punch,
            EventSlot::Return => self.return_punch,
        }
    }

    /// Returns the compliance state for a slot.
    pub fn state(&self, slot: EventSlot) -> ComplianceState {
        match slot {
            EventSlot::Departure => self.departure_state,
            EventSlot::Return => self.return_state,
        }
    }

    /// The states that feed employee statistics.
    ///
    /// A single-candidate result only evaluated the slot that received the
    /// punch; every other result evaluated both slots.
    pub fn counted_states(&self) -> Vec<ComplianceState> {
        match self.strategy {
            MatchStrategy::SingleCandidate { slot } => vec![self.state(slot)],
            _ => vec![self.departure_state, self.return_state],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_punched_has_no_matches() {
        let result = ReconciliationResult::not_punched(MatchStrategy::MissingExpectedTimes);
        assert!(result.departure_punch.is_none());
        assert!(result.return_punch.is_none());
        assert_eq!(result.return_state, ComplianceState::NotPunched);
        assert_eq!(result.strategy, MatchStrategy::MissingExpectedTimes);
    }

    #[test]
    fn test_counted_states_single_candidate() {
        let mut result = ReconciliationResult::not_punched(MatchStrategy::SingleCandidate {
            slot: EventSlot::Departure,
        });
        result.departure_punch = NaiveTime::from_hms_opt(12, 10, 0);
        result.departure_state = ComplianceState::OnTime;

        assert_eq!(result.counted_states(), vec![ComplianceState::OnTime]);
    }

    #[test]
    fn test_slot_accessors() {
        let mut result = ReconciliationResult::not_punched(MatchStrategy::Nearest);
        result.return_punch = NaiveTime::from_hms_opt(13, 10, 0);
        result.return_state = ComplianceState::Warning;

        assert_eq!(result.punch(EventSlot::Return), NaiveTime::from_hms_opt(13, 10, 0));
        assert_eq!(result.punch(EventSlot::Departure), None);
        assert_eq!(result.state(EventSlot::Return), ComplianceState::Warning);
    }

    #[test]
    fn test_strategy_serialization() {
        let strategy = MatchStrategy::SingleCandidate {
            slot: EventSlot::Return,
        };
        assert_eq!(
            serde_json::to_string(&strategy).unwrap(),
            r#"{"kind":"single_candidate","slot":"return"}"#
        );
        assert_eq!(
            serde_json::to_string(&MatchStrategy::Nearest).unwrap(),
            r#"{"kind":"nearest"}"#
        );
    }
}
