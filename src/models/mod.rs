//! Core data models for the exit compliance engine.
//!
//! This module contains the records the engine consumes (authorizations and
//! punch sets) and the values it produces (per-record results, display rows
//! and per-employee statistics).

mod authorization;
mod compliance;
mod punch;
mod reconciliation_result;
mod report;

pub use authorization::AuthorizationRecord;
pub use compliance::ComplianceState;
pub use punch::{MAX_PUNCH_SLOTS, PunchSet, RawPunch};
pub use reconciliation_result::{EventSlot, MatchStrategy, ReconciliationResult};
pub use report::{ComplianceReport, EmployeeStats, ReportRow};
