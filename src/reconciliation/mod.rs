//! The time-reconciliation engine.
//!
//! This module contains the pieces that turn authorizations and raw punches
//! into classified results: punch normalization, nearest-punch matching,
//! compliance classification, used-punch tracking, per-record orchestration
//! and report aggregation.

mod aggregator;
mod classifier;
mod nearest_match;
mod orchestrator;
mod punch_normalizer;
mod punch_source;
mod used_punches;

pub use aggregator::{ReportQuery, ReportView, generate_report};
pub use classifier::{classify, deviation_minutes};
pub use nearest_match::{
    DEFAULT_MATCH_WINDOW_MINUTES, find_nearest, interior_punches, signed_offset, time_distance,
};
pub use orchestrator::reconcile_authorization;
pub use punch_normalizer::{normalize_punches, normalize_slots, parse_punch};
pub use punch_source::{PunchIndex, PunchSource};
pub use used_punches::{UsedPunchKey, UsedPunchTracker};
