//! Exit Authorization Compliance Engine
//!
//! This crate reconciles employees' exit authorizations (expected departure and
//! return times within a shift) against raw time-clock punches, classifying
//! each expected event and summarizing compliance per employee.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reconciliation;
