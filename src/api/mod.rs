//! HTTP API module for the exit compliance engine.
//!
//! This module exposes report generation as a JSON endpoint. Callers supply
//! the authorizations and punch sets they have already fetched.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AuthorizationRequest, PunchSetRequest, ReconcileRequest};
pub use response::ApiError;
pub use state::AppState;
