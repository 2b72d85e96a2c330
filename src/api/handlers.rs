//! HTTP request handlers for the exit compliance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{AuthorizationRecord, PunchSet};
use crate::reconciliation::{PunchIndex, ReportQuery, generate_report};

use super::request::ReconcileRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /reconcile endpoint.
///
/// Accepts authorizations and punches for a date range and returns the
/// compliance report.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconcile request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let mut query = match ReportQuery::new(request.from, request.to) {
        Ok(query) => query.with_view(request.view),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected report range"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };
    if let Some(employee_id) = request.employee_id {
        query = query.for_employee(employee_id);
    }

    // Convert request types to domain types
    let records: Vec<AuthorizationRecord> =
        request.authorizations.into_iter().map(Into::into).collect();
    let punches = PunchIndex::new(request.punches.into_iter().map(PunchSet::from));

    let start_time = Instant::now();
    let report = generate_report(&records, &punches, &query, state.config().config());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        authorizations = records.len(),
        punch_sets = punches.len(),
        rows = report.rows.len(),
        duration_us = duration.as_micros(),
        "Reconciliation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
