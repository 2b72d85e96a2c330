//! Integration tests for the exit compliance engine.
//!
//! This test suite covers:
//! - The reconcile endpoint end to end
//! - Punch sharing across authorizations on the same date
//! - Single interior punch assignment
//! - Unparseable punch values
//! - Report ordering and statistics
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{NaiveDate, NaiveTime};
use serde_json::{Value, json};
use tower::ServiceExt;

use exit_compliance_engine::api::{AppState, create_router};
use exit_compliance_engine::config::{ConfigLoader, ReconciliationConfig};
use exit_compliance_engine::models::{AuthorizationRecord, ComplianceState, PunchSet};
use exit_compliance_engine::reconciliation::{PunchIndex, ReportQuery, generate_report};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_reconcile(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reconcile")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn authorization(id: &str, employee_id: &str, date: &str, departure: &str, ret: &str) -> Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "employee_name": format!("Employee {}", employee_id),
        "date": date,
        "expected_departure": departure,
        "expected_return": ret,
        "reason": "Errand",
        "destination": "Town",
        "approved": true
    })
}

fn punches(employee_id: &str, date: &str, slots: &[&str]) -> Value {
    json!({
        "employee_id": employee_id,
        "date": date,
        "slots": slots
    })
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn record(id: &str, employee_id: &str, day: &str, departure: &str, ret: &str) -> AuthorizationRecord {
    AuthorizationRecord {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        employee_name: format!("Employee {}", employee_id),
        date: date(day),
        expected_departure: Some(time(departure)),
        expected_return: Some(time(ret)),
        reason: String::new(),
        destination: String::new(),
        approved: true,
    }
}

// =============================================================================
// Endpoint scenarios
// =============================================================================

#[tokio::test]
async fn test_end_to_end_single_authorization() {
    let body = json!({
        "from": "2026-02-01",
        "to": "2026-02-28",
        "authorizations": [authorization("auth_001", "4512873", "2026-02-03", "12:00:00", "13:00:00")],
        "punches": [punches("4512873", "2026-02-03", &["07:05", "12:02", "13:10", "15:00"])]
    });

    let (status, report) = post_reconcile(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let row = &report["rows"][0];
    assert_eq!(row["matched_departure"], "12:02");
    assert_eq!(row["matched_return"], "13:10");
    assert_eq!(row["departure_state"], "on_time");
    assert_eq!(row["return_state"], "on_time");
    assert_eq!(row["display_date"], "03-02-2026");

    let stats = &report["employee_stats"][0];
    assert_eq!(stats["employee_id"], "4512873");
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["compliant"], 2);
    assert_eq!(stats["violation"], 0);
}

#[tokio::test]
async fn test_two_authorizations_share_punch_set() {
    let body = json!({
        "from": "2026-02-03",
        "to": "2026-02-03",
        "authorizations": [
            authorization("auth_002", "4512873", "2026-02-03", "14:00:00", "15:00:00"),
            authorization("auth_001", "4512873", "2026-02-03", "10:00:00", "11:00:00")
        ],
        "punches": [punches(
            "4512873",
            "2026-02-03",
            &["07:00", "10:00", "11:00", "14:00", "15:00", "18:00"]
        )]
    });

    let (status, report) = post_reconcile(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let rows = report["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    // Admin view orders same-day rows by expected departure
    assert_eq!(rows[0]["authorization_id"], "auth_001");
    assert_eq!(rows[0]["matched_departure"], "10:00");
    assert_eq!(rows[0]["matched_return"], "11:00");
    assert_eq!(rows[1]["authorization_id"], "auth_002");
    assert_eq!(rows[1]["matched_departure"], "14:00");
    assert_eq!(rows[1]["matched_return"], "15:00");

    assert_eq!(report["employee_stats"][0]["total"], 4);
    assert_eq!(report["employee_stats"][0]["compliant"], 4);
}

#[tokio::test]
async fn test_missing_punch_set_reports_not_punched() {
    let body = json!({
        "from": "2026-02-01",
        "to": "2026-02-28",
        "authorizations": [authorization("auth_001", "4512873", "2026-02-03", "12:00:00", "13:00:00")],
        "punches": []
    });

    let (status, report) = post_reconcile(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let row = &report["rows"][0];
    assert_eq!(row["matched_departure"], "-");
    assert_eq!(row["matched_return"], "-");
    assert_eq!(row["departure_state"], "not_punched");
    assert_eq!(row["strategy"]["kind"], "no_punch_set");

    assert_eq!(report["employee_stats"][0]["violation"], 2);
}

#[tokio::test]
async fn test_unparseable_punch_is_ignored() {
    let body = json!({
        "from": "2026-02-01",
        "to": "2026-02-28",
        "authorizations": [authorization("auth_001", "4512873", "2026-02-03", "12:00:00", "13:00:00")],
        "punches": [punches("4512873", "2026-02-03", &["07:05", "abc", "12:02", "13:10", "15:00"])]
    });

    let (status, report) = post_reconcile(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["rows"][0]["matched_departure"], "12:02");
    assert_eq!(report["rows"][0]["matched_return"], "13:10");
}

#[tokio::test]
async fn test_inverted_range_returns_400() {
    let body = json!({
        "from": "2026-02-28",
        "to": "2026-02-01",
        "authorizations": [],
        "punches": []
    });

    let (status, error) = post_reconcile(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reconcile")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"from\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

// =============================================================================
// Engine scenarios
// =============================================================================

#[test]
fn test_single_interior_punch_goes_to_departure() {
    let records = vec![record("auth_001", "4512873", "2026-02-03", "12:00", "13:00")];
    let index = PunchIndex::new([PunchSet::from_text(
        "4512873",
        date("2026-02-03"),
        &[Some("07:00"), Some("12:10"), Some("15:00")],
    )]);
    let query = ReportQuery::new(date("2026-02-01"), date("2026-02-28")).unwrap();

    let report = generate_report(&records, &index, &query, &ReconciliationConfig::default());

    let row = &report.rows[0];
    assert_eq!(row.result.departure_punch, Some(time("12:10")));
    assert_eq!(row.result.departure_state, ComplianceState::OnTime);
    assert_eq!(row.result.return_state, ComplianceState::NotPunched);

    let stats = report.stats_for("4512873").unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.compliant, 1);
}

#[test]
fn test_punch_never_assigned_twice() {
    let records = vec![
        record("auth_001", "4512873", "2026-02-03", "12:00", "13:00"),
        record("auth_002", "4512873", "2026-02-03", "12:05", "13:05"),
    ];
    let index = PunchIndex::new([PunchSet::from_text(
        "4512873",
        date("2026-02-03"),
        &[Some("07:00"), Some("12:02"), Some("13:01"), Some("17:00")],
    )]);
    let query = ReportQuery::new(date("2026-02-03"), date("2026-02-03")).unwrap();

    let report = generate_report(&records, &index, &query, &ReconciliationConfig::default());

    let mut assigned: Vec<NaiveTime> = report
        .rows
        .iter()
        .flat_map(|row| [row.result.departure_punch, row.result.return_punch])
        .flatten()
        .collect();
    let before = assigned.len();
    assigned.sort();
    assigned.dedup();
    assert_eq!(assigned.len(), before);
    assert_eq!(before, 2);
}

#[test]
fn test_employee_filter_and_view() {
    let records = vec![
        record("auth_001", "4512873", "2026-02-03", "12:00", "13:00"),
        record("auth_002", "7700112", "2026-02-03", "09:00", "10:00"),
        record("auth_003", "4512873", "2026-02-10", "16:00", "17:00"),
    ];
    let index = PunchIndex::new(Vec::new());
    let query = ReportQuery::new(date("2026-02-01"), date("2026-02-28"))
        .unwrap()
        .for_employee("4512873");

    let report = generate_report(&records, &index, &query, &ReconciliationConfig::default());

    let ids: Vec<&str> = report
        .rows
        .iter()
        .map(|row| row.authorization_id.as_str())
        .collect();
    assert_eq!(ids, vec!["auth_003", "auth_001"]);
    assert_eq!(report.employee_stats.len(), 1);
    assert_eq!(report.employee_stats[0].violation, 4);
}
