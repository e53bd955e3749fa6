//! Comprehensive integration tests for the Leave & Overtime Accrual Engine.
//!
//! This test suite covers all request flows including:
//! - Vacation submission and the hour breakdown
//! - Submission rule rejections (range, balances, duplicates)
//! - Overtime claims and tiered banking
//! - Approval and denial reconciliation
//! - Staffing-conflict surfacing and acknowledgement
//! - Sick days and leaves of absence
//! - Anniversary rollover
//! - Balance summaries
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use leave_engine::api::{AppState, Clock, create_router};
use leave_engine::config::PolicyLoader;
use leave_engine::models::{Department, Employee, ManagerAuthority, Role};
use leave_engine::store::Ledger;

// =============================================================================
// Test Helpers
// =============================================================================

/// Every test runs on this pinned date, a Monday.
const TODAY: fn() -> NaiveDate = || NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Seeds the ledger with two departments and a small cast:
///
/// - `emp_alice` (accounting, 5 years of service, 12h banked overtime)
/// - `emp_bob` (accounting, 2 years of service)
/// - `emp_carol` (accounting, rollover overdue with 35h used)
/// - `mgr_dana` (accounting manager)
/// - `mgr_evan` (shipping manager)
/// - `owner_olive` (owner)
fn create_test_state() -> AppState {
    let policy = PolicyLoader::load("./config/policy.yaml").expect("Failed to load policy");
    let mut ledger = Ledger::new();

    ledger.insert_department(Department {
        id: "dept_acct".to_string(),
        name: "Accounting".to_string(),
        division: "Widget, Inc.".to_string(),
        staff_count: 3,
        min_staff: 2,
    });
    ledger.insert_department(Department {
        id: "dept_ship".to_string(),
        name: "Shipping".to_string(),
        division: "Widget, Inc.".to_string(),
        staff_count: 5,
        min_staff: 2,
    });

    let mut alice = Employee::new("emp_alice", "Alice Nguyen", date(2020, 6, 15));
    alice.department_id = Some("dept_acct".to_string());
    alice.overtime_hours = "12".parse().unwrap();
    alice.next_rollover = date(2026, 6, 15);
    ledger.insert_employee(alice);

    let mut bob = Employee::new("emp_bob", "Bob Tran", date(2024, 3, 1));
    bob.department_id = Some("dept_acct".to_string());
    bob.next_rollover = date(2027, 3, 1);
    ledger.insert_employee(bob);

    let mut carol = Employee::new("emp_carol", "Carol Ibe", date(2019, 11, 1));
    carol.department_id = Some("dept_acct".to_string());
    carol.vacation_used = "35".parse().unwrap();
    ledger.insert_employee(carol);

    let mut dana = Employee::new("mgr_dana", "Dana Reyes", date(2015, 1, 1));
    dana.department_id = Some("dept_acct".to_string());
    dana.set_manager_role(ManagerAuthority {
        department_id: "dept_acct".to_string(),
        approve_any_staff: false,
    });
    ledger.insert_employee(dana);

    let mut evan = Employee::new("mgr_evan", "Evan Sato", date(2016, 1, 1));
    evan.department_id = Some("dept_ship".to_string());
    evan.set_manager_role(ManagerAuthority {
        department_id: "dept_ship".to_string(),
        approve_any_staff: false,
    });
    ledger.insert_employee(evan);

    let mut olive = Employee::new("owner_olive", "Olive Marsh", date(2010, 1, 1));
    olive.roles.insert(Role::Owner);
    ledger.insert_employee(olive);

    AppState::new(policy, ledger).with_clock(Clock::Fixed(TODAY()))
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
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

async fn post_empty(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
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

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn vacation_body(employee_id: &str, start: &str, end: &str) -> Value {
    json!({
        "employee_id": employee_id,
        "start_date": start,
        "end_date": end
    })
}

fn decision_body(approver_id: &str) -> Value {
    json!({ "approver_id": approver_id })
}

/// Submits a vacation and returns its id, asserting success.
async fn submit_vacation_ok(router: &Router, body: Value) -> String {
    let (status, result) = post_json(router, "/vacations", body).await;
    assert_eq!(status, StatusCode::OK, "submission failed: {result}");
    result["id"].as_str().unwrap().to_string()
}

/// Submits an overtime claim and returns its id, asserting success.
async fn submit_overtime_ok(router: &Router, body: Value) -> String {
    let (status, result) = post_json(router, "/overtime", body).await;
    assert_eq!(status, StatusCode::OK, "submission failed: {result}");
    result["id"].as_str().unwrap().to_string()
}

fn assert_decimal_field(result: &Value, field: &str, expected: &str) {
    let actual = result[field].as_str().unwrap();
    let actual: rust_decimal::Decimal = actual.parse().unwrap();
    let expected: rust_decimal::Decimal = expected.parse().unwrap();
    assert_eq!(actual, expected, "Mismatch on field '{field}'");
}

// =============================================================================
// SECTION 1: Vacation Submission Tests
// =============================================================================

#[tokio::test]
async fn test_submit_vacation_full_week() {
    // Monday to Friday holds 40 working hours, all drawn from vacation
    let router = create_router(create_test_state());
    let body = vacation_body("emp_alice", "2026-07-06", "2026-07-10");

    let (status, result) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["state"], "submitted");
    assert_decimal_field(&result, "hours_total", "40");
    assert_decimal_field(&result, "hours_vacation", "40");
    assert_decimal_field(&result, "hours_unpaid", "0");
    assert_decimal_field(&result, "hours_overtime", "0");
    assert!(result["decided_by"].is_null());
}

#[tokio::test]
async fn test_submit_vacation_with_offsets_reserves_overtime() {
    // 8h unpaid and 4h overtime leave 28h on the vacation allowance;
    // the overtime portion comes out of the bank immediately
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_alice",
        "start_date": "2026-07-06",
        "end_date": "2026-07-10",
        "unpaid_hours": "8",
        "overtime_hours": "4"
    });

    let (status, result) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "hours_vacation", "28");
    assert_decimal_field(&result, "hours_unpaid", "8");
    assert_decimal_field(&result, "hours_overtime", "4");

    let (status, summary) = get_json(&router, "/employees/emp_alice/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&summary, "overtime_hours", "8");
}

#[tokio::test]
async fn test_submit_vacation_single_weekend_day_counts_full_day() {
    // A single-day request is a fixed 8-hour day even on a Saturday
    let router = create_router(create_test_state());
    let body = vacation_body("emp_alice", "2026-07-11", "2026-07-11");

    let (status, result) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "hours_total", "8");
}

#[tokio::test]
async fn test_submit_vacation_rejects_past_range() {
    let router = create_router(create_test_state());
    let body = vacation_body("emp_alice", "2026-05-04", "2026-05-08");

    let (status, error) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_submit_vacation_rejects_inverted_range() {
    let router = create_router(create_test_state());
    let body = vacation_body("emp_alice", "2026-07-10", "2026-07-06");

    let (status, error) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_submit_vacation_rejects_overtime_beyond_bank() {
    // Bob has no banked overtime
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "start_date": "2026-07-06",
        "end_date": "2026-07-10",
        "overtime_hours": "4"
    });

    let (status, error) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INSUFFICIENT_BALANCE");
}

#[tokio::test]
async fn test_submit_vacation_rejects_beyond_allowance() {
    // Bob's two years of service allow 80 hours; four working weeks
    // hold 160
    let router = create_router(create_test_state());
    let body = vacation_body("emp_bob", "2026-07-06", "2026-07-31");

    let (status, error) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INSUFFICIENT_BALANCE");
}

#[tokio::test]
async fn test_submit_vacation_rejects_overlap_with_own_request() {
    let router = create_router(create_test_state());
    submit_vacation_ok(&router, vacation_body("emp_alice", "2026-07-06", "2026-07-10")).await;

    let (status, error) = post_json(
        &router,
        "/vacations",
        vacation_body("emp_alice", "2026-07-10", "2026-07-14"),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "DUPLICATE_REQUEST");
}

#[tokio::test]
async fn test_resubmission_allowed_after_denial() {
    // A denied request releases its days
    let router = create_router(create_test_state());
    let id = submit_vacation_ok(&router, vacation_body("emp_alice", "2026-07-06", "2026-07-10"))
        .await;

    let (status, _) = post_json(
        &router,
        &format!("/vacations/{id}/deny"),
        decision_body("mgr_dana"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post_json(
        &router,
        "/vacations",
        vacation_body("emp_alice", "2026-07-06", "2026-07-10"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// SECTION 2: Overtime Claim Tests
// =============================================================================

#[tokio::test]
async fn test_submit_overtime_banks_time_and_a_half() {
    // 4 raw hours on top of an 8-hour shift stay under the 12-hour
    // threshold: 4 * 1.5 = 6 banked
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-28",
        "hours": "4"
    });

    let (status, result) = post_json(&router, "/overtime", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "raw_hours", "4");
    assert_decimal_field(&result, "banked_hours", "6");
    assert_eq!(result["state"], "submitted");
}

#[tokio::test]
async fn test_submit_overtime_banks_double_time_past_threshold() {
    // 8 raw hours push the day to 16: 4 * 1.5 + 4 * 2 = 14 banked
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-28",
        "hours": "8"
    });

    let (status, result) = post_json(&router, "/overtime", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "banked_hours", "14");
}

#[tokio::test]
async fn test_submit_overtime_rejects_future_date() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-06-02",
        "hours": "4"
    });

    let (status, error) = post_json(&router, "/overtime", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_submit_overtime_rejects_second_claim_for_same_date() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-28",
        "hours": "4"
    });
    submit_overtime_ok(&router, body.clone()).await;

    let (status, error) = post_json(&router, "/overtime", body).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "DUPLICATE_REQUEST");
}

#[tokio::test]
async fn test_submit_overtime_rejects_zero_hours() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-28",
        "hours": "0"
    });

    let (status, error) = post_json(&router, "/overtime", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_HOURS");
}

// =============================================================================
// SECTION 3: Decision and Reconciliation Tests
// =============================================================================

#[tokio::test]
async fn test_approve_vacation_consumes_allowance() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_alice",
        "start_date": "2026-07-06",
        "end_date": "2026-07-10",
        "overtime_hours": "4"
    });
    let id = submit_vacation_ok(&router, body).await;

    let (status, result) = post_json(
        &router,
        &format!("/vacations/{id}/approve"),
        decision_body("mgr_dana"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["state"], "approved");
    assert_eq!(result["decided_by"], "mgr_dana");

    // 36 vacation hours consumed; the 4-hour reservation stays spent
    let (_, summary) = get_json(&router, "/employees/emp_alice/summary").await;
    assert_decimal_field(&summary, "vacation_used", "36");
    assert_decimal_field(&summary, "overtime_hours", "8");
}

#[tokio::test]
async fn test_deny_vacation_restores_overtime_reservation() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_alice",
        "start_date": "2026-07-06",
        "end_date": "2026-07-10",
        "overtime_hours": "4"
    });
    let id = submit_vacation_ok(&router, body).await;

    let (status, result) = post_json(
        &router,
        &format!("/vacations/{id}/deny"),
        decision_body("mgr_dana"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["state"], "denied");

    let (_, summary) = get_json(&router, "/employees/emp_alice/summary").await;
    assert_decimal_field(&summary, "vacation_used", "0");
    assert_decimal_field(&summary, "overtime_hours", "12");
}

#[tokio::test]
async fn test_approve_overtime_credits_bank() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-28",
        "hours": "4"
    });
    let id = submit_overtime_ok(&router, body).await;

    let (status, result) = post_json(
        &router,
        &format!("/overtime/{id}/approve"),
        decision_body("mgr_dana"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["state"], "approved");

    let (_, summary) = get_json(&router, "/employees/emp_bob/summary").await;
    assert_decimal_field(&summary, "overtime_hours", "6");
}

#[tokio::test]
async fn test_deny_overtime_leaves_bank_untouched() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-28",
        "hours": "4"
    });
    let id = submit_overtime_ok(&router, body).await;

    let (status, result) = post_json(
        &router,
        &format!("/overtime/{id}/deny"),
        decision_body("mgr_dana"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["state"], "denied");

    let (_, summary) = get_json(&router, "/employees/emp_bob/summary").await;
    assert_decimal_field(&summary, "overtime_hours", "0");
}

#[tokio::test]
async fn test_decision_is_exactly_once() {
    let router = create_router(create_test_state());
    let id = submit_vacation_ok(&router, vacation_body("emp_alice", "2026-07-06", "2026-07-10"))
        .await;

    let (status, _) = post_json(
        &router,
        &format!("/vacations/{id}/approve"),
        decision_body("mgr_dana"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, error) = post_json(
        &router,
        &format!("/vacations/{id}/deny"),
        decision_body("mgr_dana"),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "ALREADY_DECIDED");

    // Balances stay as the first decision left them
    let (_, summary) = get_json(&router, "/employees/emp_alice/summary").await;
    assert_decimal_field(&summary, "vacation_used", "40");
}

#[tokio::test]
async fn test_manager_cannot_decide_outside_department() {
    let router = create_router(create_test_state());
    let id = submit_vacation_ok(&router, vacation_body("emp_alice", "2026-07-06", "2026-07-10"))
        .await;

    let (status, error) = post_json(
        &router,
        &format!("/vacations/{id}/approve"),
        decision_body("mgr_evan"),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error["code"], "AUTHORIZATION_DENIED");
}

#[tokio::test]
async fn test_owner_decides_in_any_department() {
    let router = create_router(create_test_state());
    let id = submit_vacation_ok(&router, vacation_body("emp_alice", "2026-07-06", "2026-07-10"))
        .await;

    let (status, result) = post_json(
        &router,
        &format!("/vacations/{id}/approve"),
        decision_body("owner_olive"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["decided_by"], "owner_olive");
}

#[tokio::test]
async fn test_plain_employee_cannot_decide() {
    let router = create_router(create_test_state());
    let id = submit_vacation_ok(&router, vacation_body("emp_alice", "2026-07-06", "2026-07-10"))
        .await;

    let (status, error) = post_json(
        &router,
        &format!("/vacations/{id}/approve"),
        decision_body("emp_bob"),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error["code"], "AUTHORIZATION_DENIED");
}

// =============================================================================
// SECTION 4: Staffing Conflict Tests
// =============================================================================

/// Approves Alice's week off, then submits an overlapping request from
/// Bob. Accounting has 3 staff with a floor of 2, so one approved
/// absence exhausts the slack.
async fn setup_conflicting_requests(router: &Router) -> String {
    let alice_id = submit_vacation_ok(
        router,
        vacation_body("emp_alice", "2026-07-06", "2026-07-10"),
    )
    .await;
    let (status, _) = post_json(
        router,
        &format!("/vacations/{alice_id}/approve"),
        decision_body("mgr_dana"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    submit_vacation_ok(router, vacation_body("emp_bob", "2026-07-08", "2026-07-09")).await
}

#[tokio::test]
async fn test_approval_surfaces_staffing_conflict() {
    let router = create_router(create_test_state());
    let bob_id = setup_conflicting_requests(&router).await;

    let (status, error) = post_json(
        &router,
        &format!("/vacations/{bob_id}/approve"),
        decision_body("mgr_dana"),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "SCHEDULING_CONFLICT");
    assert_eq!(error["details"], "2026-07-08, 2026-07-09");

    // The request stays pending and no balance moved
    let (_, summary) = get_json(&router, "/employees/emp_bob/summary").await;
    assert_decimal_field(&summary, "vacation_used", "0");
}

#[tokio::test]
async fn test_acknowledged_conflict_approves_anyway() {
    let router = create_router(create_test_state());
    let bob_id = setup_conflicting_requests(&router).await;

    let (status, result) = post_json(
        &router,
        &format!("/vacations/{bob_id}/approve"),
        json!({ "approver_id": "mgr_dana", "acknowledge_conflicts": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["state"], "approved");

    let (_, summary) = get_json(&router, "/employees/emp_bob/summary").await;
    assert_decimal_field(&summary, "vacation_used", "16");
}

#[tokio::test]
async fn test_conflict_queue_annotates_pending_requests() {
    let router = create_router(create_test_state());
    setup_conflicting_requests(&router).await;

    let (status, entries) = get_json(&router, "/departments/dept_acct/conflicts").await;

    assert_eq!(status, StatusCode::OK);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["request"]["employee_id"], "emp_bob");
    assert_eq!(
        entries[0]["conflict_days"],
        json!(["2026-07-08", "2026-07-09"])
    );
}

#[tokio::test]
async fn test_non_overlapping_requests_do_not_conflict() {
    let router = create_router(create_test_state());
    let alice_id = submit_vacation_ok(
        &router,
        vacation_body("emp_alice", "2026-07-06", "2026-07-10"),
    )
    .await;
    post_json(
        &router,
        &format!("/vacations/{alice_id}/approve"),
        decision_body("mgr_dana"),
    )
    .await;

    let bob_id = submit_vacation_ok(
        &router,
        vacation_body("emp_bob", "2026-07-13", "2026-07-14"),
    )
    .await;
    let (status, result) = post_json(
        &router,
        &format!("/vacations/{bob_id}/approve"),
        decision_body("mgr_dana"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["state"], "approved");
}

// =============================================================================
// SECTION 5: Sick Day and Leave of Absence Tests
// =============================================================================

#[tokio::test]
async fn test_record_sick_day_fixed_eight_hours() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-27",
        "recorded_by": "mgr_dana"
    });

    let (status, result) = post_json(&router, "/sick-days", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "hours", "8");
    assert_eq!(result["recorded_by"], "mgr_dana");
}

#[tokio::test]
async fn test_record_sick_day_rejects_duplicate_date() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-27",
        "recorded_by": "mgr_dana"
    });
    let (status, _) = post_json(&router, "/sick-days", body.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, error) = post_json(&router, "/sick-days", body).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "DUPLICATE_REQUEST");
}

#[tokio::test]
async fn test_record_sick_day_requires_department_scope() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-27",
        "recorded_by": "mgr_evan"
    });

    let (status, error) = post_json(&router, "/sick-days", body).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error["code"], "AUTHORIZATION_DENIED");
}

#[tokio::test]
async fn test_owner_records_sick_day_in_any_department() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "date": "2026-05-27",
        "recorded_by": "owner_olive"
    });

    let (status, _) = post_json(&router, "/sick-days", body).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unpaid_leave_of_absence_accrues_unpaid_time() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "start_date": "2026-07-13",
        "end_date": "2026-07-17",
        "unpaid": true,
        "recorded_by": "mgr_dana"
    });

    let (status, result) = post_json(&router, "/leaves-of-absence", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "hours_total", "40");
    assert_decimal_field(&result, "hours_unpaid", "40");

    let (_, summary) = get_json(&router, "/employees/emp_bob/summary").await;
    assert_decimal_field(&summary, "unpaid_time", "40");
}

#[tokio::test]
async fn test_paid_leave_of_absence_leaves_balances_untouched() {
    let router = create_router(create_test_state());
    let body = json!({
        "employee_id": "emp_bob",
        "start_date": "2026-07-13",
        "end_date": "2026-07-17",
        "recorded_by": "mgr_dana"
    });

    let (status, result) = post_json(&router, "/leaves-of-absence", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "hours_unpaid", "0");

    let (_, summary) = get_json(&router, "/employees/emp_bob/summary").await;
    assert_decimal_field(&summary, "unpaid_time", "0");
}

// =============================================================================
// SECTION 6: Rollover and Summary Tests
// =============================================================================

#[tokio::test]
async fn test_rollover_resets_vacation_used() {
    // Carol's rollover date has long passed and she carries 35 used hours
    let router = create_router(create_test_state());

    let (status, result) = post_empty(&router, "/employees/emp_carol/rollover").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["applied"], true);
    assert_eq!(result["next_rollover"], "2021-11-01");
    assert_decimal_field(&result, "vacation_used", "0");
}

#[tokio::test]
async fn test_rollover_before_anniversary_does_nothing() {
    // Bob's next rollover is 2027-03-01, well after the pinned date
    let router = create_router(create_test_state());

    let (status, result) = post_empty(&router, "/employees/emp_bob/rollover").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["applied"], false);
    assert_eq!(result["next_rollover"], "2027-03-01");
}

#[tokio::test]
async fn test_summary_combines_allowance_and_balances() {
    // Alice: 5 years of service hits the 160-hour tier, plus 12h banked
    let router = create_router(create_test_state());

    let (status, summary) = get_json(&router, "/employees/emp_alice/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["full_name"], "Alice Nguyen");
    assert_decimal_field(&summary, "allowed_hours", "160");
    assert_decimal_field(&summary, "vacation_used", "0");
    assert_decimal_field(&summary, "overtime_hours", "12");
    assert_decimal_field(&summary, "total_hours_available", "172");
}

#[tokio::test]
async fn test_summary_uses_tenure_tier() {
    // Bob's two years of service qualify only for the one-year tier
    let router = create_router(create_test_state());

    let (status, summary) = get_json(&router, "/employees/emp_bob/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&summary, "allowed_hours", "80");
    assert_decimal_field(&summary, "total_hours_available", "80");
}

// =============================================================================
// SECTION 7: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router(create_test_state());

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/vacations")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_employee_id() {
    let router = create_router(create_test_state());
    let body = json!({
        "start_date": "2026-07-06",
        "end_date": "2026-07-10"
    });

    let (status, error) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_unknown_employee() {
    let router = create_router(create_test_state());
    let body = vacation_body("emp_404", "2026-07-06", "2026-07-10");

    let (status, error) = post_json(&router, "/vacations", body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_error_unknown_request_id() {
    let router = create_router(create_test_state());

    let (status, error) = post_json(
        &router,
        "/vacations/00000000-0000-0000-0000-000000000000/approve",
        decision_body("mgr_dana"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_error_unknown_department_in_conflict_queue() {
    let router = create_router(create_test_state());

    let (status, error) = get_json(&router, "/departments/dept_404/conflicts").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_error_unknown_summary_employee() {
    let router = create_router(create_test_state());

    let (status, error) = get_json(&router, "/employees/emp_404/summary").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}
