mod common;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use common::{login, register_student, request, setup};

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let (router, _state) = setup().await;

    let (status, _) = request(
        &router,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "admin", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &router,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "ghost", "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_require_token_and_role() {
    let (router, _state) = setup().await;

    // no token
    let (status, _) = request(&router, "GET", "/api/admin/stats", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // garbage token
    let (status, _) = request(&router, "GET", "/api/admin/stats", Some("nonsense"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // a student token is authenticated but not authorized
    let admin_token = login(&router, "admin", "admin123").await;
    let created = register_student(&router, &admin_token, "Asha Rao", 5000, "2024-01-01").await;
    let student_token = login(
        &router,
        created["username"].as_str().unwrap(),
        created["password"].as_str().unwrap(),
    )
    .await;
    let (status, _) = request(
        &router,
        "GET",
        "/api/admin/stats",
        Some(&student_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn register_pay_and_settle_flow() {
    let (router, state) = setup().await;
    let admin_token = login(&router, "admin", "admin123").await;

    let created = register_student(&router, &admin_token, "Asha Rao", 5000, "2024-01-01").await;
    assert_eq!(created["message"], "Student added");
    assert!(created["username"].as_str().unwrap().starts_with("asharao"));

    let (status, students) = request(
        &router,
        "GET",
        "/api/admin/students",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(students.as_array().unwrap().len(), 1);
    let record = &students[0];
    assert_eq!(record["payment_status"], "Pending");
    let id = record["id"].as_i64().unwrap();

    let (status, body) = request(
        &router,
        "PATCH",
        &format!("/api/admin/students/{id}/pay"),
        Some(&admin_token),
        Some(json!({ "amount": 5000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Payment updated");

    let (_, students) = request(
        &router,
        "GET",
        "/api/admin/students",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(students[0]["payment_status"], "Paid");

    // a settled record is invisible to the sweep, even long past due
    let sent = state.sweep.run(Utc::now().date_naive()).await.unwrap();
    assert_eq!(sent, 0);
}

#[tokio::test]
async fn registration_validates_input() {
    let (router, _state) = setup().await;
    let admin_token = login(&router, "admin", "admin123").await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/admin/students",
        Some(&admin_token),
        Some(json!({
            "name": "",
            "total_fee": 1000,
            "due_date": "2024-01-01",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Validation"));
}

#[tokio::test]
async fn payment_for_unknown_student_is_404() {
    let (router, _state) = setup().await;
    let admin_token = login(&router, "admin", "admin123").await;

    let (status, _) = request(
        &router,
        "PATCH",
        "/api/admin/students/99/pay",
        Some(&admin_token),
        Some(json!({ "amount": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn student_sees_own_record_only() {
    let (router, _state) = setup().await;
    let admin_token = login(&router, "admin", "admin123").await;

    let created = register_student(&router, &admin_token, "Priya Nair", 3000, "2024-06-01").await;
    let student_token = login(
        &router,
        created["username"].as_str().unwrap(),
        created["password"].as_str().unwrap(),
    )
    .await;

    let (status, body) = request(&router, "GET", "/api/student/me", Some(&student_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Priya Nair");

    // the admin account owns no fee record
    let (status, _) = request(&router, "GET", "/api/student/me", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_aggregate_over_the_ledger() {
    let (router, _state) = setup().await;
    let admin_token = login(&router, "admin", "admin123").await;

    let first = register_student(&router, &admin_token, "Settled", 5000, "2020-01-01").await;
    let second = register_student(&router, &admin_token, "Overdue", 3000, "2020-01-01").await;
    assert_ne!(first["username"], second["username"]);

    let (_, students) = request(
        &router,
        "GET",
        "/api/admin/students",
        Some(&admin_token),
        None,
    )
    .await;
    let first_id = students[0]["id"].as_i64().unwrap();
    let second_id = students[1]["id"].as_i64().unwrap();

    for (id, amount) in [(first_id, 5000), (second_id, 1000)] {
        let (status, _) = request(
            &router,
            "PATCH",
            &format!("/api/admin/students/{id}/pay"),
            Some(&admin_token),
            Some(json!({ "amount": amount })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, stats) = request(&router, "GET", "/api/admin/stats", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalStudents"], 2);
    assert_eq!(stats["collectedFees"], "6000");
    assert_eq!(stats["pendingFees"], "2000");
    assert_eq!(stats["overdueCount"], 1);
}

#[tokio::test]
async fn reminder_log_is_admin_readable() {
    let (router, state) = setup().await;
    let admin_token = login(&router, "admin", "admin123").await;

    register_student(&router, &admin_token, "Ravi Kumar", 1000, "2024-03-01").await;
    let sent = state
        .sweep
        .run(chrono::NaiveDate::from_ymd_opt(2024, 3, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(sent, 1);

    let (status, reminders) = request(
        &router,
        "GET",
        "/api/admin/reminders",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = reminders.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["student_name"], "Ravi Kumar");
    assert_eq!(entries[0]["status"], "Sent");
    assert!(entries[0]["message"].as_str().unwrap().contains("1000"));

    // the log itself needs the admin role
    let (status, _) = request(&router, "GET", "/api/admin/reminders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
