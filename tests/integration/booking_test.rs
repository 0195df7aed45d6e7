//! Integration tests for room bookings.

mod helpers;

use helpers::{DATE, TestApp, data_id};
use http::StatusCode;
use serde_json::json;

async fn book(app: &TestApp, token: &str, room: &str, hours: &[i32]) -> helpers::TestResponse {
    app.request(
        "POST",
        "/api/bookings",
        Some(json!({ "roomId": room, "date": DATE, "hours": hours })),
        Some(token),
    )
    .await
}

#[tokio::test]
async fn test_booking_is_priced_with_deposit() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, sara_id) = app.register("Sara", "sara@example.com").await;

    let response = book(&app, &sara, &room, &[16, 14, 15]).await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["startHour"], 14);
    assert_eq!(data["durationHours"], 3);
    assert_eq!(data["totalPrice"].as_f64(), Some(300.0));
    assert_eq!(data["depositAmount"].as_f64(), Some(60.0));
    assert_eq!(data["status"], "Pending");
    assert_eq!(data["paymentStatus"], "Unpaid");
    assert_eq!(data["customerId"], sara_id.as_str());
}

#[tokio::test]
async fn test_overlap_conflicts_but_adjacent_block_is_free() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;
    let (omar, _) = app.register("Omar", "omar@example.com").await;

    assert_eq!(book(&app, &sara, &room, &[14, 15, 16]).await.status, StatusCode::CREATED);

    let clash = book(&app, &omar, &room, &[16, 17]).await;
    assert_eq!(clash.status, StatusCode::CONFLICT);
    assert_eq!(clash.error_code(), "SLOT_CONFLICT");

    let adjacent = book(&app, &omar, &room, &[17, 18]).await;
    assert_eq!(adjacent.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_invalid_hour_selections() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    for hours in [vec![14, 16], vec![8, 9], vec![23, 24]] {
        let response = book(&app, &sara, &room, &hours).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{hours:?}");
        assert_eq!(response.error_code(), "INVALID_SLOT_SELECTION");
    }

    let empty = book(&app, &sara, &room, &[]).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.error_code(), "INVALID_SLOT_SELECTION");
}

#[tokio::test]
async fn test_repeated_hours_collapse_to_one_slot() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let response = book(&app, &sara, &room, &[14; 25]).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["startHour"], 14);
    assert_eq!(data["durationHours"], 1);
    assert_eq!(data["totalPrice"].as_f64(), Some(100.0));
}

#[tokio::test]
async fn test_availability_tracks_status() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let booking = data_id(&book(&app, &sara, &room, &[14, 15]).await.body);
    let path = format!("/api/rooms/{room}/availability?date={DATE}");

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let hours = response.body["data"]["hours"].as_array().unwrap();
    assert_eq!(hours.len(), 15);
    let state_at = |h: i64| {
        hours
            .iter()
            .find(|s| s["hour"] == h)
            .map(|s| s["state"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(state_at(13), "free");
    assert_eq!(state_at(14), "pending");
    assert_eq!(state_at(16), "free");

    let confirm = app
        .request(
            "PATCH",
            &format!("/api/bookings/{booking}/status"),
            Some(json!({ "status": "Confirmed" })),
            Some(&admin),
        )
        .await;
    assert_eq!(confirm.status, StatusCode::OK);

    let response = app.request("GET", &path, None, None).await;
    let hours = response.body["data"]["hours"].as_array().unwrap();
    assert!(
        hours
            .iter()
            .any(|s| s["hour"] == 15 && s["state"] == "confirmed")
    );
}

#[tokio::test]
async fn test_rejected_booking_releases_hours() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;
    let (omar, _) = app.register("Omar", "omar@example.com").await;

    let booking = data_id(&book(&app, &sara, &room, &[20, 21]).await.body);
    let reject = app
        .request(
            "PATCH",
            &format!("/api/bookings/{booking}/status"),
            Some(json!({ "status": "Rejected" })),
            Some(&admin),
        )
        .await;
    assert_eq!(reject.status, StatusCode::OK);
    assert_eq!(reject.body["data"]["status"], "Rejected");

    assert_eq!(book(&app, &omar, &room, &[20, 21]).await.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_status_changes_are_admin_only_and_follow_table() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;
    let booking = data_id(&book(&app, &sara, &room, &[10]).await.body);
    let path = format!("/api/bookings/{booking}/status");

    let by_customer = app
        .request("PATCH", &path, Some(json!({ "status": "Confirmed" })), Some(&sara))
        .await;
    assert_eq!(by_customer.status, StatusCode::FORBIDDEN);

    let skip = app
        .request("PATCH", &path, Some(json!({ "status": "Completed" })), Some(&admin))
        .await;
    assert_eq!(skip.status, StatusCode::CONFLICT);
    assert_eq!(skip.error_code(), "INVALID_STATUS_TRANSITION");

    let unknown = app
        .request("PATCH", &path, Some(json!({ "status": "Cancelled" })), Some(&admin))
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_customers_only_see_their_own_bookings() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;
    let (omar, _) = app.register("Omar", "omar@example.com").await;

    let saras = data_id(&book(&app, &sara, &room, &[10]).await.body);
    book(&app, &omar, &room, &[12]).await;

    let mine = app.request("GET", "/api/bookings", None, Some(&sara)).await;
    assert_eq!(mine.body["data"]["total_items"], 1);

    let all = app.request("GET", "/api/bookings", None, Some(&admin)).await;
    assert_eq!(all.body["data"]["total_items"], 2);

    let peek = app
        .request("GET", &format!("/api/bookings/{saras}"), None, Some(&omar))
        .await;
    assert_eq!(peek.status, StatusCode::FORBIDDEN);

    let anonymous = app.request("GET", "/api/bookings", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_booking_deposit_mark_paid_twice() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;
    let booking = data_id(&book(&app, &sara, &room, &[14, 15, 16]).await.body);
    let path = format!("/api/payments/booking/{booking}/mark-paid");

    for _ in 0..2 {
        let response = app.request("POST", &path, None, Some(&sara)).await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        assert_eq!(response.body["data"]["paymentStatus"], "Paid");
        assert_eq!(response.body["data"]["amount"].as_f64(), Some(60.0));
    }

    let fetched = app
        .request("GET", &format!("/api/bookings/{booking}"), None, Some(&sara))
        .await;
    assert_eq!(fetched.body["data"]["paymentStatus"], "Paid");
}
