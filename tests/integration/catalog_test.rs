//! Integration tests for rooms, products, ads and health.

mod helpers;

use helpers::{DATE, TestApp, data_id};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_room_management_is_admin_only() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let body = json!({ "name": "Arena", "roomType": "Cinema", "hourlyRate": 150 });
    let denied = app
        .request("POST", "/api/rooms", Some(body.clone()), Some(&sara))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let created = app.request("POST", "/api/rooms", Some(body), Some(&admin)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["roomType"], "Cinema");
    assert_eq!(created.body["data"]["isAvailable"], true);

    let rooms = app.request("GET", "/api/rooms", None, None).await;
    assert_eq!(rooms.status, StatusCode::OK);
    assert_eq!(rooms.body["data"].as_array().unwrap().len(), 1);

    let free_room = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({ "name": "Free", "roomType": "VIP", "hourlyRate": 0 })),
            Some(&admin),
        )
        .await;
    assert_eq!(free_room.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unavailable_room_cannot_be_booked() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let room = app.create_room(&admin, "Arena", 100.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let closed = app
        .request(
            "PUT",
            &format!("/api/rooms/{room}"),
            Some(json!({ "isAvailable": false })),
            Some(&admin),
        )
        .await;
    assert_eq!(closed.status, StatusCode::OK);
    assert_eq!(closed.body["data"]["isAvailable"], false);

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({ "roomId": room, "date": DATE, "hours": [12] })),
            Some(&sara),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booked_room_cannot_be_deleted() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let booked = app.create_room(&admin, "Arena", 100.0).await;
    let spare = app.create_room(&admin, "Spare", 80.0).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;
    app.request(
        "POST",
        "/api/bookings",
        Some(json!({ "roomId": booked, "date": DATE, "hours": [12] })),
        Some(&sara),
    )
    .await;

    let blocked = app
        .request("DELETE", &format!("/api/rooms/{booked}"), None, Some(&admin))
        .await;
    assert_eq!(blocked.status, StatusCode::CONFLICT);

    let removed = app
        .request("DELETE", &format!("/api/rooms/{spare}"), None, Some(&admin))
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    let gone = app
        .request("GET", &format!("/api/rooms/{spare}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_products_filter_and_restock() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 0).await;
    let burger = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "Burger", "category": "Meal", "price": "95.50", "stock": 5 })),
            Some(&admin),
        )
        .await;
    assert_eq!(burger.status, StatusCode::CREATED);
    assert_eq!(burger.body["data"]["price"].as_f64(), Some(95.5));

    let meals = app
        .request("GET", "/api/products?category=Meal", None, None)
        .await;
    let meals = meals.body["data"].as_array().unwrap().clone();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["name"], "Burger");

    let restock = app
        .request(
            "PUT",
            &format!("/api/products/{cola}"),
            Some(json!({ "stock": 24 })),
            Some(&admin),
        )
        .await;
    assert_eq!(restock.status, StatusCode::OK);
    assert_eq!(app.stock_of(&cola).await, 24);

    let negative = app
        .request(
            "PUT",
            &format!("/api/products/{cola}"),
            Some(json!({ "stock": -1 })),
            Some(&admin),
        )
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_active_ads_are_listed() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let permanent = app
        .request(
            "POST",
            "/api/ads",
            Some(json!({ "title": "FIFA night", "isPermanent": true })),
            Some(&admin),
        )
        .await;
    assert_eq!(permanent.status, StatusCode::CREATED);
    let flash = data_id(
        &app.request(
            "POST",
            "/api/ads",
            Some(json!({ "title": "Happy hour", "expiresAt": "2999-01-01T00:00:00Z" })),
            Some(&admin),
        )
        .await
        .body,
    );

    let ads = app.request("GET", "/api/ads", None, None).await;
    assert_eq!(ads.body["data"].as_array().unwrap().len(), 2);

    let removed = app
        .request("DELETE", &format!("/api/ads/{flash}"), None, Some(&admin))
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    let ads = app.request("GET", "/api/ads", None, None).await;
    assert_eq!(ads.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_health_reports_backend() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["backend"], "memory");
}
