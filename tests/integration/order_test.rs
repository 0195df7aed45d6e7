//! Integration tests for café orders and stock reservation.

mod helpers;

use helpers::{TestApp, data_id};
use http::StatusCode;
use serde_json::{Value, json};

fn dine_in(items: Value) -> Value {
    json!({ "orderType": "DineIn", "items": items })
}

#[tokio::test]
async fn test_order_decrements_stock_and_totals() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 10).await;
    let fries = app.create_product(&admin, "Fries", 40.5, 4).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(dine_in(json!([
                { "productId": cola, "quantity": 3 },
                { "productId": fries, "quantity": 2 }
            ]))),
            Some(&sara),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["totalAmount"].as_f64(), Some(156.0));
    assert_eq!(data["status"], "Pending");
    assert_eq!(data["paymentStatus"], "Unpaid");
    assert_eq!(data["customerName"], "Sara");
    assert_eq!(data["items"].as_array().unwrap().len(), 2);

    assert_eq!(app.stock_of(&cola).await, 7);
    assert_eq!(app.stock_of(&fries).await, 2);
}

#[tokio::test]
async fn test_short_line_rejects_whole_order() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 10).await;
    let cake = app.create_product(&admin, "Cake", 60.0, 1).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(dine_in(json!([
                { "productId": cola, "quantity": 2 },
                { "productId": cake, "quantity": 2 }
            ]))),
            Some(&sara),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "INSUFFICIENT_STOCK");
    assert_eq!(response.body["details"]["product_id"], cake.as_str());
    assert_eq!(app.stock_of(&cola).await, 10);
    assert_eq!(app.stock_of(&cake).await, 1);

    let orders = app.request("GET", "/api/orders", None, Some(&sara)).await;
    assert_eq!(orders.body["data"]["total_items"], 0);
}

#[tokio::test]
async fn test_duplicate_lines_are_checked_together() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 3).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(dine_in(json!([
                { "productId": cola, "quantity": 2 },
                { "productId": cola, "quantity": 2 }
            ]))),
            Some(&sara),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(app.stock_of(&cola).await, 3);
}

#[tokio::test]
async fn test_bad_carts_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 3).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let empty = app
        .request("POST", "/api/orders", Some(dine_in(json!([]))), Some(&sara))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.error_code(), "VALIDATION_ERROR");

    let zero = app
        .request(
            "POST",
            "/api/orders",
            Some(dine_in(json!([{ "productId": cola, "quantity": 0 }]))),
            Some(&sara),
        )
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);

    let unknown = app
        .request(
            "POST",
            "/api/orders",
            Some(dine_in(json!([{ "productId": uuid::Uuid::new_v4(), "quantity": 1 }]))),
            Some(&sara),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delivery_requires_a_location() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 3).await;
    let (nomad, _) = app
        .register_with(json!({
            "name": "Nomad",
            "email": "nomad@example.com",
            "password": "controller42"
        }))
        .await;

    let items = json!([{ "productId": cola, "quantity": 1 }]);
    let missing = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "orderType": "Delivery", "items": items })),
            Some(&nomad),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stock_of(&cola).await, 3);

    let given = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "orderType": "Delivery", "items": items, "location": "Zamalek" })),
            Some(&nomad),
        )
        .await;
    assert_eq!(given.status, StatusCode::CREATED);
    assert_eq!(given.body["data"]["location"], "Zamalek");
}

#[tokio::test]
async fn test_fulfillment_pipelines() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 10).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;
    let items = json!([{ "productId": cola, "quantity": 1 }]);

    let delivery = data_id(
        &app.request(
            "POST",
            "/api/orders",
            Some(json!({ "orderType": "Delivery", "items": items })),
            Some(&sara),
        )
        .await
        .body,
    );
    for status in ["Processing", "On the way", "Delivered"] {
        let response = app
            .request(
                "PATCH",
                &format!("/api/orders/{delivery}/status"),
                Some(json!({ "status": status })),
                Some(&admin),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{status}: {:?}", response.body);
        assert_eq!(response.body["data"]["status"], status);
    }

    let dine = data_id(
        &app.request("POST", "/api/orders", Some(dine_in(items)), Some(&sara))
            .await
            .body,
    );
    let path = format!("/api/orders/{dine}/status");
    app.request("PATCH", &path, Some(json!({ "status": "Processing" })), Some(&admin))
        .await;
    let skip = app
        .request("PATCH", &path, Some(json!({ "status": "On the way" })), Some(&admin))
        .await;
    assert_eq!(skip.status, StatusCode::CONFLICT);
    assert_eq!(skip.error_code(), "INVALID_STATUS_TRANSITION");

    let by_customer = app
        .request("PATCH", &path, Some(json!({ "status": "Delivered" })), Some(&sara))
        .await;
    assert_eq!(by_customer.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_order_payment_is_idempotent_and_owner_scoped() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 10).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;
    let (omar, _) = app.register("Omar", "omar@example.com").await;

    let order = data_id(
        &app.request(
            "POST",
            "/api/orders",
            Some(dine_in(json!([{ "productId": cola, "quantity": 2 }]))),
            Some(&sara),
        )
        .await
        .body,
    );
    let path = format!("/api/payments/order/{order}/mark-paid");

    let stranger = app.request("POST", &path, None, Some(&omar)).await;
    assert_eq!(stranger.status, StatusCode::FORBIDDEN);

    for _ in 0..2 {
        let response = app.request("POST", &path, None, Some(&sara)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["data"]["paymentStatus"], "Paid");
        assert_eq!(response.body["data"]["amount"].as_f64(), Some(50.0));
    }

    let bogus = app
        .request("POST", &format!("/api/payments/invoice/{order}/mark-paid"), None, Some(&sara))
        .await;
    assert_eq!(bogus.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_summary_is_admin_only() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let cola = app.create_product(&admin, "Cola", 25.0, 10).await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let placed = app
        .request(
            "POST",
            "/api/orders",
            Some(dine_in(json!([{ "productId": cola, "quantity": 2 }]))),
            Some(&sara),
        )
        .await;
    assert_eq!(placed.status, StatusCode::CREATED);

    let forbidden = app.request("GET", "/api/dashboard", None, Some(&sara)).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", "/api/dashboard", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["registeredUsers"], 2);
    assert_eq!(data["pendingActions"], 1);
    assert_eq!(data["unfulfilledOrders"], 1);
    assert_eq!(data["totalRevenue"].as_f64(), Some(0.0));
    assert_eq!(data["todayRevenue"].as_f64(), Some(50.0));
}
