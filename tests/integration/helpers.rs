//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use blacklight_api::{AppState, build_app};
use blacklight_core::config::{AppConfig, DatabaseConfig};
use blacklight_database::Stores;

/// A Monday, well in the future.
pub const DATE: &str = "2026-11-02";

/// Test application context over a fresh in-memory store.
pub struct TestApp {
    pub router: Router,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database = DatabaseConfig::memory();
        config.auth.jwt_secret = "integration-test-secret".into();

        let state = AppState::new(config.clone(), Stores::memory());
        state
            .auth_service
            .ensure_bootstrap_admin(&config.auth)
            .await
            .expect("Failed to create bootstrap admin");

        Self {
            router: build_app(state),
            config,
        }
    }

    /// Log in as the bootstrap admin.
    pub async fn admin_token(&self) -> String {
        let email = self.config.auth.bootstrap_admin_email.clone();
        let password = self.config.auth.bootstrap_admin_password.clone();
        self.login(&email, &password).await
    }

    /// Login and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        token_of(&response.body)
    }

    /// Register a customer with a saved location; returns (token, user id).
    pub async fn register(&self, name: &str, email: &str) -> (String, String) {
        self.register_with(json!({
            "name": name,
            "email": email,
            "password": "controller42",
            "location": "Nasr City, Cairo",
            "phoneNumber": "01000000000"
        }))
        .await
    }

    pub async fn register_with(&self, body: Value) -> (String, String) {
        let response = self
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );
        let id = response.body["data"]["user"]["id"]
            .as_str()
            .expect("No user id in register response")
            .to_string();
        (token_of(&response.body), id)
    }

    /// Create a room as admin and return its id.
    pub async fn create_room(&self, admin: &str, name: &str, rate: f64) -> String {
        let response = self
            .request(
                "POST",
                "/api/rooms",
                Some(json!({
                    "name": name,
                    "roomType": "VIP",
                    "hourlyRate": rate,
                    "psModel": "PS5"
                })),
                Some(admin),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        data_id(&response.body)
    }

    /// Create a product as admin and return its id.
    pub async fn create_product(&self, admin: &str, name: &str, price: f64, stock: i32) -> String {
        let response = self
            .request(
                "POST",
                "/api/products",
                Some(json!({
                    "name": name,
                    "category": "Drink",
                    "price": price,
                    "stock": stock
                })),
                Some(admin),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        data_id(&response.body)
    }

    pub async fn stock_of(&self, product_id: &str) -> i64 {
        let response = self
            .request("GET", &format!("/api/products/{product_id}"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["data"]["stock"]
            .as_i64()
            .expect("No stock in product response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of a failed request.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

pub fn data_id(body: &Value) -> String {
    body["data"]["id"]
        .as_str()
        .expect("No id in response data")
        .to_string()
}

fn token_of(body: &Value) -> String {
    body["data"]["token"]
        .as_str()
        .expect("No token in auth response")
        .to_string()
}
