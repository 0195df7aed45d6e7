//! Integration tests for registration, login and profiles.

mod helpers;

use helpers::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_login_and_me() {
    let app = TestApp::new().await;
    let (token, id) = app.register("Sara", "Sara@Example.com").await;

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["id"], id.as_str());
    assert_eq!(me.body["data"]["email"], "sara@example.com");
    assert_eq!(me.body["data"]["role"], "Customer");
    assert!(me.body["data"].get("passwordHash").is_none());

    let login = app.login("sara@example.com", "controller42").await;
    assert!(!login.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_unauthorized() {
    let app = TestApp::new().await;
    app.register("Sara", "sara@example.com").await;

    for (email, password) in [
        ("sara@example.com", "wrong-password"),
        ("nobody@example.com", "controller42"),
    ] {
        let response = app
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error_code(), "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new().await;
    app.register("Sara", "sara@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": "Other Sara",
                "email": "SARA@example.com",
                "password": "controller42"
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_registration_validation() {
    let app = TestApp::new().await;

    let bad_email = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "name": "Sara", "email": "sara", "password": "controller42" })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert!(bad_email.body["details"].get("email").is_some());

    let short = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "name": "Sara", "email": "sara@example.com", "password": "abc" })),
            None,
        )
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tokens_are_checked() {
    let app = TestApp::new().await;

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let forged = app
        .request("GET", "/api/auth/me", None, Some("not.a.jwt"))
        .await;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_listing_is_admin_only() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let denied = app.request("GET", "/api/users", None, Some(&sara)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let listed = app
        .request("GET", "/api/users?page=1&per_page=1", None, Some(&admin))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"]["total_items"], 2);
    assert_eq!(listed.body["data"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new().await;
    let (sara, _) = app.register("Sara", "sara@example.com").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(json!({ "location": "Maadi", "phoneNumber": "01111111111" })),
            Some(&sara),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["location"], "Maadi");
    assert_eq!(response.body["data"]["name"], "Sara");
}
