//! Login, logout and the authentication gate.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use common::{ADMIN_EMAIL, TestApp, mount_products};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn protected_pages_redirect_to_login() {
    let mut app = TestApp::new().await;

    for uri in ["/", "/list", "/orders", "/users", "/invoice", "/analysis"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(response.location.as_deref(), Some("/auth/login"), "{uri}");
    }
}

#[tokio::test]
async fn login_sends_credentials_and_opens_the_dashboard() {
    let mut app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/user/admin"))
        .and(body_json(json!({"email": ADMIN_EMAIL, "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "token": "t"})),
        )
        .expect(1)
        .mount(&app.api)
        .await;
    mount_products(&app.api, json!([])).await;

    let response = app
        .post_form("/auth/login", &format!("email={ADMIN_EMAIL}&password=secret"))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/"));

    let dashboard = app.get("/").await;
    assert_eq!(dashboard.location.as_deref(), Some("/list"));

    let list = app.get("/list").await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body.contains(ADMIN_EMAIL));
}

#[tokio::test]
async fn rejected_login_shows_the_api_message() {
    let mut app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/user/admin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "message": "Invalid credentials"})),
        )
        .mount(&app.api)
        .await;

    let response = app
        .post_form("/auth/login", &format!("email={ADMIN_EMAIL}&password=wrong"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Invalid credentials"));

    let list = app.get("/list").await;
    assert_eq!(list.location.as_deref(), Some("/auth/login"));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let mut app = TestApp::logged_in().await;

    let response = app.post_form("/auth/logout", "").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/auth/login"));

    let login = app.get("/auth/login").await;
    assert_eq!(login.status, StatusCode::OK);
    assert!(login.body.contains("You have been logged out"));

    let list = app.get("/list").await;
    assert_eq!(list.location.as_deref(), Some("/auth/login"));
}
