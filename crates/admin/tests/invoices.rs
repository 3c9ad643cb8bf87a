//! Invoice search and download links.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_invoices(app: &TestApp) {
    Mock::given(method("GET"))
        .and(path("/api/order/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "invoices": [
                {"_id": "i1", "user": {"name": "Alice Smith", "email": "alice@shop.test"}, "amount": 120, "createdAt": "2024-05-02T10:00:00Z"},
                {"_id": "i2", "user": {"name": "Bob Jones", "email": "bob@shop.test"}, "amount": 80, "createdAt": "2024-05-03T10:00:00Z"},
            ],
        })))
        .mount(&app.api)
        .await;
}

#[tokio::test]
async fn search_filters_by_customer() {
    let mut app = TestApp::logged_in().await;
    mount_invoices(&app).await;

    let response = app.get("/invoice?q=ali").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Alice Smith"));
    assert!(!response.body.contains("Bob Jones"));
}

#[tokio::test]
async fn empty_search_lists_everything() {
    let mut app = TestApp::logged_in().await;
    mount_invoices(&app).await;

    let response = app.get("/invoice").await;

    assert!(response.body.contains("Alice Smith"));
    assert!(response.body.contains("Bob Jones"));
}

#[tokio::test]
async fn download_redirects_to_the_pdf() {
    let mut app = TestApp::logged_in().await;

    let response = app.get("/invoice/i1/download").await;

    assert!(response.status.is_redirection());
    assert_eq!(
        response.location,
        Some(format!("{}/uploads/invoices/Invoice-i1.pdf", app.api.uri()))
    );
}
