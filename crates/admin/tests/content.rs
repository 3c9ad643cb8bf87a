//! Hero and about page uploads.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn hero_upload_forwards_file_and_title() {
    let mut app = TestApp::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/hero"))
        .and(body_string_contains("Spring Edit"))
        .and(body_string_contains("hero.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&app.api)
        .await;

    let response = app
        .post_multipart_with_files(
            "/hero",
            &[("title", "Spring Edit")],
            &[("file", "hero.png", "hero-bytes")],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/hero"));
    let page = app.get("/hero").await;
    assert!(page.body.contains("Hero updated successfully"));
    app.api.verify().await;
}

#[tokio::test]
async fn hero_without_file_is_rejected_locally() {
    let mut app = TestApp::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/hero"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&app.api)
        .await;

    let response = app.post_multipart("/hero", &[("title", "Spring Edit")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Please select a file and enter a title"));
    assert!(response.body.contains("Spring Edit"));
    app.api.verify().await;
}

#[tokio::test]
async fn hero_without_title_is_rejected_locally() {
    let mut app = TestApp::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/hero"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&app.api)
        .await;

    let response = app
        .post_multipart_with_files("/hero", &[("title", "  ")], &[("file", "hero.png", "hero-bytes")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Please select a file and enter a title"));
    app.api.verify().await;
}

#[tokio::test]
async fn about_upload_confirms() {
    let mut app = TestApp::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/about"))
        .and(body_string_contains("about.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&app.api)
        .await;

    let response = app
        .post_multipart_with_files("/about", &[], &[("file", "about.png", "about-bytes")])
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/about"));
    let page = app.get("/about").await;
    assert!(page.body.contains("About image updated successfully"));
    app.api.verify().await;
}

#[tokio::test]
async fn about_without_file_is_rejected_locally() {
    let mut app = TestApp::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&app.api)
        .await;

    // Browsers send an empty part for an untouched file input.
    let response = app
        .post_multipart_with_files("/about", &[], &[("file", "", "")])
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/about"));
    let page = app.get("/about").await;
    assert!(page.body.contains("Please select an image"));
    app.api.verify().await;
}
