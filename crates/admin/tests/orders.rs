//! Orders calendar and status changes.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use common::{ADMIN_TOKEN, TestApp, mount_orders, mount_products};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// 2024-05-02T10:00:00Z
const MAY_2: i64 = 1_714_644_000_000;
/// 2024-05-03T10:00:00Z
const MAY_3: i64 = 1_714_730_400_000;

fn order(id: &str, date: i64, status: &str) -> Value {
    json!({
        "_id": id,
        "userId": {"_id": "u1", "name": "Ada Lovelace", "email": "ada@shop.test"},
        "address": {"street": "1 Loom St", "city": "London", "pincode": "N1", "phone": "0123"},
        "items": [{"_id": "p1", "name": "Silk Kurta", "price": 40, "quantity": 2, "size": "M"}],
        "paymentMethod": "COD",
        "payment": false,
        "amount": 90,
        "status": status,
        "date": date,
    })
}

#[tokio::test]
async fn selected_day_lists_only_its_orders() {
    let mut app = TestApp::logged_in().await;
    mount_orders(
        &app.api,
        json!([
            order("order-aaaaaa", MAY_2, "Order Placed"),
            order("order-bbbbbb", MAY_3, "Order Placed"),
            order("order-cccccc", MAY_2, "Delivered"),
        ]),
    )
    .await;
    mount_products(&app.api, json!([])).await;

    let response = app.get("/orders?month=2024-05&date=2024-05-02").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("May 2024"));
    assert!(response.body.contains(r#"id="order-order-aaaaaa""#));
    assert!(response.body.contains(r#"id="order-order-cccccc""#));
    assert!(!response.body.contains(r#"id="order-order-bbbbbb""#));
    assert!(response.body.contains("Silk Kurta"));
    assert!(response.body.contains("Ada Lovelace"));
}

#[tokio::test]
async fn month_without_selection_lists_no_orders() {
    let mut app = TestApp::logged_in().await;
    mount_orders(&app.api, json!([order("order-aaaaaa", MAY_2, "Order Placed")])).await;

    let response = app.get("/orders?month=2024-05").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("#aaaaaa"));
    assert!(!response.body.contains(r#"id="order-order-aaaaaa""#));
}

#[tokio::test]
async fn status_change_is_sent_and_confirmed() {
    let mut app = TestApp::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/order/status"))
        .and(header("token", ADMIN_TOKEN))
        .and(body_json(json!({"orderId": "o1", "status": "Shipping"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&app.api)
        .await;
    mount_orders(&app.api, json!([order("o1", MAY_2, "Shipping")])).await;
    mount_products(&app.api, json!([])).await;

    let response = app
        .post_form(
            "/orders/o1/status",
            "status=Shipping&month=2024-05&date=2024-05-02",
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let location = response.location.unwrap();
    assert_eq!(location, "/orders?month=2024-05&date=2024-05-02");

    let page = app.get(&location).await;
    assert!(page.body.contains("Order status updated"));
    assert!(page.body.contains(r#"value="Shipping" selected"#));
}

#[tokio::test]
async fn failed_status_change_keeps_the_previous_status() {
    let mut app = TestApp::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/order/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "message": "Order not found"})),
        )
        .mount(&app.api)
        .await;
    mount_orders(&app.api, json!([order("o1", MAY_2, "Order Placed")])).await;
    mount_products(&app.api, json!([])).await;

    let response = app
        .post_form(
            "/orders/o1/status",
            "status=Shipping&month=2024-05&date=2024-05-02",
        )
        .await;
    let location = response.location.unwrap();

    let page = app.get(&location).await;
    assert!(page.body.contains("Failed to update status"));
    assert!(page.body.contains(r#"value="Order Placed" selected"#));
    assert!(!page.body.contains(r#"value="Shipping" selected"#));
}

#[tokio::test]
async fn forged_return_dates_fall_back_to_the_orders_page() {
    let mut app = TestApp::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/order/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&app.api)
        .await;

    let response = app
        .post_form(
            "/orders/o1/status",
            "status=Delivered&month=https%3A%2F%2Fevil.test&date=nope",
        )
        .await;

    assert_eq!(response.location.as_deref(), Some("/orders"));
}

#[tokio::test]
async fn broken_records_do_not_hide_good_orders() {
    let mut app = TestApp::logged_in().await;
    mount_orders(
        &app.api,
        json!([
            order("order-aaaaaa", MAY_2, "Order Placed"),
            {"_id": "order-bbbbbb"},
            {"amount": 10, "date": MAY_2},
        ]),
    )
    .await;
    mount_products(&app.api, json!([])).await;

    let response = app.get("/orders?month=2024-05&date=2024-05-02").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"id="order-order-aaaaaa""#));
    assert!(!response.body.contains("#bbbbbb"));
    assert!(!response.body.contains("Unexpected API response"));
}
