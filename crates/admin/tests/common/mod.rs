//! Shared harness: the admin router driven in-process against a wiremock
//! stand-in for the storefront API.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use atelier_admin::config::AdminConfig;
use atelier_admin::middleware::SESSION_COOKIE_NAME;
use atelier_admin::state::AppState;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ADMIN_EMAIL: &str = "admin@shop.test";
pub const ADMIN_TOKEN: &str = "tok-123";

const BOUNDARY: &str = "atelier-test-boundary";

/// What a test needs from a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// The admin app plus a mock API and a cookie jar of one.
pub struct TestApp {
    pub api: MockServer,
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    pub async fn new() -> Self {
        let api = MockServer::start().await;
        let uri = api.uri();
        let config = AdminConfig::from_vars(|key| match key {
            "STORE_API_URL" => Some(uri.clone()),
            "STORE_API_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        })
        .expect("test config");
        let state = AppState::new(config).expect("test state");

        Self {
            api,
            router: atelier_admin::app(state),
            cookie: None,
        }
    }

    /// A fresh app with an admin already logged in.
    pub async fn logged_in() -> Self {
        let mut app = Self::new().await;
        app.login().await;
        app
    }

    pub async fn login(&mut self) {
        Mock::given(method("POST"))
            .and(path("/api/user/admin"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "token": ADMIN_TOKEN})),
            )
            .up_to_n_times(1)
            .mount(&self.api)
            .await;

        let response = self
            .post_form(
                "/auth/login",
                &format!("email={ADMIN_EMAIL}&password=secret"),
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location.as_deref(), Some("/"));
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, body: &str) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// POST `multipart/form-data` made of plain text fields.
    pub async fn post_multipart(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.post_multipart_with_files(uri, fields, &[]).await
    }

    /// POST `multipart/form-data` with text fields followed by file parts,
    /// each given as `(field, file name, contents)`.
    pub async fn post_multipart_with_files(
        &mut self,
        uri: &str,
        fields: &[(&str, &str)],
        files: &[(&str, &str, &str)],
    ) -> TestResponse {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        for (name, file_name, contents) in files {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n{contents}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        let request = self
            .request("POST", uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(SESSION_COOKIE_NAME))
        {
            self.cookie = set_cookie.split(';').next().map(str::to_string);
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// Mount a `GET api/product/list` response.
pub async fn mount_products(api: &MockServer, products: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "products": products})),
        )
        .mount(api)
        .await;
}

/// Mount a `POST api/order/list` response.
pub async fn mount_orders(api: &MockServer, orders: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/order/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "orders": orders})),
        )
        .mount(api)
        .await;
}
