//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Liveness check
//! GET  /health/ready             - Readiness check (storefront API reachable)
//!
//! # Auth (token issued by the storefront API)
//! GET  /auth/login               - Login page
//! POST /auth/login               - Submit credentials
//! POST /auth/logout              - Logout
//!
//! # Catalog
//! GET  /                         - Redirects to /list
//! GET  /add                      - Add product form
//! POST /add                      - Create product (multipart, up to 5 images)
//! GET  /list                     - Product cards
//! POST /list/{id}/remove         - Delete product
//! GET  /list/{id}/edit           - Edit product form
//! POST /list/{id}/edit           - Replace product fields
//!
//! # Orders
//! GET  /orders?month=&date=      - Month calendar, selected day's orders
//! POST /orders/{id}/status       - Change fulfillment status
//!
//! # Customers and reporting
//! GET  /users                    - Registered users
//! GET  /analysis                 - Sales charts
//! GET  /invoice?q=               - Invoices, filtered by customer
//! GET  /invoice/{id}/download    - Redirect to the invoice PDF
//!
//! # Storefront content
//! GET  /hero, POST /hero         - Home page hero media and title
//! GET  /about, POST /about       - About page image
//! ```

pub mod analytics;
pub mod auth;
pub mod content;
pub mod dashboard;
pub mod forms;
pub mod health;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Every admin route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(users::router())
        .merge(analytics::router())
        .merge(content::router())
        .merge(invoices::router())
}
