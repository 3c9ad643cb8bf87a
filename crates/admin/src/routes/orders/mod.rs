//! Orders route handlers.
//!
//! The calendar page and the status update action.

mod actions;
mod list;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub use actions::{STATUS_FAILED, STATUS_UPDATED, update_status};
pub use list::{OrdersIndexTemplate, index};
pub use types::{LineItemView, OrderView, OrdersQuery, ProductLookup, StatusInput};

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(index))
        .route("/orders/{id}/status", post(update_status))
}
