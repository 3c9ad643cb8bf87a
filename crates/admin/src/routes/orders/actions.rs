//! Single order action handlers.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use tracing::instrument;

use atelier_core::{OrderId, OrderStatus};

use crate::components::calendar::{day_href, parse_date, parse_month};
use crate::middleware::RequireAdminAuth;
use crate::services::Notifier;
use crate::state::AppState;

use super::types::StatusInput;

/// Toast shown after a successful status change.
pub const STATUS_UPDATED: &str = "Order status updated";
/// Toast shown when the API refuses or cannot be reached.
pub const STATUS_FAILED: &str = "Failed to update status";

/// Move an order to a new status, then reload the calendar.
///
/// POST /orders/{id}/status
#[instrument(skip(admin, state, notifier, input))]
pub async fn update_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    Path(id): Path<OrderId>,
    Form(input): Form<StatusInput>,
) -> Redirect {
    let back = return_to(&input);
    let label = input.status.trim();
    if label.is_empty() {
        notifier.error(STATUS_FAILED).await;
        return Redirect::to(&back);
    }

    let status = OrderStatus::from(label);
    match state
        .api()
        .update_order_status(&admin.token(), &id, &status)
        .await
    {
        Ok(()) => notifier.success(STATUS_UPDATED).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to update order status");
            notifier.error(STATUS_FAILED).await;
        }
    }

    Redirect::to(&back)
}

/// Calendar URL the status form was submitted from. Only well-formed values
/// are echoed back.
fn return_to(input: &StatusInput) -> String {
    if let Some(day) = input.date.as_deref().and_then(parse_date) {
        return day_href(day);
    }
    match input.month.as_deref().and_then(parse_month) {
        Some(month) => format!("/orders?month={}", month.format("%Y-%m")),
        None => "/orders".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(month: Option<&str>, date: Option<&str>) -> StatusInput {
        StatusInput {
            status: "Shipping".to_string(),
            month: month.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_return_to_selected_day() {
        assert_eq!(
            return_to(&input(Some("2024-05"), Some("2024-05-02"))),
            "/orders?month=2024-05&date=2024-05-02"
        );
    }

    #[test]
    fn test_return_to_ignores_malformed_values() {
        assert_eq!(return_to(&input(Some("2024-05"), None)), "/orders?month=2024-05");
        assert_eq!(
            return_to(&input(Some("//evil.test"), Some("x"))),
            "/orders"
        );
    }
}
