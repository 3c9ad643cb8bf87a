//! Order endpoints.

use atelier_core::orders::Order;
use atelier_core::{OrderId, OrderStatus};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ApiClient, ApiError, send_expecting_ok, send_json, with_token};

#[derive(Deserialize)]
struct OrdersResponse {
    #[serde(default, deserialize_with = "super::skip_invalid")]
    orders: Vec<Order>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusRequest<'a> {
    order_id: &'a OrderId,
    status: &'a str,
}

impl ApiClient {
    /// List every order. An empty token yields an empty list without a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip_all)]
    pub async fn list_orders(&self, token: &SecretString) -> Result<Vec<Order>, ApiError> {
        if token.expose_secret().is_empty() {
            return Ok(Vec::new());
        }
        let request = with_token(self.post("api/order/list")?, token).json(&serde_json::json!({}));
        let response: OrdersResponse = send_json(request).await?;
        tracing::debug!(count = response.orders.len(), "Fetched orders");
        Ok(response.orders)
    }

    /// Move an order to a new fulfillment status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self, token), fields(order_id = %id, status = %status))]
    pub async fn update_order_status(
        &self,
        token: &SecretString,
        id: &OrderId,
        status: &OrderStatus,
    ) -> Result<(), ApiError> {
        let body = StatusRequest {
            order_id: id,
            status: status.label(),
        };
        send_expecting_ok(with_token(self.post("api/order/status")?, token).json(&body)).await?;
        tracing::info!("Order status updated");
        Ok(())
    }
}
