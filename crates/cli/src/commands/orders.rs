//! `orders list|status`.

use atelier_admin::api::ApiClient;
use atelier_core::orders::{Order, orders_on};
use atelier_core::{OrderId, OrderStatus};
use chrono::NaiveDate;
use secrecy::SecretString;

use super::CliError;

pub async fn list(
    api: &ApiClient,
    token: &SecretString,
    date: Option<NaiveDate>,
) -> Result<Vec<String>, CliError> {
    let orders = api.list_orders(token).await?;
    let selected: Vec<&Order> = match date {
        Some(day) => orders_on(&orders, day),
        None => orders.iter().collect(),
    };
    tracing::info!(total = orders.len(), shown = selected.len(), "Fetched orders");
    Ok(selected.into_iter().map(order_row).collect())
}

/// Only the known fulfillment stages are accepted here.
pub async fn set_status(
    api: &ApiClient,
    token: &SecretString,
    id: OrderId,
    label: &str,
) -> Result<Vec<String>, CliError> {
    let status = parse_status(label)?;
    api.update_order_status(token, &id, &status).await?;
    Ok(vec![format!("{id}\t{status}")])
}

fn parse_status(label: &str) -> Result<OrderStatus, CliError> {
    OrderStatus::SEQUENCE
        .into_iter()
        .find(|status| status.label().eq_ignore_ascii_case(label.trim()))
        .ok_or_else(|| {
            let known: Vec<&str> = OrderStatus::SEQUENCE.iter().map(OrderStatus::label).collect();
            CliError::InvalidArgument(format!(
                "Unknown status '{label}'. Valid statuses: {}",
                known.join(", ")
            ))
        })
}

fn order_row(order: &Order) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        order.id,
        order.day().map(|day| day.to_string()).unwrap_or_default(),
        order.customer_name().unwrap_or("Guest"),
        order.items.len(),
        order.amount,
        order.status,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_ignoring_case() {
        assert!(matches!(
            parse_status("out for delivery"),
            Ok(OrderStatus::OutForDelivery)
        ));
        assert!(matches!(parse_status(" Shipping "), Ok(OrderStatus::Shipping)));
    }

    #[test]
    fn unknown_status_lists_valid_ones() {
        let err = parse_status("Packing").unwrap_err();
        assert!(err.to_string().contains("Order Placed, Dispatched"));
    }
}
