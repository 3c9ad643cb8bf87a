//! Type definitions and conversions for order views.

use std::collections::HashMap;

use serde::Deserialize;

use atelier_core::catalog::{Product, resolve_asset_url};
use atelier_core::orders::{Order, OrderItem};
use atelier_core::{OrderStatus, Price, ProductId, timestamp};

// =============================================================================
// Query Parameters
// =============================================================================

/// Calendar position: `?month=YYYY-MM&date=YYYY-MM-DD`.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    pub month: Option<String>,
    pub date: Option<String>,
}

/// Status selector submission. `month` and `date` bring the admin back to
/// the same calendar view.
#[derive(Debug, Deserialize)]
pub struct StatusInput {
    #[serde(default)]
    pub status: String,
    pub month: Option<String>,
    pub date: Option<String>,
}

// =============================================================================
// View Types
// =============================================================================

/// An option of the status `<select>`.
#[derive(Debug, Clone)]
pub struct StatusOption {
    pub label: String,
    pub selected: bool,
}

/// A line item with the product details resolved.
#[derive(Debug, Clone)]
pub struct LineItemView {
    pub name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub size: Option<String>,
    pub unit_price: String,
    pub line_total: String,
}

/// An order placed on the selected day.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub short_ref: String,
    pub customer_name: String,
    pub customer_email: String,
    pub address: String,
    pub phone: String,
    pub items: Vec<LineItemView>,
    pub item_count: u64,
    pub payment_method: String,
    pub paid: bool,
    pub amount: String,
    pub placed_on: String,
    pub status: String,
    pub status_class: &'static str,
    pub status_options: Vec<StatusOption>,
}

/// Products by id, for filling in details the order items do not carry.
pub struct ProductLookup<'a> {
    products: HashMap<&'a ProductId, &'a Product>,
    api_base: &'a str,
}

impl<'a> ProductLookup<'a> {
    #[must_use]
    pub fn new(products: &'a [Product], api_base: &'a str) -> Self {
        Self {
            products: products.iter().map(|p| (&p.id, p)).collect(),
            api_base,
        }
    }

    fn product(&self, item: &OrderItem) -> Option<&'a Product> {
        item.product_id()
            .and_then(|id| self.products.get(&id).copied())
    }

    /// Resolve one line item: item fields win, catalog fields fill the gaps.
    #[must_use]
    pub fn line_item(&self, item: &OrderItem) -> LineItemView {
        let product = self.product(item);
        let selection = item.selection();

        let name = item
            .name()
            .map(str::to_string)
            .or_else(|| product.map(|p| p.name.clone()))
            .unwrap_or_else(|| "Unknown product".to_string());
        let image_url = item
            .image()
            .map(|reference| resolve_asset_url(self.api_base, reference))
            .or_else(|| product.and_then(|p| p.primary_image_url(self.api_base)));
        let price = item
            .price()
            .or_else(|| product.map(|p| p.price))
            .unwrap_or(Price::ZERO);

        LineItemView {
            name,
            image_url,
            quantity: selection.quantity,
            size: selection.size,
            unit_price: price.display(),
            line_total: price.line_total(selection.quantity).display(),
        }
    }

    /// Build the full view of an order.
    #[must_use]
    pub fn order(&self, order: &Order) -> OrderView {
        let items: Vec<LineItemView> = order.items.iter().map(|i| self.line_item(i)).collect();
        OrderView {
            id: order.id.to_string(),
            short_ref: order.short_ref(),
            customer_name: order.customer_name().unwrap_or("Guest").to_string(),
            customer_email: order.customer_email().unwrap_or_default().to_string(),
            address: order.address.one_line(),
            phone: order.address.phone.clone(),
            item_count: items.iter().map(|i| u64::from(i.quantity)).sum(),
            items,
            payment_method: order.payment_method.clone(),
            paid: order.paid,
            amount: order.amount.display(),
            placed_on: order
                .date
                .as_ref()
                .map(timestamp::display_date)
                .unwrap_or_default(),
            status: order.status.label().to_string(),
            status_class: order.status.badge_class(),
            status_options: status_options(&order.status),
        }
    }
}

/// The known stages in order, plus the current one when it is unknown.
#[must_use]
pub fn status_options(current: &OrderStatus) -> Vec<StatusOption> {
    let mut options: Vec<StatusOption> = OrderStatus::SEQUENCE
        .iter()
        .map(|status| StatusOption {
            label: status.label().to_string(),
            selected: status == current,
        })
        .collect();
    if current.stage().is_none() {
        options.push(StatusOption {
            label: current.label().to_string(),
            selected: true,
        });
    }
    options
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;

    fn catalog() -> Vec<Product> {
        serde_json::from_value(json!([
            {"_id": "p1", "name": "Silk Kaftan", "price": 120, "image": ["/uploads/kaftan.jpg"]}
        ]))
        .unwrap()
    }

    #[test]
    fn test_line_item_uses_catalog_for_missing_fields() {
        let products = catalog();
        let lookup = ProductLookup::new(&products, "http://api.test/");
        let item: OrderItem = serde_json::from_value(json!({"_id": "p1", "M": 2})).unwrap();
        let view = lookup.line_item(&item);
        assert_eq!(view.name, "Silk Kaftan");
        assert_eq!(view.quantity, 2);
        assert_eq!(view.size.as_deref(), Some("M"));
        assert_eq!(view.line_total, "£240.00");
        assert_eq!(
            view.image_url.as_deref(),
            Some("http://api.test/uploads/kaftan.jpg")
        );
    }

    #[test]
    fn test_line_item_without_product() {
        let lookup = ProductLookup::new(&[], "http://api.test/");
        let item: OrderItem =
            serde_json::from_value(json!({"name": "Gown", "price": 50, "quantity": 3})).unwrap();
        let view = lookup.line_item(&item);
        assert_eq!(view.name, "Gown");
        assert_eq!(view.line_total, "£150.00");
        assert!(view.image_url.is_none());
    }

    #[test]
    fn test_item_count_does_not_wrap() {
        let lookup = ProductLookup::new(&[], "http://api.test/");
        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "items": [
                {"name": "Gown", "price": 50, "quantity": 4_000_000_000_u64},
                {"name": "Suit", "price": 70, "quantity": 4_000_000_000_u64}
            ]
        }))
        .unwrap();

        let view = lookup.order(&order);
        assert_eq!(view.item_count, 8_000_000_000);
        assert_eq!(view.placed_on, "");
    }

    #[test]
    fn test_status_options_keep_unknown_status() {
        let options = status_options(&OrderStatus::from("Returned"));
        assert_eq!(options.len(), 6);
        assert!(options[5].selected);
        assert_eq!(options[5].label, "Returned");

        let options = status_options(&OrderStatus::Shipping);
        assert_eq!(options.len(), 5);
        assert!(options[2].selected);
    }
}
