//! Orders, line item interpretation and calendar grouping.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::types::{OrderId, OrderStatus, Price, ProductId, UserId, timestamp};

/// Keys that identify the product rather than describe the selection.
const IDENTIFIER_KEYS: &[&str] = &["id", "_id", "productId", "name", "image"];

/// Product attributes that may be copied onto an item and are never a size.
const ATTRIBUTE_KEYS: &[&str] = &[
    "price",
    "description",
    "category",
    "sizes",
    "bestseller",
    "stock",
    "date",
    "subCategory",
    "quantity",
    "size",
];

/// An order as returned by `api/order/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default, rename = "userId")]
    pub customer: Option<OrderCustomer>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default, rename = "payment")]
    pub paid: bool,
    #[serde(default)]
    pub amount: Price,
    #[serde(default)]
    pub status: OrderStatus,
    /// Missing on a few legacy records; those never appear on the calendar.
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub date: Option<DateTime<Utc>>,
}

impl Order {
    /// Calendar day the order was placed on (UTC).
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.as_ref().map(DateTime::date_naive)
    }

    /// Short reference used as the calendar event title, e.g. `#a1b2c3`.
    #[must_use]
    pub fn short_ref(&self) -> String {
        let id = self.id.as_str();
        let start = id
            .char_indices()
            .rev()
            .nth(5)
            .map_or(0, |(index, _)| index);
        format!("#{}", id.get(start..).unwrap_or(id))
    }

    /// Customer display name, when the API populated the user reference.
    #[must_use]
    pub fn customer_name(&self) -> Option<&str> {
        match &self.customer {
            Some(OrderCustomer::Populated { name, .. }) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    /// Customer email, when the API populated the user reference.
    #[must_use]
    pub fn customer_email(&self) -> Option<&str> {
        match &self.customer {
            Some(OrderCustomer::Populated { email, .. }) if !email.is_empty() => Some(email),
            _ => None,
        }
    }
}

/// The `userId` field: either a bare reference or the populated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderCustomer {
    Populated {
        #[serde(default, rename = "_id")]
        id: Option<UserId>,
        #[serde(default)]
        name: String,
        #[serde(default)]
        email: String,
    },
    Reference(UserId),
}

/// Delivery address attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "lenient_string")]
    pub street: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pincode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
}

impl Address {
    /// Single-line address: street, city and postcode, skipping blanks.
    #[must_use]
    pub fn one_line(&self) -> String {
        [&self.street, &self.city, &self.pincode]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Accept strings, numbers or null for free-text address fields.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// A line item.
///
/// The API stores items loosely: some carry explicit `quantity`/`size` keys,
/// others carry the product reference plus a single `{<size>: <quantity>}`
/// entry. The record is kept as a JSON object and interpreted on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItem(Map<String, Value>);

/// Size and quantity chosen for a line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelection {
    pub size: Option<String>,
    pub quantity: u32,
}

impl OrderItem {
    /// Wrap a raw item record.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Referenced product: `id`, then `_id`, then `productId`.
    #[must_use]
    pub fn product_id(&self) -> Option<ProductId> {
        ["id", "_id", "productId"]
            .into_iter()
            .find_map(|key| self.0.get(key).and_then(Value::as_str))
            .filter(|id| !id.is_empty())
            .map(ProductId::from)
    }

    /// Product name copied onto the item, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Unit price copied onto the item, if any.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.0
            .get("price")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// First image copied onto the item, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match self.0.get("image") {
            Some(Value::String(url)) => Some(url),
            Some(Value::Array(urls)) => urls.first().and_then(Value::as_str),
            _ => None,
        }
    }

    /// Derive the selected size and quantity.
    ///
    /// Explicit `quantity` wins. Otherwise the first key that is neither an
    /// identifier nor a known product attribute and holds a number is the
    /// size label, and its value is the quantity. Anything else counts as one
    /// unit.
    #[must_use]
    pub fn selection(&self) -> ItemSelection {
        let explicit_size = self
            .0
            .get("size")
            .and_then(Value::as_str)
            .map(str::to_string);

        if let Some(quantity) = self.0.get("quantity").and_then(as_quantity) {
            return ItemSelection {
                size: explicit_size,
                quantity,
            };
        }

        let size_entry = self.0.iter().find_map(|(key, value)| {
            let excluded = IDENTIFIER_KEYS.contains(&key.as_str())
                || ATTRIBUTE_KEYS.contains(&key.as_str());
            if excluded {
                return None;
            }
            as_quantity(value).map(|quantity| (key.clone(), quantity))
        });

        match size_entry {
            Some((size, quantity)) => ItemSelection {
                size: Some(size),
                quantity,
            },
            None => ItemSelection {
                size: explicit_size,
                quantity: 1,
            },
        }
    }

    /// Quantity only, see [`Self::selection`].
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.selection().quantity
    }
}

/// Positive whole quantities; zero or non-numeric values do not qualify.
fn as_quantity(value: &Value) -> Option<u32> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)
    })?;
    u32::try_from(n).ok().filter(|q| *q > 0)
}

/// Bucket orders by the calendar day they were placed on. Orders without a
/// date are left out.
#[must_use]
pub fn group_by_day(orders: &[Order]) -> BTreeMap<NaiveDate, Vec<&Order>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Order>> = BTreeMap::new();
    for order in orders {
        if let Some(day) = order.day() {
            days.entry(day).or_default().push(order);
        }
    }
    days
}

/// Orders placed on `day`, in list order.
#[must_use]
pub fn orders_on(orders: &[Order], day: NaiveDate) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| order.day() == Some(day))
        .collect()
}
