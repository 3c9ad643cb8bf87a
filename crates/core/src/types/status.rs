//! Order fulfillment status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One stage in the fixed, ordered fulfillment sequence.
///
/// The wire format is the human-readable label the storefront API stores
/// (`"Order Placed"`, `"Out for Delivery"`, ...). Labels the admin does not know
/// are preserved in [`OrderStatus::Other`] so that a single unexpected value
/// never prevents the order list from loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    OrderPlaced,
    Dispatched,
    Shipping,
    OutForDelivery,
    Delivered,
    /// A status label outside the known sequence, kept verbatim.
    Other(String),
}

impl OrderStatus {
    /// The known stages, in fulfillment order.
    pub const SEQUENCE: [Self; 5] = [
        Self::OrderPlaced,
        Self::Dispatched,
        Self::Shipping,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Wire/display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::OrderPlaced => "Order Placed",
            Self::Dispatched => "Dispatched",
            Self::Shipping => "Shipping",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Other(label) => label,
        }
    }

    /// Position in [`Self::SEQUENCE`], or `None` for unknown labels.
    #[must_use]
    pub fn stage(&self) -> Option<usize> {
        Self::SEQUENCE.iter().position(|s| s == self)
    }

    /// Tailwind badge classes for the status pill.
    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::OrderPlaced => "bg-gray-100 text-gray-700",
            Self::Dispatched | Self::Shipping => "bg-blue-100 text-blue-700",
            Self::OutForDelivery => "bg-yellow-100 text-yellow-700",
            Self::Delivered => "bg-green-100 text-green-700",
            Self::Other(_) => "bg-purple-100 text-purple-700",
        }
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        Self::SEQUENCE
            .into_iter()
            .find(|s| s.label() == label)
            .unwrap_or(Self::Other(label))
    }
}

impl From<&str> for OrderStatus {
    fn from(label: &str) -> Self {
        Self::from(label.to_owned())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
