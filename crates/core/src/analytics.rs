//! Sales analytics returned by `api/analysis`.
//!
//! The server computes every aggregate; this module only decodes the report
//! and exposes it in chart-friendly shapes.

use serde::{Deserialize, Serialize};

/// Sales total for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub sales: f64,
}

/// One slice of the profit/loss breakdown, e.g. `{"type": "Profit", "value": 1200}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossEntry {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: f64,
}

/// Units sold for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sales: f64,
}

/// Scalar totals some server versions send instead of a profit/loss series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    pub orders: u64,
    pub sales: f64,
}

/// The decoded analysis payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    #[serde(default)]
    pub sales_over_time: Vec<MonthlySales>,
    #[serde(default)]
    pub profit_loss: Vec<ProfitLossEntry>,
    #[serde(default)]
    pub top_products: Vec<ProductSales>,
    #[serde(default)]
    pub total_orders: Option<u64>,
    #[serde(default)]
    pub total_sales: Option<f64>,
}

impl AnalyticsReport {
    /// Scalar totals, when the server sent either of them.
    #[must_use]
    pub fn totals(&self) -> Option<SalesTotals> {
        if self.total_orders.is_none() && self.total_sales.is_none() {
            return None;
        }
        Some(SalesTotals {
            orders: self.total_orders.unwrap_or_default(),
            sales: self.total_sales.unwrap_or_default(),
        })
    }

    /// Whether there is nothing at all to chart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sales_over_time.is_empty()
            && self.profit_loss.is_empty()
            && self.top_products.is_empty()
            && self.totals().is_none()
    }
}
