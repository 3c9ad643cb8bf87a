//! Invoice records and the invoice search filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{InvoiceId, Price, timestamp};

/// Directory on the API host where generated PDFs are served from.
pub const INVOICE_DIR: &str = "uploads/invoices";

/// An invoice as returned by `api/order/invoices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: InvoiceId,
    #[serde(default)]
    pub user: Option<InvoiceCustomer>,
    #[serde(default)]
    pub amount: Price,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Customer details populated onto an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCustomer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// PDF file name for an invoice id, e.g. `Invoice-65f0a1.pdf`.
#[must_use]
pub fn invoice_file_name(id: &InvoiceId) -> String {
    format!("Invoice-{id}.pdf")
}

/// Path of an invoice PDF relative to the API base URL.
#[must_use]
pub fn invoice_file_path(id: &InvoiceId) -> String {
    format!("{INVOICE_DIR}/{}", invoice_file_name(id))
}

impl Invoice {
    #[must_use]
    pub fn file_name(&self) -> String {
        invoice_file_name(&self.id)
    }

    #[must_use]
    pub fn file_path(&self) -> String {
        invoice_file_path(&self.id)
    }

    /// Customer name, empty when the user was not populated.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .unwrap_or_default()
    }

    /// Customer email, empty when the user was not populated.
    #[must_use]
    pub fn customer_email(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        self.customer_name().to_lowercase().contains(needle)
            || self.customer_email().to_lowercase().contains(needle)
    }
}

/// Keep invoices whose customer name or email contains `term`, ignoring case.
///
/// A blank term keeps everything.
#[must_use]
pub fn filter_invoices<'a>(invoices: &'a [Invoice], term: &str) -> Vec<&'a Invoice> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return invoices.iter().collect();
    }
    invoices.iter().filter(|inv| inv.matches(&needle)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn invoices() -> Vec<Invoice> {
        serde_json::from_value(json!([
            {"_id": "i1", "user": {"name": "Alice", "email": "alice@shop.test"}, "amount": 120, "createdAt": "2024-04-01T09:00:00Z"},
            {"_id": "i2", "user": {"name": "Bob", "email": "bob@shop.test"}, "amount": 80.5},
            {"_id": "i3", "amount": 10}
        ]))
        .unwrap()
    }

    #[test]
    fn test_filter_by_name() {
        let all = invoices();
        let hits: Vec<&str> = filter_invoices(&all, "ali")
            .iter()
            .map(|i| i.customer_name())
            .collect();
        assert_eq!(hits, vec!["Alice"]);
    }

    #[test]
    fn test_filter_by_email_ignores_case() {
        let all = invoices();
        let hits = filter_invoices(&all, "BOB@SHOP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "i2");
    }

    #[test]
    fn test_blank_term_keeps_everything() {
        let all = invoices();
        assert_eq!(filter_invoices(&all, "  ").len(), 3);
    }

    #[test]
    fn test_missing_user_never_matches() {
        let all = invoices();
        assert!(filter_invoices(&all, "i3").is_empty());
        assert_eq!(all[2].customer_email(), "");
    }

    #[test]
    fn test_file_path() {
        let all = invoices();
        assert_eq!(all[0].file_name(), "Invoice-i1.pdf");
        assert_eq!(all[0].file_path(), "uploads/invoices/Invoice-i1.pdf");
    }
}
