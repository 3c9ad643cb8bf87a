//! Analytics and invoices.

use atelier_core::InvoiceId;
use atelier_core::analytics::AnalyticsReport;
use atelier_core::invoices::{Invoice, invoice_file_path};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use super::{ApiClient, ApiError, send_json, with_token};

#[derive(Deserialize)]
struct InvoicesResponse {
    #[serde(default, deserialize_with = "super::skip_invalid")]
    invoices: Vec<Invoice>,
}

impl ApiClient {
    /// Fetch the aggregated sales report.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip_all)]
    pub async fn analysis(&self, token: &SecretString) -> Result<AnalyticsReport, ApiError> {
        send_json(with_token(self.get("api/analysis")?, token)).await
    }

    /// List every invoice. This endpoint is public.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self))]
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        let response: InvoicesResponse = send_json(self.get("api/order/invoices")?).await?;
        tracing::debug!(count = response.invoices.len(), "Fetched invoices");
        Ok(response.invoices)
    }

    /// Static URL of an invoice PDF on the API host.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the id produces an unjoinable path.
    pub fn invoice_url(&self, id: &InvoiceId) -> Result<Url, ApiError> {
        self.url(&invoice_file_path(id))
    }
}
