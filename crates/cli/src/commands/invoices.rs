//! `invoices search|url`.

use atelier_admin::api::ApiClient;
use atelier_core::InvoiceId;
use atelier_core::invoices::filter_invoices;

use super::CliError;

pub async fn search(api: &ApiClient, term: &str) -> Result<Vec<String>, CliError> {
    let invoices = api.list_invoices().await?;
    Ok(filter_invoices(&invoices, term)
        .into_iter()
        .map(|invoice| {
            format!(
                "{}\t{}\t{}\t{}",
                invoice.id,
                invoice.customer_name(),
                invoice.customer_email(),
                invoice.amount,
            )
        })
        .collect())
}

pub fn url(api: &ApiClient, id: &InvoiceId) -> Result<Vec<String>, CliError> {
    Ok(vec![api.invoice_url(id)?.to_string()])
}
