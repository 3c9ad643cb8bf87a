//! Invoices table with customer search and PDF download.

use askama::Template;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use atelier_core::InvoiceId;
use atelier_core::invoices::{Invoice, filter_invoices};
use atelier_core::timestamp;

use crate::components::Shell;
use crate::components::data_table::{DataTableConfig, invoices_table_config};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::services::Notifier;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct InvoiceSearch {
    pub q: Option<String>,
}

/// Invoice row for templates.
#[derive(Debug, Clone)]
pub struct InvoiceRow {
    pub id: String,
    pub file_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount: String,
    pub created_at: String,
    pub download_href: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            file_name: invoice.file_name(),
            customer_name: invoice.customer_name().to_string(),
            customer_email: invoice.customer_email().to_string(),
            amount: invoice.amount.display(),
            created_at: invoice
                .created_at
                .as_ref()
                .map(timestamp::display_date)
                .unwrap_or_default(),
            download_href: format!("/invoice/{}/download", invoice.id),
        }
    }
}

#[derive(Template)]
#[template(path = "invoices.html")]
struct InvoicesTemplate {
    shell: Shell,
    table_config: DataTableConfig,
    search: String,
    total: usize,
    invoices: Vec<InvoiceRow>,
}

/// Build the invoices router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/invoice", get(index))
        .route("/invoice/{id}/download", get(download))
}

/// GET /invoice?q=term
#[instrument(skip(admin, state, notifier))]
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    Query(query): Query<InvoiceSearch>,
) -> Html<String> {
    let search = query.q.unwrap_or_default();

    let all = match state.api().list_invoices().await {
        Ok(invoices) => invoices,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch invoices");
            notifier.error(e.user_message()).await;
            Vec::new()
        }
    };
    let invoices: Vec<InvoiceRow> = filter_invoices(&all, &search)
        .into_iter()
        .map(InvoiceRow::from)
        .collect();

    let template = InvoicesTemplate {
        shell: Shell::load("All Invoices", "/invoice", &admin, &notifier).await,
        table_config: invoices_table_config(),
        search,
        total: all.len(),
        invoices,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Send the browser to the PDF served by the API host.
///
/// GET /invoice/{id}/download
#[instrument(skip(state))]
async fn download(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<Redirect, AppError> {
    let url = state.api().invoice_url(&id)?;
    Ok(Redirect::to(url.as_str()))
}
