//! `products list|remove`.

use atelier_admin::api::ApiClient;
use atelier_core::ProductId;
use atelier_core::catalog::Product;
use secrecy::SecretString;

use super::CliError;

/// One tab-separated row per product.
pub async fn list(api: &ApiClient) -> Result<Vec<String>, CliError> {
    let products = api.list_products().await?;
    tracing::info!(count = products.len(), "Fetched products");
    Ok(products.iter().map(product_row).collect())
}

pub async fn remove(
    api: &ApiClient,
    token: &SecretString,
    id: ProductId,
) -> Result<Vec<String>, CliError> {
    let message = api.remove_product(token, &id).await?;
    Ok(vec![message.unwrap_or_else(|| format!("Removed {id}"))])
}

fn product_row(product: &Product) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}{}",
        product.id,
        product.name,
        product.price,
        product.category,
        product.sizes_display(),
        if product.bestseller { "\tbestseller" } else { "" },
    )
}
