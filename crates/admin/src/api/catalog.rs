//! Product catalog endpoints.

use atelier_core::ProductId;
use atelier_core::catalog::{MAX_PRODUCT_IMAGES, NewProduct, Product, ProductUpdate};
use reqwest::multipart::Form;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ApiClient, ApiError, UploadFile, send_expecting_ok, send_json, with_token};

#[derive(Deserialize)]
struct ProductsResponse {
    #[serde(default, deserialize_with = "super::skip_invalid")]
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct ProductResponse {
    product: Option<Product>,
}

#[derive(Serialize)]
struct RemoveRequest<'a> {
    id: &'a ProductId,
}

impl ApiClient {
    /// Fetch the whole catalog. This endpoint is public.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response: ProductsResponse = send_json(self.get("api/product/list")?).await?;
        tracing::debug!(count = response.products.len(), "Fetched products");
        Ok(response.products)
    }

    /// Fetch a single product; `None` when the API has no such product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, ApiError> {
        let path = format!("api/product/{id}");
        let response: ProductResponse = send_json(self.get(&path)?).await?;
        Ok(response.product)
    }

    /// Create a product with up to five images.
    ///
    /// Returns the server's confirmation message, if it sent one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self, token, product, images), fields(name = %product.name, images = images.len()))]
    pub async fn add_product(
        &self,
        token: &SecretString,
        product: &NewProduct,
        images: Vec<UploadFile>,
    ) -> Result<Option<String>, ApiError> {
        let mut form = Form::new()
            .text("name", product.name.clone())
            .text("description", product.description.clone())
            .text("price", product.price.amount().to_string())
            .text("category", product.category.wire_name())
            .text("sizes", product.sizes_json())
            .text("bestseller", product.bestseller.to_string());

        for (index, image) in images.into_iter().take(MAX_PRODUCT_IMAGES).enumerate() {
            form = form.part(format!("image{}", index + 1), image.into_part()?);
        }

        let request = with_token(self.post("api/product/add")?, token).multipart(form);
        let message = send_expecting_ok(request).await?;
        tracing::info!("Product added");
        Ok(message)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self, token), fields(product_id = %id))]
    pub async fn remove_product(
        &self,
        token: &SecretString,
        id: &ProductId,
    ) -> Result<Option<String>, ApiError> {
        let request = with_token(self.post("api/product/remove")?, token).json(&RemoveRequest { id });
        let message = send_expecting_ok(request).await?;
        tracing::info!("Product removed");
        Ok(message)
    }

    /// Replace a product's editable fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self, token, update), fields(product_id = %update.id))]
    pub async fn update_product(
        &self,
        token: &SecretString,
        update: &ProductUpdate,
    ) -> Result<Option<String>, ApiError> {
        let request = with_token(self.post("api/product/update")?, token).json(update);
        let message = send_expecting_ok(request).await?;
        tracing::info!("Product updated");
        Ok(message)
    }
}
