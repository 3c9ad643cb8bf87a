//! Product catalog route handlers: add, list, edit and remove.

use askama::Template;
use axum::{
    Router,
    extract::{Multipart, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tracing::instrument;

use atelier_core::ProductId;
use atelier_core::catalog::{Category, MAX_PRODUCT_IMAGES, Product, ProductForm, Size};

use crate::components::Shell;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::CurrentAdmin;
use crate::routes::forms::MultipartForm;
use crate::services::Notifier;
use crate::state::AppState;

/// A category choice in the product form.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// A size checkbox in the product form.
#[derive(Debug, Clone)]
pub struct SizeOption {
    pub label: &'static str,
    pub checked: bool,
}

/// Form state shared by the add and edit pages.
#[derive(Debug, Clone)]
pub struct ProductFormView {
    pub name: String,
    pub description: String,
    pub price: String,
    pub bestseller: bool,
    pub categories: Vec<CategoryOption>,
    pub sizes: Vec<SizeOption>,
}

impl From<&ProductForm> for ProductFormView {
    fn from(form: &ProductForm) -> Self {
        let selected = form.category.parse::<Category>().ok();
        Self {
            name: form.name.clone(),
            description: form.description.clone(),
            price: form.price.clone(),
            bestseller: form.bestseller,
            categories: Category::ALL
                .iter()
                .map(|category| CategoryOption {
                    value: category.wire_name(),
                    label: category.label(),
                    selected: selected == Some(*category),
                })
                .collect(),
            sizes: Size::ALL
                .iter()
                .map(|size| SizeOption {
                    label: size.label(),
                    checked: form.has_size(size.label()),
                })
                .collect(),
        }
    }
}

/// Product card for the list page.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_url: Option<String>,
    pub bestseller: bool,
    pub stock: i64,
    pub stock_class: &'static str,
    pub sizes: String,
}

impl ProductCard {
    fn new(product: &Product, api_base: &str) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: category_label(&product.category),
            price: product.price.display(),
            image_url: product.primary_image_url(api_base),
            bestseller: product.bestseller,
            stock: product.stock,
            stock_class: product.stock_level().text_class(),
            sizes: product.sizes_display(),
        }
    }
}

fn category_label(raw: &str) -> String {
    raw.parse::<Category>()
        .map_or_else(|_| raw.to_string(), |c| c.label().to_string())
}

#[derive(Template)]
#[template(path = "products/add.html")]
struct AddProductTemplate {
    shell: Shell,
    form: ProductFormView,
    max_images: usize,
    image_fields: Vec<String>,
}

#[derive(Template)]
#[template(path = "products/list.html")]
struct ProductListTemplate {
    shell: Shell,
    products: Vec<ProductCard>,
}

#[derive(Template)]
#[template(path = "products/edit.html")]
struct EditProductTemplate {
    shell: Shell,
    id: String,
    image_url: Option<String>,
    form: ProductFormView,
}

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", get(add_page).post(add_product))
        .route("/list", get(list_page))
        .route("/list/{id}/remove", post(remove_product))
        .route("/list/{id}/edit", get(edit_page).post(update_product))
}

fn render(template: &impl Template) -> Response {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
    .into_response()
}

async fn render_add(admin: &CurrentAdmin, notifier: &Notifier, form: &ProductForm) -> Response {
    render(&AddProductTemplate {
        shell: Shell::load("Add Items", "/add", admin, notifier).await,
        form: ProductFormView::from(form),
        max_images: MAX_PRODUCT_IMAGES,
        image_fields: (1..=MAX_PRODUCT_IMAGES)
            .map(|n| format!("image{n}"))
            .collect(),
    })
}

/// Empty add-product form.
///
/// GET /add
async fn add_page(RequireAdminAuth(admin): RequireAdminAuth, notifier: Notifier) -> Response {
    render_add(&admin, &notifier, &ProductForm::default()).await
}

/// Validate and create a product.
///
/// Validation runs before any API call; a rejected form is re-rendered with
/// the submitted values.
///
/// POST /add
#[instrument(skip_all)]
async fn add_product(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut body = MultipartForm::read(multipart).await?;
    let images = body.take_files("image");
    let form = body.product_form(images.len());

    let product = match form.validate() {
        Ok(product) => product,
        Err(e) => {
            notifier.error(e.to_string()).await;
            return Ok(render_add(&admin, &notifier, &form).await);
        }
    };

    match state
        .api()
        .add_product(&admin.token(), &product, images)
        .await
    {
        Ok(message) => {
            notifier
                .success(message.unwrap_or_else(|| "Product added".to_string()))
                .await;
            Ok(Redirect::to("/add").into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to add product");
            notifier.error(e.user_message()).await;
            Ok(render_add(&admin, &notifier, &form).await)
        }
    }
}

/// Product cards.
///
/// GET /list
#[instrument(skip_all)]
async fn list_page(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
) -> Response {
    let products = match state.api().list_products().await {
        Ok(products) => products
            .iter()
            .map(|p| ProductCard::new(p, state.api_base()))
            .collect(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch products");
            notifier.error(e.user_message()).await;
            Vec::new()
        }
    };

    render(&ProductListTemplate {
        shell: Shell::load("List Items", "/list", &admin, &notifier).await,
        products,
    })
}

/// Delete a product and reload the list.
///
/// POST /list/{id}/remove
#[instrument(skip(admin, state, notifier))]
async fn remove_product(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    Path(id): Path<ProductId>,
) -> Redirect {
    match state.api().remove_product(&admin.token(), &id).await {
        Ok(message) => {
            notifier
                .success(message.unwrap_or_else(|| "Product removed".to_string()))
                .await;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to remove product");
            notifier.error(e.user_message()).await;
        }
    }
    Redirect::to("/list")
}

/// Edit form prefilled from the current product.
///
/// GET /list/{id}/edit
#[instrument(skip(admin, state, notifier))]
async fn edit_page(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    Path(id): Path<ProductId>,
) -> Response {
    let product = match state.api().get_product(&id).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            notifier.error("Product not found").await;
            return Redirect::to("/list").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch product");
            notifier.error(e.user_message()).await;
            return Redirect::to("/list").into_response();
        }
    };

    let image_url = product.primary_image_url(state.api_base());
    let form = ProductForm::from_product(&product);
    render_edit(&admin, &notifier, &product.id, image_url, &form).await
}

async fn render_edit(
    admin: &CurrentAdmin,
    notifier: &Notifier,
    id: &ProductId,
    image_url: Option<String>,
    form: &ProductForm,
) -> Response {
    render(&EditProductTemplate {
        shell: Shell::load("Edit Item", "/list", admin, notifier).await,
        id: id.to_string(),
        image_url,
        form: ProductFormView::from(form),
    })
}

/// Replace a product's fields.
///
/// POST /list/{id}/edit
#[instrument(skip(admin, state, notifier, multipart))]
async fn update_product(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    Path(id): Path<ProductId>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let body = MultipartForm::read(multipart).await?;
    let form = body.product_form(0);

    let update = match form.validate_update(id.clone()) {
        Ok(update) => update,
        Err(e) => {
            notifier.error(e.to_string()).await;
            return Ok(render_edit(&admin, &notifier, &id, None, &form).await);
        }
    };

    match state.api().update_product(&admin.token(), &update).await {
        Ok(message) => {
            notifier
                .success(message.unwrap_or_else(|| "Product updated".to_string()))
                .await;
            Ok(Redirect::to("/list").into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to update product");
            notifier.error(e.user_message()).await;
            Ok(render_edit(&admin, &notifier, &id, None, &form).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_view_marks_selection() {
        let form = ProductForm {
            category: "gowns".to_string(),
            sizes: vec!["M".to_string(), "XL".to_string()],
            ..ProductForm::default()
        };
        let view = ProductFormView::from(&form);
        let selected: Vec<&str> = view
            .categories
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.value)
            .collect();
        assert_eq!(selected.len(), 1);
        let checked: Vec<&str> = view
            .sizes
            .iter()
            .filter(|s| s.checked)
            .map(|s| s.label)
            .collect();
        assert_eq!(checked, vec!["M", "XL"]);
    }

    #[test]
    fn test_unknown_category_label_kept() {
        assert_eq!(category_label("capes"), "capes");
    }
}
