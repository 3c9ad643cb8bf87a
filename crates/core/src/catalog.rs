//! Product catalog records and the add/edit product forms.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// Maximum number of images a product can carry.
pub const MAX_PRODUCT_IMAGES: usize = 5;

/// Stock above this count is shown as healthy.
const LOW_STOCK_THRESHOLD: i64 = 10;

/// A product as returned by `api/product/list` and `api/product/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub bestseller: bool,
    #[serde(default)]
    pub stock: i64,
    /// Ordered image references (absolute URLs or paths on the API host).
    #[serde(default, rename = "image")]
    pub images: Vec<String>,
}

impl Product {
    /// URL of the first image, resolved against the API base URL when the
    /// stored reference is a server-relative path.
    #[must_use]
    pub fn primary_image_url(&self, api_base: &str) -> Option<String> {
        self.images.first().map(|image| resolve_asset_url(api_base, image))
    }

    /// Stock level bucket for colouring.
    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::from_count(self.stock)
    }

    /// Sizes joined for display, `N/A` when none are set.
    #[must_use]
    pub fn sizes_display(&self) -> String {
        if self.sizes.is_empty() {
            "N/A".to_string()
        } else {
            self.sizes.join(", ")
        }
    }
}

/// Join a possibly-relative asset reference onto the API base URL.
#[must_use]
pub fn resolve_asset_url(api_base: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else {
        format!(
            "{}/{}",
            api_base.trim_end_matches('/'),
            reference.trim_start_matches('/')
        )
    }
}

/// Stock bucket used for the coloured stock label on product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    InStock,
    Low,
    OutOfStock,
}

impl StockLevel {
    #[must_use]
    pub const fn from_count(count: i64) -> Self {
        if count > LOW_STOCK_THRESHOLD {
            Self::InStock
        } else if count > 0 {
            Self::Low
        } else {
            Self::OutOfStock
        }
    }

    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::InStock => "text-green-600",
            Self::Low => "text-orange-500",
            Self::OutOfStock => "text-red-600",
        }
    }
}

/// Garment size offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
}

impl Size {
    pub const ALL: [Self; 4] = [Self::S, Self::M, Self::L, Self::Xl];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }
}

impl std::str::FromStr for Size {
    type Err = ProductFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProductFormError::UnknownSize(s.to_string()))
    }
}

/// Product category, sent to the API as its lowercase wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kaftans,
    Gowns,
    Suits,
    #[serde(rename = "luxury pret")]
    LuxuryPret,
    Drapes,
    Bridal,
    #[serde(rename = "semi bridal")]
    SemiBridal,
    Lehengas,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::Kaftans,
        Self::Gowns,
        Self::Suits,
        Self::LuxuryPret,
        Self::Drapes,
        Self::Bridal,
        Self::SemiBridal,
        Self::Lehengas,
    ];

    /// Value stored by the API.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Kaftans => "kaftans",
            Self::Gowns => "gowns",
            Self::Suits => "suits",
            Self::LuxuryPret => "luxury pret",
            Self::Drapes => "drapes",
            Self::Bridal => "bridal",
            Self::SemiBridal => "semi bridal",
            Self::Lehengas => "lehengas",
        }
    }

    /// Label shown in the category select.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kaftans => "Kaftans",
            Self::Gowns => "Gowns",
            Self::Suits => "Suits",
            Self::LuxuryPret => "Luxury Pret",
            Self::Drapes => "Drapes",
            Self::Bridal => "Bridal",
            Self::SemiBridal => "Semi Bridal",
            Self::Lehengas => "Lehengas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for Category {
    type Err = ProductFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ProductFormError::MissingCategory);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.wire_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProductFormError::UnknownCategory(s.to_string()))
    }
}

/// Validation failures for the add/edit product forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("Product name is required")]
    MissingName,
    #[error("Product description is required")]
    MissingDescription,
    #[error("Product price is required")]
    MissingPrice,
    #[error("'{0}' is not a valid price")]
    InvalidPrice(String),
    #[error("Product price cannot be negative")]
    NegativePrice,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Unknown size '{0}'")]
    UnknownSize(String),
    #[error("At most {max} images can be uploaded (got {got})")]
    TooManyImages { max: usize, got: usize },
}

/// Raw form input for creating or editing a product, as submitted by the
/// browser. Every field is a string until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub bestseller: bool,
    /// Number of non-empty image files attached to the submission.
    #[serde(skip)]
    pub image_count: usize,
}

/// A validated product ready to be sent to `api/product/add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    pub sizes: Vec<Size>,
    pub bestseller: bool,
}

impl NewProduct {
    /// Sizes encoded the way the API expects the multipart `sizes` field.
    #[must_use]
    pub fn sizes_json(&self) -> String {
        let labels: Vec<&str> = self.sizes.iter().map(|s| s.label()).collect();
        serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Full-replacement payload for `api/product/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    pub sizes: Vec<Size>,
    pub bestseller: bool,
}

impl ProductForm {
    /// Prefill an edit form from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount().to_string(),
            category: product.category.clone(),
            sizes: product.sizes.clone(),
            bestseller: product.bestseller,
            image_count: 0,
        }
    }

    /// Validate the required fields for a new product.
    ///
    /// # Errors
    ///
    /// Returns the first failing field, checked in form order.
    pub fn validate(&self) -> Result<NewProduct, ProductFormError> {
        if self.image_count > MAX_PRODUCT_IMAGES {
            return Err(ProductFormError::TooManyImages {
                max: MAX_PRODUCT_IMAGES,
                got: self.image_count,
            });
        }

        let name = required(&self.name, ProductFormError::MissingName)?;
        let description = required(&self.description, ProductFormError::MissingDescription)?;
        let price = self.parse_price()?;
        let category = self.category.parse::<Category>()?;
        let sizes = self.parse_sizes()?;

        Ok(NewProduct {
            name,
            description,
            price,
            category,
            sizes,
            bestseller: self.bestseller,
        })
    }

    /// Validate the form as a full replacement of product `id`.
    ///
    /// # Errors
    ///
    /// Same rules as [`Self::validate`].
    pub fn validate_update(&self, id: ProductId) -> Result<ProductUpdate, ProductFormError> {
        let product = self.validate()?;
        Ok(ProductUpdate {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            sizes: product.sizes,
            bestseller: product.bestseller,
        })
    }

    /// Whether `size` is ticked, for re-rendering the form.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    fn parse_price(&self) -> Result<Price, ProductFormError> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return Err(ProductFormError::MissingPrice);
        }
        let price = raw
            .parse::<Price>()
            .map_err(|_| ProductFormError::InvalidPrice(raw.to_string()))?;
        if price < Price::ZERO {
            return Err(ProductFormError::NegativePrice);
        }
        Ok(price)
    }

    fn parse_sizes(&self) -> Result<Vec<Size>, ProductFormError> {
        let mut sizes = Vec::with_capacity(self.sizes.len());
        for raw in &self.sizes {
            let size = raw.parse::<Size>()?;
            if !sizes.contains(&size) {
                sizes.push(size);
            }
        }
        Ok(sizes)
    }
}

fn required(value: &str, error: ProductFormError) -> Result<String, ProductFormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(error)
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Silk Kaftan".to_string(),
            description: "Hand embroidered".to_string(),
            price: "120".to_string(),
            category: "kaftans".to_string(),
            sizes: vec!["M".to_string(), "S".to_string(), "M".to_string()],
            bestseller: true,
            image_count: 2,
        }
    }

    #[test]
    fn test_validate_complete_form() {
        let product = filled_form().validate().unwrap();
        assert_eq!(product.name, "Silk Kaftan");
        assert_eq!(product.category, Category::Kaftans);
        assert_eq!(product.sizes, vec![Size::M, Size::S]);
        assert_eq!(product.sizes_json(), r#"["M","S"]"#);
        assert!(product.bestseller);
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let form = ProductForm {
            category: String::new(),
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(ProductFormError::MissingCategory));
    }

    #[test]
    fn test_required_fields_in_form_order() {
        let form = ProductForm::default();
        assert_eq!(form.validate(), Err(ProductFormError::MissingName));

        let form = ProductForm {
            description: "  ".to_string(),
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(ProductFormError::MissingDescription));
    }

    #[test]
    fn test_price_validation() {
        let form = ProductForm {
            price: "twelve".to_string(),
            ..filled_form()
        };
        assert_eq!(
            form.validate(),
            Err(ProductFormError::InvalidPrice("twelve".to_string()))
        );

        let form = ProductForm {
            price: "-1".to_string(),
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(ProductFormError::NegativePrice));
    }

    #[test]
    fn test_too_many_images() {
        let form = ProductForm {
            image_count: 6,
            ..filled_form()
        };
        assert!(matches!(
            form.validate(),
            Err(ProductFormError::TooManyImages { max: 5, got: 6 })
        ));
    }

    #[test]
    fn test_update_payload_shape() {
        let update = filled_form()
            .validate_update(ProductId::new("p1"))
            .unwrap();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["category"], "kaftans");
        assert_eq!(json["sizes"], serde_json::json!(["M", "S"]));
        assert_eq!(json["price"], serde_json::json!(120.0));
        assert_eq!(json["bestseller"], true);
    }

    #[test]
    fn test_product_decoding_and_helpers() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "name": "Gown",
            "price": 250,
            "category": "gowns",
            "sizes": [],
            "stock": 4,
            "image": ["uploads/gown.jpg", "https://cdn.test/2.jpg"]
        }))
        .unwrap();

        assert_eq!(
            product.primary_image_url("http://api.test/").as_deref(),
            Some("http://api.test/uploads/gown.jpg")
        );
        assert_eq!(product.sizes_display(), "N/A");
        assert_eq!(product.stock_level(), StockLevel::Low);
        assert!(!product.bestseller);
    }

    #[test]
    fn test_sparse_product_decodes_with_defaults() {
        let product: Product = serde_json::from_value(serde_json::json!({"_id": "p9"})).unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.price, Price::ZERO);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_stock_levels() {
        assert_eq!(StockLevel::from_count(11), StockLevel::InStock);
        assert_eq!(StockLevel::from_count(10), StockLevel::Low);
        assert_eq!(StockLevel::from_count(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::from_count(-2), StockLevel::OutOfStock);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Luxury Pret".parse::<Category>().unwrap(), Category::LuxuryPret);
        assert_eq!(
            "capes".parse::<Category>(),
            Err(ProductFormError::UnknownCategory("capes".to_string()))
        );
    }
}
