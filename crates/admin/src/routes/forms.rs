//! Multipart form decoding shared by the upload pages.

use axum::extract::Multipart;

use atelier_core::catalog::ProductForm;

use crate::api::UploadFile;
use crate::error::AppError;

/// A decoded `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    texts: Vec<(String, String)>,
    files: Vec<(String, UploadFile)>,
}

impl MultipartForm {
    /// Read every field. File inputs left empty by the browser are dropped.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the body is not valid multipart.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);

            match file_name {
                Some(file_name) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    if file_name.is_empty() || bytes.is_empty() {
                        continue;
                    }
                    form.files.push((
                        name,
                        UploadFile {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        },
                    ));
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    form.texts.push((name, value));
                }
            }
        }
        Ok(form)
    }

    /// First text value of `name`, empty when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.texts
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    /// Every text value of `name`, e.g. ticked checkboxes.
    #[must_use]
    pub fn texts(&self, name: &str) -> Vec<String> {
        self.texts
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Whether a checkbox named `name` was ticked.
    #[must_use]
    pub fn checked(&self, name: &str) -> bool {
        self.texts.iter().any(|(key, _)| key == name)
    }

    /// Remove and return the file uploaded as `name`.
    pub fn take_file(&mut self, name: &str) -> Option<UploadFile> {
        let index = self.files.iter().position(|(key, _)| key == name)?;
        Some(self.files.remove(index).1)
    }

    /// Remove and return every uploaded file whose field starts with `prefix`,
    /// in submission order.
    pub fn take_files(&mut self, prefix: &str) -> Vec<UploadFile> {
        let (taken, kept) = std::mem::take(&mut self.files)
            .into_iter()
            .partition(|(key, _)| key.starts_with(prefix));
        self.files = kept;
        taken.into_iter().map(|(_, file)| file).collect()
    }

    /// Product fields plus the number of attached images.
    #[must_use]
    pub fn product_form(&self, image_count: usize) -> ProductForm {
        ProductForm {
            name: self.text("name"),
            description: self.text("description"),
            price: self.text("price"),
            category: self.text("category"),
            sizes: self.texts("sizes"),
            bestseller: self.checked("bestseller"),
            image_count,
        }
    }
}
