//! Storefront content uploads (home page hero, about page image).
//!
//! These endpoints do not check the admin token, so none is sent.

use reqwest::multipart::Form;
use tracing::instrument;

use super::{ApiClient, ApiError, UploadFile, send_expecting_ok};

impl ApiClient {
    /// Replace the home page hero media and title.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self, file), fields(file_name = %file.file_name))]
    pub async fn upload_hero(&self, file: UploadFile, title: &str) -> Result<(), ApiError> {
        let form = Form::new()
            .part("file", file.into_part()?)
            .text("title", title.to_string());
        send_expecting_ok(self.post("api/hero")?.multipart(form)).await?;
        tracing::info!("Hero updated");
        Ok(())
    }

    /// Replace the about page image.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self, file), fields(file_name = %file.file_name))]
    pub async fn upload_about(&self, file: UploadFile) -> Result<(), ApiError> {
        let form = Form::new().part("file", file.into_part()?);
        send_expecting_ok(self.post("api/about")?.multipart(form)).await?;
        tracing::info!("About image updated");
        Ok(())
    }
}
