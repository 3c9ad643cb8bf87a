//! `login`: exchange credentials for a token.

use atelier_admin::api::ApiClient;
use atelier_core::Email;
use secrecy::{ExposeSecret, SecretString};

use super::CliError;

/// Log in and return the token, ready for `export ATELIER_TOKEN=...`.
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: SecretString,
) -> Result<Vec<String>, CliError> {
    let email = Email::parse(email).map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    tracing::info!(email = %email, "Logging in");
    let token = api.admin_login(&email, &password).await?;

    Ok(vec![token.expose_secret().to_owned()])
}
