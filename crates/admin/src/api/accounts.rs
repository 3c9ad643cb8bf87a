//! Admin login and customer accounts.

use atelier_core::Email;
use atelier_core::users::User;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ApiClient, ApiError, send_json, with_token};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: String,
}

#[derive(Deserialize)]
struct UsersResponse {
    #[serde(default, deserialize_with = "super::skip_invalid")]
    users: Vec<User>,
}

impl ApiClient {
    /// Exchange admin credentials for an API token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server's message for bad
    /// credentials, or a transport/status error.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn admin_login(
        &self,
        email: &Email,
        password: &SecretString,
    ) -> Result<SecretString, ApiError> {
        let body = LoginRequest {
            email: email.as_str(),
            password: password.expose_secret(),
        };
        let response: LoginResponse = send_json(self.post("api/user/admin")?.json(&body)).await?;

        if response.token.is_empty() {
            return Err(ApiError::Decode("login response carried no token".to_string()));
        }
        tracing::info!("Admin login accepted");
        Ok(SecretString::from(response.token))
    }

    /// List registered storefront users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip_all)]
    pub async fn list_users(&self, token: &SecretString) -> Result<Vec<User>, ApiError> {
        let response: UsersResponse = send_json(with_token(self.get("api/user/list")?, token)).await?;
        tracing::debug!(count = response.users.len(), "Fetched users");
        Ok(response.users)
    }
}
