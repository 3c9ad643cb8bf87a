//! `users list`.

use atelier_admin::api::ApiClient;
use secrecy::SecretString;

use super::CliError;

pub async fn list(api: &ApiClient, token: &SecretString) -> Result<Vec<String>, CliError> {
    let users = api.list_users(token).await?;
    Ok(users
        .iter()
        .map(|user| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                user.id,
                user.name,
                user.email,
                user.phone_display(),
                user.joined_display(),
            )
        })
        .collect())
}
