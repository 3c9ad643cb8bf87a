//! Registered users table.

use askama::Template;
use axum::{Router, extract::State, response::Html, routing::get};
use tracing::instrument;

use atelier_core::users::User;

use crate::components::Shell;
use crate::components::data_table::{DataTableConfig, users_table_config};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::services::Notifier;
use crate::state::AppState;

/// User row for templates.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub index: usize,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined: String,
}

impl UserRow {
    fn new(index: usize, user: &User) -> Self {
        Self {
            index: index + 1,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone_display().to_string(),
            joined: user.joined_display(),
        }
    }
}

#[derive(Template)]
#[template(path = "users.html")]
struct UsersTemplate {
    shell: Shell,
    table_config: DataTableConfig,
    users: Vec<UserRow>,
}

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(index))
}

/// GET /users
#[instrument(skip_all)]
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
) -> Html<String> {
    let users = match state.api().list_users(&admin.token()).await {
        Ok(users) => users
            .iter()
            .enumerate()
            .map(|(i, u)| UserRow::new(i, u))
            .collect(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch users");
            notifier.error(e.user_message()).await;
            Vec::new()
        }
    };

    let template = UsersTemplate {
        shell: Shell::load("All Users", "/users", &admin, &notifier).await,
        table_config: users_table_config(),
        users,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}
