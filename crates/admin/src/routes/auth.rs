//! Authentication route handlers for admin.
//!
//! The storefront API issues the token; the session only keeps it.

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use atelier_core::Email;

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{LOGIN_PATH, OptionalAdminAuth, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::{Notification, Notifier};
use crate::state::AppState;

const LOGGED_OUT: &str = "You have been logged out";

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginPageTemplate {
    email: String,
    notifications: Vec<Notification>,
}

/// Login form submission.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_page).post(login))
        .route("/auth/logout", axum::routing::post(logout))
}

/// Render the login page, or go straight in when already logged in.
///
/// GET /auth/login
async fn login_page(OptionalAdminAuth(admin): OptionalAdminAuth, notifier: Notifier) -> Response {
    if admin.is_some() {
        return Redirect::to("/").into_response();
    }
    render_login(String::new(), notifier.drain().await).into_response()
}

fn render_login(email: String, notifications: Vec<Notification>) -> Html<String> {
    let template = LoginPageTemplate {
        email,
        notifications,
    };
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Exchange credentials for an API token.
///
/// POST /auth/login
#[instrument(skip_all, fields(email = %form.email))]
async fn login(
    State(state): State<AppState>,
    session: Session,
    notifier: Notifier,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            notifier.error(e.to_string()).await;
            return Ok(render_login(form.email, notifier.drain().await).into_response());
        }
    };
    let password = SecretString::from(form.password);

    match state.api().admin_login(&email, &password).await {
        Ok(token) => {
            let admin = CurrentAdmin::new(email, &token);
            set_current_admin(&session, &admin).await?;
            set_sentry_user(admin.email.as_str());
            tracing::info!("Admin logged in");
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Admin login failed");
            notifier.error(e.user_message()).await;
            Ok(render_login(form.email, notifier.drain().await).into_response())
        }
    }
}

/// Logout and clear session.
///
/// POST /auth/logout
async fn logout(session: Session, notifier: Notifier) -> impl IntoResponse {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::warn!(error = %e, "Failed to clear admin session");
    }
    clear_sentry_user();
    notifier.info(LOGGED_OUT).await;
    Redirect::to(LOGIN_PATH)
}
