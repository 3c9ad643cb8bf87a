//! Storefront content uploads: home page hero and about page image.

use askama::Template;
use axum::{
    Router,
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tracing::instrument;

use crate::components::Shell;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::CurrentAdmin;
use crate::routes::forms::MultipartForm;
use crate::services::Notifier;
use crate::state::AppState;

const HERO_MISSING_FIELDS: &str = "Please select a file and enter a title";
const ABOUT_MISSING_FILE: &str = "Please select an image";

#[derive(Template)]
#[template(path = "hero.html")]
struct HeroTemplate {
    shell: Shell,
    title: String,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    shell: Shell,
}

/// Build the content router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hero", get(hero_page).post(upload_hero))
        .route("/about", get(about_page).post(upload_about))
}

fn render(template: &impl Template) -> Response {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
    .into_response()
}

async fn render_hero(admin: &CurrentAdmin, notifier: &Notifier, title: String) -> Response {
    render(&HeroTemplate {
        shell: Shell::load("Upload Home", "/hero", admin, notifier).await,
        title,
    })
}

/// GET /hero
async fn hero_page(RequireAdminAuth(admin): RequireAdminAuth, notifier: Notifier) -> Response {
    render_hero(&admin, &notifier, String::new()).await
}

/// Replace the home page hero. Both the file and the title are required.
///
/// POST /hero
#[instrument(skip_all)]
async fn upload_hero(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut body = MultipartForm::read(multipart).await?;
    let title = body.text("title").trim().to_string();

    let Some(file) = body.take_file("file").filter(|_| !title.is_empty()) else {
        notifier.error(HERO_MISSING_FIELDS).await;
        return Ok(render_hero(&admin, &notifier, title).await);
    };

    match state.api().upload_hero(file, &title).await {
        Ok(()) => {
            notifier.success("Hero updated successfully").await;
            Ok(Redirect::to("/hero").into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to upload hero");
            notifier.error(e.user_message()).await;
            Ok(render_hero(&admin, &notifier, title).await)
        }
    }
}

/// GET /about
async fn about_page(RequireAdminAuth(admin): RequireAdminAuth, notifier: Notifier) -> Response {
    render(&AboutTemplate {
        shell: Shell::load("Upload About", "/about", &admin, &notifier).await,
    })
}

/// Replace the about page image.
///
/// POST /about
#[instrument(skip_all)]
async fn upload_about(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut body = MultipartForm::read(multipart).await?;

    let Some(file) = body.take_file("file") else {
        notifier.error(ABOUT_MISSING_FILE).await;
        return Ok(Redirect::to("/about"));
    };

    match state.api().upload_about(file).await {
        Ok(()) => notifier.success("About image updated successfully").await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to upload about image");
            notifier.error(e.user_message()).await;
        }
    }
    Ok(Redirect::to("/about"))
}
