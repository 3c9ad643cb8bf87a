//! Landing route.

use axum::{Router, response::Redirect, routing::get};

use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// The product list doubles as the admin home page.
///
/// GET /
async fn index(RequireAdminAuth(_admin): RequireAdminAuth) -> Redirect {
    Redirect::to("/list")
}
