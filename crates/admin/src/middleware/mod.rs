//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Security headers
//! 4. Session layer (tower-sessions, in-memory store)
//! 5. Auth extractors on protected handlers

pub mod auth;
pub mod headers;
pub mod session;

pub use auth::{
    LOGIN_PATH, OptionalAdminAuth, RequireAdminAuth, clear_current_admin, set_current_admin,
};
pub use headers::security_headers;
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
