//! Types the admin keeps in its session.

pub mod session;

pub use session::{CurrentAdmin, keys as session_keys};
