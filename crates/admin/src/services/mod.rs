//! Request-scoped services shared by the route handlers.
//!
//! # Services
//!
//! - `notifications` - Toast messages queued in the session

pub mod notifications;

pub use notifications::{Notification, NotificationLevel, Notifier};
