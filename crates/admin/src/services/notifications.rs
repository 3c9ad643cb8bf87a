//! Toast notifications carried across a redirect.
//!
//! Handlers queue a [`Notification`] in the session; the next page that
//! renders drains the queue and shows each one once (post/redirect/get).

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session_keys;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    /// Tailwind classes for the toast container.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.level {
            NotificationLevel::Success => "bg-green-50 border-green-400 text-green-800",
            NotificationLevel::Error => "bg-red-50 border-red-400 text-red-800",
            NotificationLevel::Info => "bg-blue-50 border-blue-400 text-blue-800",
        }
    }

    /// Short label announced to screen readers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.level {
            NotificationLevel::Success => "Success",
            NotificationLevel::Error => "Error",
            NotificationLevel::Info => "Info",
        }
    }
}

/// Extractor giving handlers access to the session's toast queue.
///
/// ```rust,ignore
/// async fn handler(notifier: Notifier) -> Redirect {
///     notifier.push(Notification::success("Saved")).await;
///     Redirect::to("/list")
/// }
/// ```
#[derive(Clone)]
pub struct Notifier(Session);

impl Notifier {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Queue a toast for the next rendered page.
    ///
    /// A session failure loses the toast but never fails the request.
    pub async fn push(&self, notification: Notification) {
        let mut queue = self.pending().await;
        queue.push(notification);
        if let Err(e) = self.0.insert(session_keys::NOTIFICATIONS, queue).await {
            tracing::warn!(error = %e, "Failed to queue notification");
        }
    }

    pub async fn success(&self, message: impl Into<String>) {
        self.push(Notification::success(message)).await;
    }

    pub async fn error(&self, message: impl Into<String>) {
        self.push(Notification::error(message)).await;
    }

    pub async fn info(&self, message: impl Into<String>) {
        self.push(Notification::info(message)).await;
    }

    /// Remove and return every queued toast.
    pub async fn drain(&self) -> Vec<Notification> {
        match self
            .0
            .remove::<Vec<Notification>>(session_keys::NOTIFICATIONS)
            .await
        {
            Ok(queue) => queue.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read notifications");
                Vec::new()
            }
        }
    }

    async fn pending(&self) -> Vec<Notification> {
        self.0
            .get::<Vec<Notification>>(session_keys::NOTIFICATIONS)
            .await
            .ok()
            .flatten()
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Notifier
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(Self)
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn notifier() -> Notifier {
        let store = Arc::new(MemoryStore::default());
        Notifier::new(Session::new(None, store, None))
    }

    #[tokio::test]
    async fn test_queue_and_drain() {
        let notifier = notifier();
        notifier.success("Product added").await;
        notifier.error("Failed to update status").await;

        let drained = notifier.drain().await;
        assert_eq!(
            drained,
            vec![
                Notification::success("Product added"),
                Notification::error("Failed to update status"),
            ]
        );
        assert!(notifier.drain().await.is_empty());
    }

    #[test]
    fn test_wire_level_names() {
        let json = serde_json::to_string(&Notification::info("hi")).unwrap();
        assert_eq!(json, r#"{"level":"info","message":"hi"}"#);
    }
}
