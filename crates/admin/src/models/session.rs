//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state and flash messages.

use atelier_core::Email;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
///
/// Holds the token issued by the storefront API at login. Every authenticated
/// API call forwards it; the admin has no other credential.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Email the admin logged in with.
    pub email: Email,
    /// Opaque API token.
    token: String,
}

impl CurrentAdmin {
    /// Identity for a freshly issued token.
    #[must_use]
    pub fn new(email: Email, token: &SecretString) -> Self {
        use secrecy::ExposeSecret;
        Self {
            email,
            token: token.expose_secret().to_string(),
        }
    }

    /// The API token, wrapped so it cannot leak through `Debug`.
    #[must_use]
    pub fn token(&self) -> SecretString {
        SecretString::from(self.token.clone())
    }

    /// Whether a token is present.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

impl std::fmt::Debug for CurrentAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentAdmin")
            .field("email", &self.email)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Session keys for admin data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for queued toast notifications.
    pub const NOTIFICATIONS: &str = "notifications";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let admin = CurrentAdmin::new(
            Email::parse("admin@atelier.test").unwrap(),
            &SecretString::from("tok_super_secret"),
        );
        let debug_output = format!("{admin:?}");
        assert!(debug_output.contains("admin@atelier.test"));
        assert!(!debug_output.contains("tok_super_secret"));
        assert!(admin.has_token());
    }

    #[test]
    fn test_session_round_trip_keeps_token() {
        use secrecy::ExposeSecret;

        let admin = CurrentAdmin::new(
            Email::parse("admin@atelier.test").unwrap(),
            &SecretString::from("tok_1"),
        );
        let json = serde_json::to_string(&admin).unwrap();
        let restored: CurrentAdmin = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.token().expose_secret(), "tok_1");
    }
}
