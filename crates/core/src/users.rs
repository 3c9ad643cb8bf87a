//! Customer accounts listed in the admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{UserId, timestamp};

/// Shown in place of a missing phone number.
pub const MISSING_PHONE: &str = "—";

/// A registered storefront user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    #[must_use]
    pub fn phone_display(&self) -> &str {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(MISSING_PHONE)
    }

    /// Registration date as `dd/mm/yyyy`, or an empty string.
    #[must_use]
    pub fn joined_display(&self) -> String {
        self.created_at
            .as_ref()
            .map(timestamp::display_date)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_phone_fallback() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1", "name": "Alice", "email": "alice@shop.test", "phone": ""
        }))
        .unwrap();
        assert_eq!(user.phone_display(), "—");
        assert_eq!(user.joined_display(), "");
    }

    #[test]
    fn test_full_record() {
        let user: User = serde_json::from_value(json!({
            "_id": "u2",
            "name": "Bob",
            "email": "bob@shop.test",
            "phone": "07700 900123",
            "createdAt": "2024-02-10T08:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(user.phone_display(), "07700 900123");
        assert_eq!(user.joined_display(), "10/02/2024");
    }
}
