//! User record domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account in the mock user database.
///
/// Records are append-only: created on signup, never updated or deleted.
/// Identity is the email address, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    /// Stored in plaintext, a known deficiency of the mock store.
    /// A real backend behind `UserStore` must hash instead; see DESIGN.md.
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new record stamped with the current time
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive email comparison, the store's only identity rule
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}
