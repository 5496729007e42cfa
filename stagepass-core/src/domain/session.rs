//! Session record domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRecord;

/// The locally recorded fact that a user is currently logged in.
///
/// Written on login (overwriting any previous record), removed on logout.
/// At most one exists per storage area. Carries a copy of the user's
/// name/email taken at login time; nothing keeps it in sync with the
/// user record afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub name: String,
    pub email: String,
    pub logged_in: bool,
    pub login_time: DateTime<Utc>,
}

impl SessionRecord {
    /// Derive a session from a matched user record at login time
    pub fn for_user(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            logged_in: true,
            login_time: Utc::now(),
        }
    }
}
