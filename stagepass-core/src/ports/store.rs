//! Storage ports - key-value store abstractions
//!
//! These traits define everything the auth and session logic needs from
//! persistence. Implementations (adapters) decide where the bytes live;
//! the bundled one emulates browser local storage with a JSON file.

use crate::domain::result::Result;
use crate::domain::{SessionRecord, Theme, UserRecord};

/// The mock user database: an append-only list of records
pub trait UserStore: Send + Sync {
    /// All stored records. An absent or unparseable stored value yields
    /// an empty list; the parse failure is logged, not surfaced.
    fn list(&self) -> Vec<UserRecord>;

    /// Append a record and re-serialize the whole list. Returns false
    /// when serialization or the write fails; never propagates.
    fn add(&self, record: &UserRecord) -> bool;

    /// First record whose email equals `email` case-insensitively
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;
}

/// The single current-session record
pub trait SessionStore: Send + Sync {
    /// The current session, if one exists
    fn load(&self) -> Option<SessionRecord>;

    /// Write the session, overwriting any previous one. A failure here
    /// must leave the caller in the anonymous state.
    fn save(&self, session: &SessionRecord) -> Result<()>;

    /// Remove the session record. Removal of an absent record is a no-op.
    fn clear(&self);
}

/// The theme preference, persisted independently of the session
pub trait ThemeStore: Send + Sync {
    /// Stored preference, or the default when absent/unreadable
    fn theme(&self) -> Theme;

    /// Persist the preference; a failed write is logged and dropped
    fn set_theme(&self, theme: Theme);
}
