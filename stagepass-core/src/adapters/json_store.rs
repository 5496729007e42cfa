//! JSON store - the record stores over `LocalStorage`
//!
//! Implements the storage ports on top of the local-storage map under
//! three fixed keys: an array of user records, a single session record,
//! and a bare theme string.

use std::sync::Arc;

use crate::adapters::local_storage::LocalStorage;
use crate::domain::result::Result;
use crate::domain::{SessionRecord, Theme, UserRecord};
use crate::ports::{SessionStore, ThemeStore, UserStore};

/// Storage key for the array of registered user records
pub const USERS_KEY: &str = "stagepass.users";
/// Storage key for the current session record
pub const SESSION_KEY: &str = "stagepass.session";
/// Storage key for the theme preference
pub const THEME_KEY: &str = "stagepass.theme";

/// Record stores backed by the JSON local-storage file
pub struct JsonStore {
    storage: Arc<LocalStorage>,
}

impl JsonStore {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }
}

impl UserStore for JsonStore {
    fn list(&self) -> Vec<UserRecord> {
        let Some(raw) = self.storage.get_item(USERS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                eprintln!("[stagepass] Unreadable user records, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn add(&self, record: &UserRecord) -> bool {
        let mut users = self.list();
        users.push(record.clone());

        let raw = match serde_json::to_string(&users) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("[stagepass] Failed to serialize user records: {}", e);
                return false;
            }
        };
        match self.storage.set_item(USERS_KEY, &raw) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("[stagepass] Failed to save user record: {}", e);
                false
            }
        }
    }

    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.list().into_iter().find(|u| u.matches_email(email))
    }
}

impl SessionStore for JsonStore {
    fn load(&self) -> Option<SessionRecord> {
        let raw = self.storage.get_item(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                eprintln!("[stagepass] Unreadable session record: {}", e);
                None
            }
        }
    }

    fn save(&self, session: &SessionRecord) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.storage.set_item(SESSION_KEY, &raw)
    }

    fn clear(&self) {
        if let Err(e) = self.storage.remove_item(SESSION_KEY) {
            eprintln!("[stagepass] Failed to clear session: {}", e);
        }
    }
}

impl ThemeStore for JsonStore {
    fn theme(&self) -> Theme {
        match self.storage.get_item(THEME_KEY) {
            Some(raw) => Theme::parse_or_default(&raw),
            None => Theme::default(),
        }
    }

    fn set_theme(&self, theme: Theme) {
        if let Err(e) = self.storage.set_item(THEME_KEY, theme.as_str()) {
            eprintln!("[stagepass] Failed to save theme preference: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_store(dir: &TempDir) -> JsonStore {
        let storage = Arc::new(LocalStorage::new(&dir.path().join("stagepass.json")));
        JsonStore::new(storage)
    }

    #[test]
    fn test_users_start_empty_and_append() {
        let dir = TempDir::new().unwrap();
        let store = create_store(&dir);

        assert!(store.list().is_empty());
        assert!(store.add(&UserRecord::new("Ann", "ann@x.com", "Abcdef12")));
        assert!(store.add(&UserRecord::new("Bob", "bob@x.com", "Abcdef12")));

        let users = store.list();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Ann");
    }

    #[test]
    fn test_find_by_email_ignores_case() {
        let dir = TempDir::new().unwrap();
        let store = create_store(&dir);
        store.add(&UserRecord::new("Ann", "A@b.com", "Abcdef12"));

        let found = store.find_by_email("a@b.com").unwrap();
        assert_eq!(found.email, "A@b.com");
        assert!(store.find_by_email("missing@b.com").is_none());
    }

    #[test]
    fn test_unparseable_users_value_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(LocalStorage::new(&dir.path().join("stagepass.json")));
        storage.set_item(USERS_KEY, "{{not an array").unwrap();

        let store = JsonStore::new(storage);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_session_overwrite_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = create_store(&dir);
        assert!(store.load().is_none());

        let ann = UserRecord::new("Ann", "ann@x.com", "Abcdef12");
        store.save(&SessionRecord::for_user(&ann)).unwrap();
        assert_eq!(store.load().unwrap().email, "ann@x.com");

        let bob = UserRecord::new("Bob", "bob@x.com", "Abcdef12");
        store.save(&SessionRecord::for_user(&bob)).unwrap();
        assert_eq!(store.load().unwrap().email, "bob@x.com");

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_theme_defaults_to_dark_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = create_store(&dir);
        assert_eq!(store.theme(), Theme::Dark);

        store.set_theme(Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
    }
}
