//! Integration tests for stagepass-core services
//!
//! These tests drive the real JSON storage adapter on disk; only the
//! data directory is temporary. They cover the full signup/login/logout
//! flow and the storage edge cases the form must survive.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use tempfile::TempDir;

use stagepass_core::adapters::json_store::USERS_KEY;
use stagepass_core::adapters::{JsonStore, LocalStorage};
use stagepass_core::ports::{SessionStore, ThemeStore, UserStore};
use stagepass_core::services::{AuthForm, AuthService, SessionService};
use stagepass_core::{
    DashboardService, Field, FormMode, StagepassContext, SubmitOutcome, Theme,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create the full stack over a temp data directory
fn create_stack(dir: &TempDir) -> (Arc<JsonStore>, AuthForm, SessionService) {
    let storage = Arc::new(LocalStorage::new(&dir.path().join("stagepass.json")));
    let store = Arc::new(JsonStore::new(storage));
    let auth = AuthService::new(store.clone(), store.clone());
    let form = AuthForm::new(store.clone(), auth);
    let sessions = SessionService::new(store.clone());
    (store, form, sessions)
}

/// Drive a signup through the form
fn signup(form: &mut AuthForm, name: &str, email: &str, password: &str) -> SubmitOutcome {
    if form.mode() == FormMode::Login {
        form.toggle_mode();
    }
    form.set_name(name);
    form.set_email(email);
    form.set_password(password);
    form.set_confirm(password);
    form.set_terms_accepted(true);
    form.submit()
}

/// Drive a login through the form
fn login(form: &mut AuthForm, email: &str, password: &str) -> SubmitOutcome {
    if form.mode() == FormMode::Signup {
        form.toggle_mode();
    }
    form.set_email(email);
    form.set_password(password);
    form.submit()
}

// ============================================================================
// Signup / Login Flow
// ============================================================================

/// The full example flow: signup, case-insensitive login, wrong password
#[test]
fn test_signup_then_login_round_trip() {
    let dir = TempDir::new().unwrap();
    let (store, mut form, sessions) = create_stack(&dir);

    // Store starts empty
    assert!(store.list().is_empty());

    // Signup succeeds and adds exactly one record
    let outcome = signup(&mut form, "Ann", "ann@x.com", "Abcdef12");
    assert_eq!(
        outcome,
        SubmitOutcome::SignedUp {
            email: "ann@x.com".to_string()
        }
    );
    assert_eq!(store.list().len(), 1);

    // Login with a different casing finds the same record
    sessions.logout();
    match login(&mut form, "ANN@X.COM", "Abcdef12") {
        SubmitOutcome::LoggedIn(session) => {
            assert_eq!(session.email, "ann@x.com");
            assert_eq!(session.name, "Ann");
        }
        other => panic!("expected login, got {:?}", other),
    }
    assert!(sessions.current().is_some());

    // A malformed password never reaches the credential check: field
    // validation rejects it first
    sessions.logout();
    assert_eq!(login(&mut form, "ann@x.com", "wrong"), SubmitOutcome::Rejected);
    assert_eq!(
        form.errors().get(Field::Password),
        Some("Password must be at least 8 characters.")
    );
    assert!(sessions.current().is_none());

    // A well-formed but wrong password fails the credential check
    assert_eq!(login(&mut form, "ann@x.com", "Wrongpw99"), SubmitOutcome::Rejected);
    assert_eq!(
        form.errors().get(Field::Email),
        Some("Incorrect password. Please try again.")
    );
    assert!(sessions.current().is_none());
}

/// "wrong" fails password validation before credentials are even checked;
/// a well-formed wrong password reaches the credential check
#[test]
fn test_wrong_password_vs_unknown_user_messages() {
    let dir = TempDir::new().unwrap();
    let (_store, mut form, _sessions) = create_stack(&dir);
    signup(&mut form, "Ann", "ann@x.com", "Abcdef12");

    assert_eq!(login(&mut form, "ann@x.com", "Wrongpw99"), SubmitOutcome::Rejected);
    let wrong_password = form.errors().get(Field::Email).unwrap().to_string();
    assert_eq!(wrong_password, "Incorrect password. Please try again.");

    assert_eq!(login(&mut form, "ghost@x.com", "Wrongpw99"), SubmitOutcome::Rejected);
    let unknown_user = form.errors().get(Field::Email).unwrap().to_string();
    assert_eq!(unknown_user, "User not found. Please sign up first.");

    // The two failure reasons never share a message
    assert_ne!(wrong_password, unknown_user);
}

/// Duplicate email is rejected in signup mode regardless of casing
#[test]
fn test_duplicate_signup_rejected() {
    let dir = TempDir::new().unwrap();
    let (store, mut form, _sessions) = create_stack(&dir);

    signup(&mut form, "Ann", "ann@x.com", "Abcdef12");
    assert_eq!(store.list().len(), 1);

    let outcome = signup(&mut form, "Ann Again", "ANN@X.COM", "Abcdef12");
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(
        form.errors().get(Field::Email),
        Some("This email is already registered. Please login instead.")
    );
    assert_eq!(store.list().len(), 1);
}

// ============================================================================
// Session Lifecycle
// ============================================================================

/// Logout removes only the session; the theme preference survives
#[test]
fn test_logout_preserves_theme() {
    let dir = TempDir::new().unwrap();
    let (store, mut form, sessions) = create_stack(&dir);

    signup(&mut form, "Ann", "ann@x.com", "Abcdef12");
    login(&mut form, "ann@x.com", "Abcdef12");
    store.set_theme(Theme::Light);

    sessions.logout();
    assert!(sessions.current().is_none());
    assert_eq!(store.theme(), Theme::Light);
    // User records are untouched as well
    assert_eq!(store.list().len(), 1);
}

/// A second login overwrites the previous session record
#[test]
fn test_login_overwrites_previous_session() {
    let dir = TempDir::new().unwrap();
    let (_store, mut form, sessions) = create_stack(&dir);

    signup(&mut form, "Ann", "ann@x.com", "Abcdef12");
    signup(&mut form, "Bob", "bob@x.com", "Abcdef12");

    login(&mut form, "ann@x.com", "Abcdef12");
    assert_eq!(sessions.current().unwrap().email, "ann@x.com");

    login(&mut form, "bob@x.com", "Abcdef12");
    assert_eq!(sessions.current().unwrap().email, "bob@x.com");
}

/// The dashboard refuses to build a summary without a session
#[test]
fn test_dashboard_gate() {
    let dir = TempDir::new().unwrap();
    let (store, mut form, sessions) = create_stack(&dir);
    let dashboard = DashboardService::new(store.clone(), store.clone(), store.clone());

    assert!(dashboard.summary().is_err());

    signup(&mut form, "Ann Lee", "ann@x.com", "Abcdef12");
    login(&mut form, "ann@x.com", "Abcdef12");

    let summary = dashboard.summary().unwrap();
    assert_eq!(summary.initials, "AL");
    assert_eq!(summary.total_users, 1);

    sessions.logout();
    assert!(dashboard.summary().is_err());
}

// ============================================================================
// Storage Edge Cases
// ============================================================================

/// A corrupted users value reads as an empty store and signup recovers it
#[test]
fn test_corrupt_users_value_recovers() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(LocalStorage::new(&dir.path().join("stagepass.json")));
    storage.set_item(USERS_KEY, "{{{not an array").unwrap();

    let store = Arc::new(JsonStore::new(storage));
    assert!(store.list().is_empty());

    let auth = AuthService::new(store.clone(), store.clone());
    let mut form = AuthForm::new(store.clone(), auth);
    assert!(matches!(
        signup(&mut form, "Ann", "ann@x.com", "Abcdef12"),
        SubmitOutcome::SignedUp { .. }
    ));
    assert_eq!(store.list().len(), 1);
}

/// A storage area that cannot be written rejects signup with the generic
/// account message instead of propagating the failure
#[test]
fn test_store_write_failure_surfaces_on_email_field() {
    let dir = TempDir::new().unwrap();
    // A directory as the storage path makes every write fail
    let storage = Arc::new(LocalStorage::new(dir.path()));
    let store = Arc::new(JsonStore::new(storage));
    let auth = AuthService::new(store.clone(), store.clone());
    let mut form = AuthForm::new(store.clone(), auth);

    let outcome = signup(&mut form, "Ann", "ann@x.com", "Abcdef12");
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(
        form.errors().get(Field::Email),
        Some("Failed to create account. Please try again.")
    );
}

/// A failed session write keeps the state anonymous and lands on the
/// email field, even though the credentials were right
#[test]
fn test_session_write_failure_keeps_anonymous() {
    struct FailingSessions;
    impl SessionStore for FailingSessions {
        fn load(&self) -> Option<stagepass_core::SessionRecord> {
            None
        }
        fn save(
            &self,
            _session: &stagepass_core::SessionRecord,
        ) -> stagepass_core::domain::result::Result<()> {
            Err(stagepass_core::Error::storage("quota exceeded"))
        }
        fn clear(&self) {}
    }

    let dir = TempDir::new().unwrap();
    let storage = Arc::new(LocalStorage::new(&dir.path().join("stagepass.json")));
    let store = Arc::new(JsonStore::new(storage));

    // Register through a working stack first
    let auth = AuthService::new(store.clone(), store.clone());
    let mut form = AuthForm::new(store.clone(), auth);
    signup(&mut form, "Ann", "ann@x.com", "Abcdef12");

    // Then log in against a session store that refuses writes
    let failing: Arc<dyn SessionStore> = Arc::new(FailingSessions);
    let auth = AuthService::new(store.clone(), failing);
    let mut form = AuthForm::new(store.clone(), auth);

    assert_eq!(login(&mut form, "ann@x.com", "Abcdef12"), SubmitOutcome::Rejected);
    assert_eq!(
        form.errors().get(Field::Email),
        Some("Failed to save session. Please try again.")
    );
}

/// Two stores over the same file see each other's writes; concurrent
/// writers race and the last snapshot wins
#[test]
fn test_two_handles_share_one_snapshot_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stagepass.json");

    let store_a = JsonStore::new(Arc::new(LocalStorage::new(&path)));
    let store_b = JsonStore::new(Arc::new(LocalStorage::new(&path)));

    store_a.add(&stagepass_core::UserRecord::new("Ann", "ann@x.com", "Abcdef12"));
    assert_eq!(store_b.list().len(), 1);
    store_b.add(&stagepass_core::UserRecord::new("Bob", "bob@x.com", "Abcdef12"));
    assert_eq!(store_a.list().len(), 2);
}

// ============================================================================
// Context Wiring
// ============================================================================

/// The context builds a working stack over a data directory
#[test]
fn test_context_end_to_end() {
    let dir = TempDir::new().unwrap();
    let ctx = StagepassContext::new(dir.path()).unwrap();

    let mut form = ctx.auth_form();
    assert!(matches!(
        signup(&mut form, "Ann", "ann@x.com", "Abcdef12"),
        SubmitOutcome::SignedUp { .. }
    ));
    assert!(matches!(
        login(&mut form, "ann@x.com", "Abcdef12"),
        SubmitOutcome::LoggedIn(_)
    ));

    assert!(ctx.session_service.current().is_some());
    let summary = ctx.dashboard_service.summary().unwrap();
    assert_eq!(summary.email, "ann@x.com");

    ctx.session_service.logout();
    assert!(ctx.dashboard_service.summary().is_err());
}
