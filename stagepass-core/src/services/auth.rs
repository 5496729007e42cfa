//! Auth service - signup and credential checking
//!
//! Simulated authentication against the locally stored user records.
//! Failure variants carry the exact user-facing messages; the form
//! controller attaches them to the email field.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{SessionRecord, UserRecord};
use crate::ports::{SessionStore, UserStore};

/// Why a login attempt failed.
///
/// "User not found" and "incorrect password" are distinct reasons with
/// distinct messages; they are handled identically otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("User not found. Please sign up first.")]
    UserNotFound,

    #[error("Incorrect password. Please try again.")]
    WrongPassword,

    #[error("Failed to save session. Please try again.")]
    SessionWrite,
}

/// Why a signup attempt failed (validation happens before the service is
/// called, so only storage remains)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Failed to create account. Please try again.")]
    StoreWrite,
}

/// Auth service over the user and session stores
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }

    /// Look up the account and compare the password.
    ///
    /// Does not touch the session; returns the matched record so callers
    /// can derive one.
    pub fn check_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, LoginError> {
        let user = self
            .users
            .find_by_email(email)
            .ok_or(LoginError::UserNotFound)?;
        if user.password != password {
            return Err(LoginError::WrongPassword);
        }
        Ok(user)
    }

    /// Full login: credential check, then write the session record.
    ///
    /// A failed session write leaves the caller anonymous; no partial
    /// state survives.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionRecord, LoginError> {
        let user = self.check_credentials(email, password)?;
        let session = SessionRecord::for_user(&user);
        self.sessions
            .save(&session)
            .map_err(|_| LoginError::SessionWrite)?;
        Ok(session)
    }

    /// Append a new account record. The caller has already validated the
    /// fields and the email's uniqueness.
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, SignupError> {
        let record = UserRecord::new(name, email, password);
        if !self.users.add(&record) {
            return Err(SignupError::StoreWrite);
        }
        Ok(record)
    }
}
