//! Session service - the anonymous/authenticated lifecycle

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::SessionRecord;
use crate::ports::SessionStore;

/// Session lifecycle over the session store
pub struct SessionService {
    sessions: Arc<dyn SessionStore>,
}

impl SessionService {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// The current session, if someone is logged in
    pub fn current(&self) -> Option<SessionRecord> {
        self.sessions.load()
    }

    /// The dashboard gate: no session means no access, and the caller is
    /// sent back to the auth surface. The only access control in the
    /// system, enforced purely client-side.
    pub fn require(&self) -> Result<SessionRecord> {
        self.sessions
            .load()
            .ok_or_else(|| Error::not_found("no active session"))
    }

    /// Log out: remove the session record. The theme preference lives
    /// under its own key and survives.
    pub fn logout(&self) {
        self.sessions.clear();
    }
}
