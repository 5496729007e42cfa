//! Dashboard service - the post-login shell
//!
//! Greeting, avatar initials, theme handling, and the summary the
//! dashboard surface renders. Requires a session; the absence of one is
//! the caller's cue to bounce back to the auth surface.

use std::sync::Arc;

use chrono::{Local, Timelike};
use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{SessionRecord, Theme};
use crate::ports::{SessionStore, ThemeStore, UserStore};
use crate::services::session::SessionService;

/// Everything the dashboard shell shows
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub greeting: String,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub login_time: String,
    pub theme: Theme,
    pub total_users: usize,
}

/// Dashboard service over the stores
pub struct DashboardService {
    sessions: SessionService,
    users: Arc<dyn UserStore>,
    themes: Arc<dyn ThemeStore>,
}

impl DashboardService {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        users: Arc<dyn UserStore>,
        themes: Arc<dyn ThemeStore>,
    ) -> Self {
        Self {
            sessions: SessionService::new(sessions),
            users,
            themes,
        }
    }

    /// Build the dashboard summary for the current session, or fail with
    /// a not-found error when nobody is logged in
    pub fn summary(&self) -> Result<DashboardSummary> {
        let session = self.sessions.require()?;
        Ok(self.summary_for(&session, Local::now().hour()))
    }

    /// Summary for a known session at a given local hour (split out so
    /// the greeting boundaries are testable)
    pub fn summary_for(&self, session: &SessionRecord, hour: u32) -> DashboardSummary {
        DashboardSummary {
            greeting: greeting_for_hour(hour).to_string(),
            name: session.name.clone(),
            email: session.email.clone(),
            initials: initials(&session.name),
            login_time: session.login_time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            theme: self.themes.theme(),
            total_users: self.users.list().len(),
        }
    }

    /// Current theme preference
    pub fn theme(&self) -> Theme {
        self.themes.theme()
    }

    /// Persist an explicit theme choice
    pub fn set_theme(&self, theme: Theme) {
        self.themes.set_theme(theme);
    }

    /// Flip the theme and persist the result
    pub fn toggle_theme(&self) -> Theme {
        let next = self.themes.theme().toggled();
        self.themes.set_theme(next);
        next
    }
}

/// Time-of-day greeting: morning before 12, afternoon before 18,
/// evening otherwise
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Avatar initials: first letter of each word, uppercased, at most two
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
