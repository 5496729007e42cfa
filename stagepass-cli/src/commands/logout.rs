//! Logout command - end the current session

use anyhow::Result;
use stagepass_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    match ctx.session_service.current() {
        Some(session) => {
            ctx.session_service.logout();
            log_event(&logger, LogEvent::new("logout").with_command("logout"));
            output::success(&format!("Logged out {}.", session.email));
            // Only the session record is removed
            println!("Your theme preference is kept for next time.");
        }
        None => {
            output::warning("No one is logged in.");
        }
    }

    Ok(())
}
