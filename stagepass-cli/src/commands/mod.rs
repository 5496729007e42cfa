//! CLI command implementations

pub mod demo;
pub mod login;
pub mod logout;
pub mod logs;
pub mod signup;
pub mod status;
pub mod theme;
pub mod users;

use std::path::PathBuf;

use anyhow::{Context, Result};
use stagepass_core::{EntryPoint, LogEvent, LoggingService, StagepassContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STAGEPASS_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".stagepass")
    }
}

/// Get or create the Stagepass context
pub fn get_context() -> Result<StagepassContext> {
    let data_dir = get_data_dir();

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    StagepassContext::new(&data_dir).context("Failed to initialize stagepass context")
}
