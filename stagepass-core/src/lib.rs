//! Stagepass Core - auth and session logic for the music app clone
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (UserRecord, SessionRecord, form state)
//! - **validate**: Pure field validators for the login/signup form
//! - **ports**: Trait definitions for storage (UserStore, SessionStore, ThemeStore)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON local-storage file, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{JsonStore, LocalStorage};
use config::Config;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Field, FieldErrors, FormFields, FormMode, SessionRecord, Theme, UserRecord};
pub use services::{
    AuthForm, AuthService, DashboardService, DashboardSummary, DemoService, EntryPoint, LogEntry,
    LogEvent, LoggingService, SessionService, SubmitOutcome, LOGIN_SUCCESS_MESSAGE,
    SIGNUP_SUCCESS_MESSAGE,
};

/// File name of the regular storage area
pub const STORAGE_FILE: &str = "stagepass.json";

/// Main context for Stagepass operations
///
/// This is the primary entry point for all business logic. It holds the
/// storage handle, configuration, and the long-lived services.
pub struct StagepassContext {
    pub config: Config,
    pub storage: Arc<LocalStorage>,
    pub store: Arc<JsonStore>,
    pub session_service: SessionService,
    pub dashboard_service: DashboardService,
    pub demo_service: DemoService,
}

impl StagepassContext {
    /// Create a new Stagepass context over the given data directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;

        // Demo mode works against its own storage area
        let storage_filename = if config.demo_mode {
            services::DEMO_STORAGE_FILE
        } else {
            STORAGE_FILE
        };

        let storage = Arc::new(LocalStorage::new(&data_dir.join(storage_filename)));
        let store = Arc::new(JsonStore::new(Arc::clone(&storage)));

        let session_service = SessionService::new(store.clone());
        let dashboard_service =
            DashboardService::new(store.clone(), store.clone(), store.clone());
        let demo_service = DemoService::new(data_dir);

        Ok(Self {
            config,
            storage,
            store,
            session_service,
            dashboard_service,
            demo_service,
        })
    }

    /// A fresh auth form bound to this context's stores
    pub fn auth_form(&self) -> AuthForm {
        let auth = AuthService::new(self.store.clone(), self.store.clone());
        AuthForm::new(self.store.clone(), auth)
    }
}
