//! Demo service - manage demo mode
//!
//! Demo mode swaps the storage area for demo.json seeded with sample
//! accounts, so the auth flow can be tried without touching real data.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::adapters::demo::generate_demo_users;
use crate::adapters::{JsonStore, LocalStorage};
use crate::config::Config;
use crate::ports::UserStore;

/// File name of the demo storage area
pub const DEMO_STORAGE_FILE: &str = "demo.json";

/// Demo service for managing demo mode
pub struct DemoService {
    data_dir: PathBuf,
}

impl DemoService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.data_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    ///
    /// This will:
    /// 1. Delete any existing demo storage file (fresh start)
    /// 2. Enable demo mode in config
    /// 3. Create the demo storage area with sample accounts
    pub fn enable(&self) -> Result<()> {
        let demo_path = self.data_dir.join(DEMO_STORAGE_FILE);
        if demo_path.exists() {
            std::fs::remove_file(&demo_path)?;
        }

        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.data_dir)?;

        let storage = Arc::new(LocalStorage::new(&demo_path));
        let store = JsonStore::new(storage);
        for user in generate_demo_users() {
            if !store.add(&user) {
                return Err(anyhow!("failed to seed demo account {}", user.email));
            }
        }

        Ok(())
    }

    /// Disable demo mode
    ///
    /// This will:
    /// 1. Disable demo mode in config
    /// 2. Optionally delete the demo storage file (if clean = true)
    pub fn disable(&self, clean: bool) -> Result<()> {
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.data_dir)?;

        if clean {
            let demo_path = self.data_dir.join(DEMO_STORAGE_FILE);
            if demo_path.exists() {
                std::fs::remove_file(&demo_path)?;
            }
        }

        Ok(())
    }
}
