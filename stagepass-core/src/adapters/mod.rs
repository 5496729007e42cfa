//! Adapter implementations
//!
//! Concrete backends for the storage ports: a browser-style local-storage
//! file plus the demo seed data.

pub mod demo;
pub mod json_store;
pub mod local_storage;

pub use json_store::JsonStore;
pub use local_storage::LocalStorage;
