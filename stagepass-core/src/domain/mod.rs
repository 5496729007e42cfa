//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod form;
mod session;
mod theme;
mod user;
pub mod result;

pub use form::{Field, FieldErrors, FormFields, FormMode};
pub use session::SessionRecord;
pub use theme::Theme;
pub use user::UserRecord;
