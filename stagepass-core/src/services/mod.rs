//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod auth;
mod dashboard;
mod demo;
mod form;
pub mod logging;
mod session;

pub use auth::{AuthService, LoginError, SignupError};
pub use dashboard::{greeting_for_hour, initials, DashboardService, DashboardSummary};
pub use demo::{DemoService, DEMO_STORAGE_FILE};
pub use form::{AuthForm, SubmitOutcome, LOGIN_SUCCESS_MESSAGE, SIGNUP_SUCCESS_MESSAGE};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use session::SessionService;
