//! PostgreSQL implementations of the monitor stores.

pub mod action_log;
pub mod monitored_user;

pub use action_log::ActionLogRepository;
pub use monitored_user::MonitoredUserRepository;

use pethub_core::error::AppError;

/// Classify a sqlx error and prefix it with what was being attempted.
pub(crate) fn db_error(context: &str, err: sqlx::Error) -> AppError {
    let mut mapped = AppError::from(err);
    mapped.message = format!("{context}: {}", mapped.message);
    mapped
}
