//! In-memory store implementations.
//!
//! Backed by `DashMap` so concurrent writers never contend on a single
//! lock. Each store can be switched to an unavailable state to exercise
//! outage handling.

pub mod action_log;
pub mod monitored_user;

pub use action_log::MemoryActionLogStore;
pub use monitored_user::MemoryMonitoredUserStore;

use pethub_core::error::AppError;

fn unavailable(store: &str) -> AppError {
    AppError::service_unavailable(format!("{store} is unavailable"))
}
