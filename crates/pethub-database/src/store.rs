//! Store traits for the action log and the monitored-user set.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pethub_core::result::AppResult;
use pethub_core::UserId;
use pethub_entity::action_log::{ActionLogEntry, NewActionLogEntry};
use pethub_entity::monitored::{MonitoredUser, NewMonitoredUser};

/// Append-only store of action log entries.
///
/// Writers never coordinate with each other; readers see every entry
/// committed before their query started.
#[async_trait]
pub trait ActionLogStore: Send + Sync + std::fmt::Debug + 'static {
    /// Append an entry and return it with its assigned id.
    ///
    /// Fails with `ErrorKind::ServiceUnavailable` when the store cannot be reached.
    async fn append(&self, entry: NewActionLogEntry) -> AppResult<ActionLogEntry>;

    /// All entries with `start <= timestamp < end`, in no particular order.
    async fn query_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<ActionLogEntry>>;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Persisted set of monitored users, keyed by user id.
#[async_trait]
pub trait MonitoredUserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Look up the record for a user.
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<MonitoredUser>>;

    /// Insert a new record.
    ///
    /// Implementations enforce uniqueness on `user_id`: inserting a user
    /// that already has a record fails with `ErrorKind::Conflict` and
    /// leaves the existing record untouched.
    async fn insert(&self, record: NewMonitoredUser) -> AppResult<MonitoredUser>;

    /// Every record, oldest first.
    async fn list(&self) -> AppResult<Vec<MonitoredUser>>;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool>;
}
