//! Store fakes shared by the unit tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pethub_core::UserId;
use pethub_core::error::AppError;
use pethub_core::result::AppResult;
use pethub_database::memory::{MemoryActionLogStore, MemoryMonitoredUserStore};
use pethub_database::{ActionLogStore, MonitoredUserStore};
use pethub_entity::action_log::{ActionLogEntry, NewActionLogEntry};
use pethub_entity::monitored::{MonitoredUser, NewMonitoredUser};

/// Delegates to a memory store but fails every insert for one user with an
/// internal error.
#[derive(Debug)]
pub(crate) struct BrokenUserStore {
    pub inner: MemoryMonitoredUserStore,
    pub broken: UserId,
}

impl BrokenUserStore {
    pub fn new(broken: UserId) -> Self {
        Self {
            inner: MemoryMonitoredUserStore::new(),
            broken,
        }
    }
}

#[async_trait]
impl MonitoredUserStore for BrokenUserStore {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<MonitoredUser>> {
        self.inner.find_by_user_id(user_id).await
    }
    async fn insert(&self, record: NewMonitoredUser) -> AppResult<MonitoredUser> {
        if record.user_id == self.broken {
            return Err(AppError::internal("constraint check failed"));
        }
        self.inner.insert(record).await
    }
    async fn list(&self) -> AppResult<Vec<MonitoredUser>> {
        self.inner.list().await
    }
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Panics on the first range query, then behaves like a memory log.
#[derive(Debug, Default)]
pub(crate) struct PanicOnceLogStore {
    pub inner: MemoryActionLogStore,
    queries: AtomicU64,
}

#[async_trait]
impl ActionLogStore for PanicOnceLogStore {
    async fn append(&self, entry: NewActionLogEntry) -> AppResult<ActionLogEntry> {
        self.inner.append(entry).await
    }
    async fn query_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<ActionLogEntry>> {
        if self.queries.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("corrupt action log page");
        }
        self.inner.query_range(start, end).await
    }
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
