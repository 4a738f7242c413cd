//! In-memory monitored-user set.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use pethub_core::error::AppError;
use pethub_core::result::AppResult;
use pethub_core::UserId;
use pethub_entity::monitored::{MonitoredUser, NewMonitoredUser};

use super::unavailable;
use crate::store::MonitoredUserStore;

/// Monitored set keyed by user id. The map key is the uniqueness constraint.
#[derive(Debug)]
pub struct MemoryMonitoredUserStore {
    records: DashMap<UserId, MonitoredUser>,
    available: AtomicBool,
}

impl MemoryMonitoredUserStore {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle availability.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of monitored users.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no user is monitored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(unavailable("Monitored user store"))
        }
    }
}

impl Default for MemoryMonitoredUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MonitoredUserStore for MemoryMonitoredUserStore {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<MonitoredUser>> {
        self.ensure_available()?;
        Ok(self.records.get(&user_id).map(|r| r.value().clone()))
    }

    async fn insert(&self, record: NewMonitoredUser) -> AppResult<MonitoredUser> {
        self.ensure_available()?;
        match self.records.entry(record.user_id) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "User {} is already monitored",
                record.user_id
            ))),
            Entry::Vacant(slot) => {
                let stored = record.into_record(Utc::now());
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn list(&self) -> AppResult<Vec<MonitoredUser>> {
        self.ensure_available()?;
        let mut all: Vec<MonitoredUser> = self.records.iter().map(|r| r.value().clone()).collect();
        all.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        Ok(all)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.available.load(Ordering::SeqCst))
    }
}
