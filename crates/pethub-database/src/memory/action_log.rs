//! In-memory action log.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use pethub_core::result::AppResult;
use pethub_entity::action_log::{ActionLogEntry, NewActionLogEntry};

use super::unavailable;
use crate::store::ActionLogStore;

/// Action log held in a concurrent map of one-second buckets, keyed by the
/// entry timestamp's Unix second.
///
/// A range query visits only the buckets its range covers, or every bucket
/// when that is fewer, so a short window stays cheap as the log grows.
/// Nothing is ever evicted: this store is meant for development and tests.
#[derive(Debug)]
pub struct MemoryActionLogStore {
    buckets: DashMap<i64, Vec<ActionLogEntry>>,
    entries: AtomicUsize,
    next_id: AtomicI64,
    available: AtomicBool,
}

impl MemoryActionLogStore {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
            entries: AtomicUsize::new(0),
            next_id: AtomicI64::new(1),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle availability. While unavailable every call fails with
    /// `ErrorKind::ServiceUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.load(Ordering::SeqCst)
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(unavailable("Action log store"))
        }
    }
}

impl Default for MemoryActionLogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionLogStore for MemoryActionLogStore {
    async fn append(&self, entry: NewActionLogEntry) -> AppResult<ActionLogEntry> {
        self.ensure_available()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = entry.into_entry(id);
        self.buckets
            .entry(stored.timestamp.timestamp())
            .or_default()
            .push(stored.clone());
        self.entries.fetch_add(1, Ordering::SeqCst);
        Ok(stored)
    }

    async fn query_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<ActionLogEntry>> {
        self.ensure_available()?;
        if end <= start {
            return Ok(Vec::new());
        }

        let in_range = |e: &&ActionLogEntry| e.timestamp >= start && e.timestamp < end;
        let (first, last) = (start.timestamp(), end.timestamp());
        let span = u64::try_from(last - first).unwrap_or(u64::MAX);
        let mut hits = Vec::new();

        if span < self.buckets.len() as u64 {
            for second in first..=last {
                if let Some(bucket) = self.buckets.get(&second) {
                    hits.extend(bucket.iter().filter(in_range).cloned());
                }
            }
        } else {
            for bucket in self.buckets.iter() {
                if (first..=last).contains(bucket.key()) {
                    hits.extend(bucket.value().iter().filter(in_range).cloned());
                }
            }
        }
        Ok(hits)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.available.load(Ordering::SeqCst))
    }
}
