//! Trailing-window activity counts.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use pethub_core::UserId;
use pethub_core::error::AppError;
use pethub_database::ActionLogStore;

use crate::error::MonitorError;

/// Per-user action counts for one window.
pub type ActivityCounts = BTreeMap<UserId, u64>;

/// Counts log entries per user over `[now - window, now)`.
///
/// Holds no state between calls. Entries are filtered by their timestamp
/// value, so late or out-of-order inserts are still counted by any cycle
/// whose window covers them.
#[derive(Debug, Clone)]
pub struct WindowAggregator {
    store: Arc<dyn ActionLogStore>,
    window: TimeDelta,
}

impl WindowAggregator {
    pub fn new(store: Arc<dyn ActionLogStore>, window: TimeDelta) -> Self {
        Self { store, window }
    }

    /// Window length.
    pub fn window(&self) -> TimeDelta {
        self.window
    }

    /// Count entries per user with `now - window <= timestamp < now`.
    ///
    /// A window reaching past the earliest representable timestamp fails the
    /// cycle with [`MonitorError::Unexpected`] instead of panicking.
    pub async fn aggregate(&self, now: DateTime<Utc>) -> Result<ActivityCounts, MonitorError> {
        let start = now
            .checked_sub_signed(self.window)
            .ok_or_else(|| MonitorError::Unexpected {
                user_id: None,
                count: None,
                source: AppError::configuration(format!(
                    "Window of {}s before {now} is out of range",
                    self.window.num_seconds()
                )),
            })?;
        let entries = self
            .store
            .query_range(start, now)
            .await
            .map_err(MonitorError::from_log_error)?;

        let mut counts = ActivityCounts::new();
        for entry in entries.iter().filter(|e| e.timestamp >= start && e.timestamp < now) {
            *counts.entry(entry.user_id).or_insert(0) += 1;
        }

        debug!(
            window_start = %start,
            window_end = %now,
            entries = entries.len(),
            users = counts.len(),
            "Aggregated action log window"
        );
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use pethub_database::memory::MemoryActionLogStore;
    use pethub_entity::action_log::NewActionLogEntry;

    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    async fn seed(store: &MemoryActionLogStore, user: i64, at: DateTime<Utc>) {
        store
            .append(NewActionLogEntry::at(UserId(user), "UPDATE_PET 1", at))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_log_gives_empty_map() {
        let store = Arc::new(MemoryActionLogStore::new());
        let aggregator = WindowAggregator::new(store, TimeDelta::seconds(60));
        assert!(aggregator.aggregate(now()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_counts_only_entries_inside_window() {
        let store = Arc::new(MemoryActionLogStore::new());
        let now = now();

        seed(&store, 1, now - TimeDelta::seconds(60)).await;
        seed(&store, 1, now - TimeDelta::seconds(30)).await;
        seed(&store, 1, now - TimeDelta::milliseconds(1)).await;
        seed(&store, 1, now).await;
        seed(&store, 1, now - TimeDelta::seconds(61)).await;
        seed(&store, 2, now - TimeDelta::seconds(5)).await;
        seed(&store, 3, now + TimeDelta::seconds(5)).await;

        let aggregator = WindowAggregator::new(store, TimeDelta::seconds(60));
        let counts = aggregator.aggregate(now).await.unwrap();

        assert_eq!(counts.get(&UserId(1)), Some(&3));
        assert_eq!(counts.get(&UserId(2)), Some(&1));
        assert_eq!(counts.get(&UserId(3)), None);
        assert_eq!(counts.len(), 2);
    }

    #[tokio::test]
    async fn test_out_of_order_inserts_are_counted() {
        let store = Arc::new(MemoryActionLogStore::new());
        let now = now();
        seed(&store, 5, now - TimeDelta::seconds(2)).await;
        seed(&store, 5, now - TimeDelta::seconds(50)).await;
        seed(&store, 5, now - TimeDelta::seconds(10)).await;

        let aggregator = WindowAggregator::new(store, TimeDelta::seconds(60));
        assert_eq!(aggregator.aggregate(now).await.unwrap()[&UserId(5)], 3);
    }

    #[tokio::test]
    async fn test_outage_is_store_unavailable() {
        let store = Arc::new(MemoryActionLogStore::new());
        store.set_available(false);
        let aggregator = WindowAggregator::new(store, TimeDelta::seconds(60));
        assert!(matches!(
            aggregator.aggregate(now()).await,
            Err(MonitorError::StoreUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_unrepresentable_window_fails_cycle() {
        let store = Arc::new(MemoryActionLogStore::new());
        seed(&store, 1, now() - TimeDelta::seconds(1)).await;
        let aggregator = WindowAggregator::new(store, TimeDelta::MAX);

        assert!(matches!(
            aggregator.aggregate(now()).await,
            Err(MonitorError::Unexpected {
                user_id: None,
                count: None,
                ..
            })
        ));
    }
}
