//! Threshold rule and idempotent promotion into the monitored set.

use std::sync::Arc;

use tracing::{debug, info};

use pethub_core::UserId;
use pethub_database::MonitoredUserStore;
use pethub_entity::monitored::{MonitoredUser, NewMonitoredUser};

use crate::aggregator::ActivityCounts;
use crate::error::MonitorError;

/// Flags every user whose count reaches the threshold.
///
/// A user is promoted at most once. An existing record is never updated,
/// and an insert that loses a race to another promoter is treated as done.
#[derive(Debug, Clone)]
pub struct MonitorPromoter {
    store: Arc<dyn MonitoredUserStore>,
    threshold: u64,
    window_seconds: u64,
}

impl MonitorPromoter {
    pub fn new(store: Arc<dyn MonitoredUserStore>, threshold: u64, window_seconds: u64) -> Self {
        Self {
            store,
            threshold,
            window_seconds,
        }
    }

    /// Minimum count that flags a user.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Promote every qualifying user and return the records created by this call.
    ///
    /// Stops at the first store outage or unexpected failure; users already
    /// promoted earlier in the same call stay promoted.
    pub async fn promote(&self, counts: &ActivityCounts) -> Result<Vec<MonitoredUser>, MonitorError> {
        let mut created = Vec::new();
        for (&user_id, &count) in counts.iter().filter(|(_, c)| **c >= self.threshold) {
            match self.promote_user(user_id, count).await {
                Ok(Some(record)) => created.push(record),
                Ok(None) => {}
                Err(MonitorError::DuplicatePromotion(user_id)) => {
                    debug!(user_id = %user_id, "User promoted concurrently, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(created)
    }

    async fn promote_user(
        &self,
        user_id: UserId,
        count: u64,
    ) -> Result<Option<MonitoredUser>, MonitorError> {
        let existing = self
            .store
            .find_by_user_id(user_id)
            .await
            .map_err(|e| MonitorError::from_promotion_error(e, user_id, count))?;
        if existing.is_some() {
            return Ok(None);
        }

        let record = self
            .store
            .insert(NewMonitoredUser::for_activity(user_id, count, self.window_seconds))
            .await
            .map_err(|e| MonitorError::from_promotion_error(e, user_id, count))?;

        info!(
            user_id = %user_id,
            count,
            window_seconds = self.window_seconds,
            "User added to monitored set"
        );
        Ok(Some(record))
    }
}
