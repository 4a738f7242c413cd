//! One aggregate-then-promote cycle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::info;

use pethub_core::config::MonitorConfig;
use pethub_database::StoreManager;
use pethub_entity::monitored::MonitoredUser;

use crate::aggregator::WindowAggregator;
use crate::error::MonitorError;
use crate::promoter::MonitorPromoter;

/// Outcome of a completed cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// End of the window the cycle looked at.
    pub now: DateTime<Utc>,
    /// Distinct users with at least one action in the window.
    pub active_users: usize,
    /// Users at or above the threshold.
    pub qualifying_users: usize,
    /// Records created by this cycle.
    pub promoted: Vec<MonitoredUser>,
}

/// The suspicious-activity monitor.
///
/// Cycles are serialized by an internal lock, so a manual [`run_once`]
/// never overlaps the scheduled loop.
///
/// [`run_once`]: ActivityMonitor::run_once
#[derive(Debug)]
pub struct ActivityMonitor {
    aggregator: WindowAggregator,
    promoter: MonitorPromoter,
    cycle_lock: Mutex<()>,
}

impl ActivityMonitor {
    pub fn new(aggregator: WindowAggregator, promoter: MonitorPromoter) -> Self {
        Self {
            aggregator,
            promoter,
            cycle_lock: Mutex::new(()),
        }
    }

    /// Wire a monitor to the configured stores.
    pub fn from_config(config: &MonitorConfig, stores: &StoreManager) -> Arc<Self> {
        let aggregator = WindowAggregator::new(stores.action_log(), config.window());
        let promoter =
            MonitorPromoter::new(stores.monitored(), config.threshold, config.window_seconds);
        Arc::new(Self::new(aggregator, promoter))
    }

    /// Run a cycle against the current wall-clock time.
    pub async fn run_once(&self) -> Result<CycleReport, MonitorError> {
        self.run_cycle(Utc::now()).await
    }

    /// Run a cycle whose window ends at `now`.
    pub async fn run_cycle(&self, now: DateTime<Utc>) -> Result<CycleReport, MonitorError> {
        let _guard = self.cycle_lock.lock().await;

        let counts = self.aggregator.aggregate(now).await?;
        let threshold = self.promoter.threshold();
        let qualifying_users = counts.values().filter(|c| **c >= threshold).count();
        let promoted = self.promoter.promote(&counts).await?;

        if !promoted.is_empty() {
            info!(
                promoted = promoted.len(),
                qualifying = qualifying_users,
                "Monitor cycle flagged new users"
            );
        }

        Ok(CycleReport {
            now,
            active_users: counts.len(),
            qualifying_users,
            promoted,
        })
    }
}
