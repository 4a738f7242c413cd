//! Monitor loop: one cycle per interval until cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::error::MonitorError;
use crate::monitor::{ActivityMonitor, CycleReport};

/// Drives [`ActivityMonitor`] on a fixed interval.
///
/// Each cycle runs on its own task and is awaited before the next tick is
/// taken, and ticks missed while a slow cycle ran are skipped rather than
/// replayed. A panicking cycle is logged and counted like any other failure.
#[derive(Debug)]
pub struct MonitorRunner {
    monitor: Arc<ActivityMonitor>,
    interval: Duration,
    cycles: Arc<AtomicU64>,
}

impl MonitorRunner {
    pub fn new(monitor: Arc<ActivityMonitor>, interval: Duration) -> Self {
        Self {
            monitor,
            interval,
            cycles: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Counter of finished cycles, successful or not.
    pub fn cycle_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.cycles)
    }

    /// Run until `cancel` flips to `true` or its sender is dropped.
    ///
    /// The first cycle runs one full interval after start.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        info!(interval_secs = self.interval.as_secs(), "Activity monitor started");

        let Some(start) = time::Instant::now()
            .checked_add(self.interval)
            .filter(|_| !self.interval.is_zero())
        else {
            error!(
                interval_secs = self.interval.as_secs(),
                "Activity monitor interval is out of range, not starting"
            );
            return;
        };
        let mut ticker = time::interval_at(start, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            if *cancel.borrow() {
                break;
            }
            tokio::select! {
                biased;
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }

        info!("Activity monitor stopped");
    }

    async fn tick(&self) {
        // Dropping the set aborts the cycle if this loop is itself aborted.
        let mut cycle = JoinSet::new();
        let monitor = Arc::clone(&self.monitor);
        cycle.spawn(async move { monitor.run_once().await });

        let Some(joined) = cycle.join_next().await else {
            return;
        };
        match joined {
            Ok(outcome) => Self::log_outcome(outcome),
            Err(e) if e.is_panic() => {
                error!(error = %e, "Monitor cycle panicked");
            }
            Err(e) => {
                warn!(error = %e, "Monitor cycle was cancelled");
            }
        }
        self.cycles.fetch_add(1, Ordering::SeqCst);
    }

    fn log_outcome(outcome: Result<CycleReport, MonitorError>) {
        match outcome {
            Ok(report) => {
                debug!(
                    active_users = report.active_users,
                    qualifying = report.qualifying_users,
                    promoted = report.promoted.len(),
                    "Monitor cycle completed"
                );
            }
            Err(MonitorError::StoreUnavailable(msg)) => {
                warn!(error = %msg, "Monitor cycle skipped: store unavailable");
            }
            Err(e) => {
                error!(error = %e, "Monitor cycle failed");
            }
        }
    }
}
