//! Lifecycle of the background monitor task.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use pethub_core::config::MonitorConfig;

use crate::monitor::ActivityMonitor;
use crate::runner::MonitorRunner;

/// Starts the monitor loop on its own task.
#[derive(Debug)]
pub struct MonitorScheduler;

impl MonitorScheduler {
    /// Spawn the loop with the configured interval and shutdown grace.
    pub fn spawn(monitor: Arc<ActivityMonitor>, config: &MonitorConfig) -> MonitorHandle {
        Self::spawn_with(monitor, config.interval(), config.shutdown_grace())
    }

    /// Spawn the loop with explicit timings.
    pub fn spawn_with(
        monitor: Arc<ActivityMonitor>,
        interval: Duration,
        grace: Duration,
    ) -> MonitorHandle {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let runner = MonitorRunner::new(monitor, interval);
        let cycles = runner.cycle_counter();
        let task = tokio::spawn(async move { runner.run(cancel_rx).await });

        MonitorHandle {
            cancel: cancel_tx,
            task,
            cycles,
            grace,
        }
    }
}

/// Handle to a running monitor loop.
#[derive(Debug)]
pub struct MonitorHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
    cycles: Arc<AtomicU64>,
    grace: Duration,
}

impl MonitorHandle {
    /// Cycles finished so far.
    pub fn cycles_completed(&self) -> u64 {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Whether the loop task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signal the loop to stop and wait for an in-flight cycle.
    ///
    /// If the cycle outlives the grace period the task is aborted.
    pub async fn shutdown(self) {
        let _ = self.cancel.send(true);
        let abort = self.task.abort_handle();

        match tokio::time::timeout(self.grace, self.task).await {
            Ok(Ok(())) => info!("Activity monitor shut down"),
            Ok(Err(e)) => warn!(error = %e, "Activity monitor task ended abnormally"),
            Err(_) => {
                warn!(
                    grace_secs = self.grace.as_secs(),
                    "Activity monitor did not stop in time, aborting"
                );
                abort.abort();
            }
        }
    }
}
