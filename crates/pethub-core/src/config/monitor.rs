//! Suspicious-activity monitor configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Upper bound for every monitor duration: one year in seconds.
pub const MAX_MONITOR_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Settings for the periodic activity monitor.
///
/// `interval_seconds` and `window_seconds` are independent: the first is
/// how often a cycle runs, the second how far back each cycle looks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Whether the monitor runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds between cycles.
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    /// Length of the trailing aggregation window in seconds.
    #[serde(default = "default_window")]
    pub window_seconds: u64,
    /// Minimum number of actions inside the window that flags a user.
    #[serde(default = "default_threshold")]
    pub threshold: u64,
    /// How long shutdown waits for an in-flight cycle.
    #[serde(default = "default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl MonitorConfig {
    /// Poll interval as a std duration.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    /// Lookback window as a chrono duration, for timestamp arithmetic.
    ///
    /// Saturates at [`chrono::TimeDelta::MAX`] for values chrono cannot hold.
    pub fn window(&self) -> chrono::TimeDelta {
        i64::try_from(self.window_seconds)
            .ok()
            .and_then(chrono::TimeDelta::try_seconds)
            .unwrap_or(chrono::TimeDelta::MAX)
    }

    /// Shutdown grace period as a std duration.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }

    /// Reject zero-valued parameters and durations above
    /// [`MAX_MONITOR_SECONDS`].
    pub fn validate(&self) -> Result<(), AppError> {
        check_seconds("monitor.interval_seconds", self.interval_seconds, false)?;
        check_seconds("monitor.window_seconds", self.window_seconds, false)?;
        check_seconds(
            "monitor.shutdown_grace_seconds",
            self.shutdown_grace_seconds,
            true,
        )?;
        if self.threshold == 0 {
            return Err(AppError::configuration(
                "monitor.threshold must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            interval_seconds: default_interval(),
            window_seconds: default_window(),
            threshold: default_threshold(),
            shutdown_grace_seconds: default_shutdown_grace(),
        }
    }
}

fn check_seconds(name: &str, value: u64, allow_zero: bool) -> Result<(), AppError> {
    if value == 0 && !allow_zero {
        return Err(AppError::configuration(format!(
            "{name} must be greater than zero"
        )));
    }
    if value > MAX_MONITOR_SECONDS {
        return Err(AppError::configuration(format!(
            "{name} must be at most {MAX_MONITOR_SECONDS} seconds, got {value}"
        )));
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

fn default_interval() -> u64 {
    60
}

fn default_window() -> u64 {
    60
}

fn default_threshold() -> u64 {
    5
}

fn default_shutdown_grace() -> u64 {
    30
}
