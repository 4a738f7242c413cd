//! Users flagged by the suspicious-activity monitor.

pub mod model;

pub use model::{MonitoredUser, NewMonitoredUser};
