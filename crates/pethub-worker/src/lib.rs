//! Suspicious-activity monitor for PetHub.
//!
//! This crate provides:
//! - An action recorder the CRUD layer calls on every mutating operation
//! - A window aggregator that counts actions per user over a trailing window
//! - A promoter that flags users at or above the threshold, at most once each
//! - A runner and scheduler that repeat the cycle on an interval until shutdown

pub mod aggregator;
pub mod error;
pub mod monitor;
pub mod promoter;
pub mod recorder;
pub mod runner;
pub mod scheduler;

#[cfg(test)]
mod testing;

pub use aggregator::{ActivityCounts, WindowAggregator};
pub use error::MonitorError;
pub use monitor::{ActivityMonitor, CycleReport};
pub use promoter::MonitorPromoter;
pub use recorder::ActionRecorder;
pub use runner::MonitorRunner;
pub use scheduler::{MonitorHandle, MonitorScheduler};
