//! # pethub-database
//!
//! Storage for the suspicious-activity monitor: the append-only action
//! log and the monitored-user set. Each store is a trait with a
//! PostgreSQL implementation (sqlx) and an in-memory implementation,
//! selected at startup by [`provider::StoreManager`].

#[cfg(feature = "postgres")]
pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "postgres")]
pub mod migration;
pub mod provider;
#[cfg(feature = "postgres")]
pub mod repositories;
pub mod store;

#[cfg(feature = "postgres")]
pub use connection::DatabasePool;
pub use provider::StoreManager;
pub use store::{ActionLogStore, MonitoredUserStore};
