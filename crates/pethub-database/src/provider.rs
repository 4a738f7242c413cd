//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use pethub_core::config::{DatabaseConfig, StoreBackend, StoreConfig};
use pethub_core::error::AppError;
use pethub_core::result::AppResult;

use crate::store::{ActionLogStore, MonitoredUserStore};

/// Owns the action log and monitored-user stores for the process.
///
/// The backend is selected at construction time from configuration.
/// Both stores always share one backend.
#[derive(Debug, Clone)]
pub struct StoreManager {
    action_log: Arc<dyn ActionLogStore>,
    monitored: Arc<dyn MonitoredUserStore>,
    #[cfg(feature = "postgres")]
    pool: Option<crate::connection::DatabasePool>,
}

impl StoreManager {
    /// Build the stores named by `store.backend`.
    ///
    /// The postgres backend connects and applies migrations before returning.
    #[cfg_attr(not(feature = "postgres"), allow(unused_variables))]
    pub async fn new(store: &StoreConfig, database: &DatabaseConfig) -> AppResult<Self> {
        match store.backend {
            #[cfg(feature = "postgres")]
            StoreBackend::Postgres => {
                info!("Initializing PostgreSQL stores");
                let pool = crate::connection::DatabasePool::connect(database).await?;
                crate::migration::run_migrations(pool.pool()).await?;
                Ok(Self {
                    action_log: Arc::new(crate::repositories::ActionLogRepository::new(
                        pool.pool().clone(),
                    )),
                    monitored: Arc::new(crate::repositories::MonitoredUserRepository::new(
                        pool.pool().clone(),
                    )),
                    pool: Some(pool),
                })
            }
            #[cfg(feature = "memory")]
            StoreBackend::Memory => {
                info!("Initializing in-memory stores");
                Ok(Self::from_stores(
                    Arc::new(crate::memory::MemoryActionLogStore::new()),
                    Arc::new(crate::memory::MemoryMonitoredUserStore::new()),
                ))
            }
            #[allow(unreachable_patterns)]
            other => Err(AppError::configuration(format!(
                "Store backend '{other}' is not compiled into this build"
            ))),
        }
    }

    /// Create a manager from existing stores (for testing).
    pub fn from_stores(
        action_log: Arc<dyn ActionLogStore>,
        monitored: Arc<dyn MonitoredUserStore>,
    ) -> Self {
        Self {
            action_log,
            monitored,
            #[cfg(feature = "postgres")]
            pool: None,
        }
    }

    /// The action log store.
    pub fn action_log(&self) -> Arc<dyn ActionLogStore> {
        Arc::clone(&self.action_log)
    }

    /// The monitored-user store.
    pub fn monitored(&self) -> Arc<dyn MonitoredUserStore> {
        Arc::clone(&self.monitored)
    }

    /// Check both stores.
    pub async fn health_check(&self) -> AppResult<bool> {
        let log_ok = self.action_log.health_check().await?;
        let monitored_ok = self.monitored.health_check().await?;
        Ok(log_ok && monitored_ok)
    }

    /// Release backend resources.
    pub async fn close(&self) {
        #[cfg(feature = "postgres")]
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
