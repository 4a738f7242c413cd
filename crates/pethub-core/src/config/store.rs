//! Store backend selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which backend holds the action log and the monitored set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// PostgreSQL via sqlx.
    Postgres,
    /// Process-local maps; state is lost on restart.
    #[default]
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Store configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Backend type: `"postgres"` or `"memory"`.
    #[serde(default)]
    pub backend: StoreBackend,
}
