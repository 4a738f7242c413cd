//! Action log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pethub_core::UserId;

/// An immutable record of one mutating operation performed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ActionLogEntry {
    /// Monotonic identifier assigned by the store on write.
    pub id: i64,
    /// The user who performed the action.
    pub user_id: UserId,
    /// Short descriptive label, e.g. `"CREATE_PET 42"`.
    pub action: String,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
}

/// Data required to append a new action log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActionLogEntry {
    /// The user who performed the action.
    pub user_id: UserId,
    /// Action label.
    pub action: String,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
}

impl NewActionLogEntry {
    /// An entry stamped with an explicit time.
    pub fn at(user_id: UserId, action: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id,
            action: action.into(),
            timestamp,
        }
    }

    /// An entry stamped with the current wall-clock time.
    pub fn now(user_id: UserId, action: impl Into<String>) -> Self {
        Self::at(user_id, action, Utc::now())
    }

    /// Attach the store-assigned id.
    pub fn into_entry(self, id: i64) -> ActionLogEntry {
        ActionLogEntry {
            id,
            user_id: self.user_id,
            action: self.action,
            timestamp: self.timestamp,
        }
    }
}
