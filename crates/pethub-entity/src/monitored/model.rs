//! Monitored user entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pethub_core::UserId;

/// A user flagged for unusually high write activity.
///
/// At most one record exists per user. Records are never updated; the
/// admin endpoint returns them verbatim with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredUser {
    /// The flagged user.
    pub user_id: UserId,
    /// Why the user was flagged.
    pub reason: String,
    /// When the user was flagged.
    pub created_at: DateTime<Utc>,
}

/// Data required to flag a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMonitoredUser {
    /// The user to flag.
    pub user_id: UserId,
    /// Free-text reason.
    pub reason: String,
}

impl NewMonitoredUser {
    /// Build the record for a user who crossed the activity threshold.
    pub fn for_activity(user_id: UserId, count: u64, window_seconds: u64) -> Self {
        Self {
            user_id,
            reason: format!("Performed {count} operations in the last {window_seconds} seconds"),
        }
    }

    /// Stamp the record with its creation time.
    pub fn into_record(self, created_at: DateTime<Utc>) -> MonitoredUser {
        MonitoredUser {
            user_id: self.user_id,
            reason: self.reason,
            created_at,
        }
    }
}
