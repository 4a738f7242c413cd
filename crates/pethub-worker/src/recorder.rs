//! Action recorder used by the CRUD layer on every mutating operation.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use pethub_core::UserId;
use pethub_database::ActionLogStore;
use pethub_entity::action_log::{ActionLogEntry, NewActionLogEntry};

/// Appends action log entries without ever failing the caller.
///
/// A lost entry only makes the monitor under-count, so write failures are
/// logged and dropped.
#[derive(Debug, Clone)]
pub struct ActionRecorder {
    store: Arc<dyn ActionLogStore>,
}

impl ActionRecorder {
    pub fn new(store: Arc<dyn ActionLogStore>) -> Self {
        Self { store }
    }

    /// Append an entry stamped with the current time and wait for the write.
    ///
    /// Returns `None` if the store rejected it.
    pub async fn record(&self, user_id: UserId, action: impl Into<String>) -> Option<ActionLogEntry> {
        append(self.store.as_ref(), NewActionLogEntry::now(user_id, action)).await
    }

    /// Append an entry on a background task and return immediately.
    pub fn record_detached(
        &self,
        user_id: UserId,
        action: impl Into<String>,
    ) -> JoinHandle<Option<ActionLogEntry>> {
        let store = Arc::clone(&self.store);
        let entry = NewActionLogEntry::now(user_id, action);
        tokio::spawn(async move { append(store.as_ref(), entry).await })
    }
}

async fn append(store: &dyn ActionLogStore, entry: NewActionLogEntry) -> Option<ActionLogEntry> {
    let user_id = entry.user_id;
    match store.append(entry).await {
        Ok(stored) => {
            debug!(user_id = %user_id, action = %stored.action, id = stored.id, "Action recorded");
            Some(stored)
        }
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Failed to record action");
            None
        }
    }
}
