//! Action log repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pethub_core::result::AppResult;
use pethub_entity::action_log::{ActionLogEntry, NewActionLogEntry};

use super::db_error;
use crate::store::ActionLogStore;

/// Action log backed by the `action_logs` table.
#[derive(Debug, Clone)]
pub struct ActionLogRepository {
    pool: PgPool,
}

impl ActionLogRepository {
    /// Create a new action log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionLogStore for ActionLogRepository {
    async fn append(&self, entry: NewActionLogEntry) -> AppResult<ActionLogEntry> {
        sqlx::query_as::<_, ActionLogEntry>(
            r#"INSERT INTO action_logs (user_id, action, "timestamp")
               VALUES ($1, $2, $3)
               RETURNING id, user_id, action, "timestamp""#,
        )
        .bind(entry.user_id)
        .bind(&entry.action)
        .bind(entry.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to append action log entry", e))
    }

    async fn query_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<ActionLogEntry>> {
        sqlx::query_as::<_, ActionLogEntry>(
            r#"SELECT id, user_id, action, "timestamp"
               FROM action_logs
               WHERE "timestamp" >= $1 AND "timestamp" < $2"#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to query action log range", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| db_error("Action log health check failed", e))
    }
}
