//! Monitored user repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use pethub_core::result::AppResult;
use pethub_core::UserId;
use pethub_entity::monitored::{MonitoredUser, NewMonitoredUser};

use super::db_error;
use crate::store::MonitoredUserStore;

/// Monitored set backed by the `monitored_users` table.
///
/// `user_id` is the primary key, so a second insert for the same user
/// fails with a unique violation that maps to `ErrorKind::Conflict`.
#[derive(Debug, Clone)]
pub struct MonitoredUserRepository {
    pool: PgPool,
}

impl MonitoredUserRepository {
    /// Create a new monitored user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MonitoredUserStore for MonitoredUserRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<MonitoredUser>> {
        sqlx::query_as::<_, MonitoredUser>(
            "SELECT user_id, reason, created_at FROM monitored_users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find monitored user", e))
    }

    async fn insert(&self, record: NewMonitoredUser) -> AppResult<MonitoredUser> {
        sqlx::query_as::<_, MonitoredUser>(
            "INSERT INTO monitored_users (user_id, reason) VALUES ($1, $2) \
             RETURNING user_id, reason, created_at",
        )
        .bind(record.user_id)
        .bind(&record.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error(&format!("Failed to insert monitored user {}", record.user_id), e))
    }

    async fn list(&self) -> AppResult<Vec<MonitoredUser>> {
        sqlx::query_as::<_, MonitoredUser>(
            "SELECT user_id, reason, created_at FROM monitored_users \
             ORDER BY created_at ASC, user_id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list monitored users", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| db_error("Monitored user health check failed", e))
    }
}
