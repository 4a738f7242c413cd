//! Monitored-user listing.

use axum::Json;
use axum::extract::State;

use pethub_entity::monitored::MonitoredUser;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/monitored-users
///
/// Returns every monitored record as a bare JSON array, oldest first.
pub async fn list_monitored_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<MonitoredUser>>, ApiError> {
    require_admin(&auth)?;

    let users = state.stores.monitored().list().await?;
    tracing::debug!(admin = %auth.user_id(), count = users.len(), "Listed monitored users");
    Ok(Json(users))
}
