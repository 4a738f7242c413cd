//! `AuthUser` extractor: pulls the JWT from the Authorization header and validates it.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use pethub_auth::Claims;
use pethub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims of the authenticated caller.
///
/// A missing or non-Bearer header is rejected with 401. A token that fails
/// verification or has expired is rejected with 403.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::authentication("Missing token"))?;

        let claims = state.jwt_decoder.decode_access_token(token).map_err(|e| {
            debug!(error = %e, "Rejected bearer token");
            AppError::authorization("Invalid token")
        })?;

        Ok(AuthUser(claims))
    }
}
