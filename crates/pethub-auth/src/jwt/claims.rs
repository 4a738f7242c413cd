//! JWT claims structure carried in access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pethub_core::UserId;
use pethub_entity::user::UserRole;

/// Claims payload embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id. Tokens issued by the legacy login service
    /// carry it as `userId`.
    #[serde(alias = "userId")]
    pub sub: UserId,
    /// Role at the time of issuance.
    pub role: UserRole,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user id from the subject claim.
    pub fn user_id(&self) -> UserId {
        self.sub
    }

    /// Whether the bearer may use admin-only endpoints.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
