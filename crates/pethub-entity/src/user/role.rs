//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles carried in access tokens.
///
/// Only administrators may read the monitored-user set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    /// Regular account: manages its own pets.
    #[default]
    #[serde(alias = "User")]
    Regular,
    /// Administrator: may edit any resource and read the monitored set.
    Admin,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = pethub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" | "user" => Ok(Self::Regular),
            "admin" => Ok(Self::Admin),
            _ => Err(pethub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: Regular, Admin"
            ))),
        }
    }
}
