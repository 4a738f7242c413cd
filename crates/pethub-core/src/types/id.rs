//! Newtype wrappers for domain entity identifiers.
//!
//! Users are keyed by a database-assigned integer. Wrapping it keeps a
//! `UserId` from being confused with an action-log row id. When the
//! `sqlx` feature is enabled the wrapper is transparent to PostgreSQL
//! as a `BIGINT`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw integer.
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Return the inner integer value.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user account.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_id_from_str() {
        let id: UserId = " 7 ".parse().expect("should parse");
        assert_eq!(id, UserId(7));
        assert!("seven".parse::<UserId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&UserId(7)).expect("serialize");
        assert_eq!(json, "7");
        let parsed: UserId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(parsed, UserId(7));
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        let mut ids = vec![UserId(9), UserId(2), UserId(5)];
        ids.sort();
        assert_eq!(ids, vec![UserId(2), UserId(5), UserId(9)]);
    }
}
