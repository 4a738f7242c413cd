//! Monitor error taxonomy.

use pethub_core::UserId;
use pethub_core::error::{AppError, ErrorKind};

/// Failures inside one monitor cycle.
///
/// None of these reach an end user. The runner logs them and moves on to
/// the next tick.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// A store could not be reached. The cycle is skipped.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Another promoter inserted the record first. Treated as success.
    #[error("User {0} was already promoted")]
    DuplicatePromotion(UserId),

    /// Anything else. The cycle aborts at the failing user.
    #[error("Unexpected monitor failure (user={user_id:?}, count={count:?}): {source}")]
    Unexpected {
        user_id: Option<UserId>,
        count: Option<u64>,
        #[source]
        source: AppError,
    },
}

impl MonitorError {
    /// Classify a store error raised while reading the action log.
    pub fn from_log_error(err: AppError) -> Self {
        if err.is_unavailable() {
            Self::StoreUnavailable(err.message)
        } else {
            Self::Unexpected {
                user_id: None,
                count: None,
                source: err,
            }
        }
    }

    /// Classify a store error raised while promoting `user_id`.
    pub fn from_promotion_error(err: AppError, user_id: UserId, count: u64) -> Self {
        let kind = err.kind;
        match kind {
            ErrorKind::Conflict => Self::DuplicatePromotion(user_id),
            _ if err.is_unavailable() => Self::StoreUnavailable(err.message),
            _ => Self::Unexpected {
                user_id: Some(user_id),
                count: Some(count),
                source: err,
            },
        }
    }
}
