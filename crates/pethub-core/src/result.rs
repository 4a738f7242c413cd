//! Convenience result type alias for PetHub.

use crate::error::AppError;

/// A specialized `Result` type for PetHub operations.
pub type AppResult<T> = Result<T, AppError>;
