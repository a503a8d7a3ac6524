//! Convenience result type alias for Backstore.

use crate::error::AppError;

/// A specialized `Result` type for Backstore operations.
pub type AppResult<T> = Result<T, AppError>;
