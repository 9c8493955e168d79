//! Convenience result type alias for LabInv.

use crate::error::AppError;

/// A specialized `Result` type for LabInv operations.
pub type AppResult<T> = Result<T, AppError>;
