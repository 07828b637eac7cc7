//! Algebra-level errors

use matx_core::CalcError;
use thiserror::Error;

/// Error type for matrix algebra operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("matrices must have the same shape: {0}×{1} vs {2}×{3}")]
    ShapeMismatch(usize, usize, usize, usize),

    #[error("incompatible shapes for multiplication: {0}×{1} times {2}×{3}")]
    MulMismatch(usize, usize, usize, usize),

    #[error("requires a square matrix, got {0}×{1}")]
    NotSquare(usize, usize),
}

impl From<AlgebraError> for CalcError {
    fn from(err: AlgebraError) -> Self {
        CalcError::bad_dimension(err.to_string())
    }
}
