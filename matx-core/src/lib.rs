//! Matx Core - Fundamental types
//!
//! This crate provides the core types used throughout Matx:
//! - `Matrix`: a 2-D grid of f64 values, row-major, fixed shape
//! - `CalcError`: structured errors with machine-readable codes

mod matrix;
mod error;

pub use matrix::Matrix;
pub use error::{CalcError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Matrix, CalcError, Severity};
    pub use crate::error::codes;
}
