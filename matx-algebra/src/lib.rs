//! Matx Algebra - the matrix algebra engine
//!
//! Provides the numeric operations of the calculator:
//! - Element-wise add and subtract (owned result or in-place fold)
//! - Scalar multiply
//! - Matrix product (triple loop)
//! - Transpose
//! - Trace
//! - Determinant via unpivoted Gaussian elimination
//!
//! Every routine returns a freshly owned `Matrix` or mutates an
//! accumulator the caller owns exclusively; there is no shared
//! result buffer.

mod error;
mod checks;
mod ops;
mod determinant;

pub use error::AlgebraError;
pub use checks::{check_matmul_dims, check_same_dims, check_square};
pub use ops::{add, add_assign, multiply, scale, sub, sub_assign, trace, transpose};
pub use determinant::{determinant, upper_triangularize};
