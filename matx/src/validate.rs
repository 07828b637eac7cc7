//! Dimension validator
//!
//! Confirms that the next literal in a chain has a shape compatible
//! with the requested operator before any numeric parsing happens, so
//! a mismatch is reported without ever building a mis-shaped matrix.

use matx_core::CalcError;

use crate::scan::measure;

/// Validate the literal in `remaining` against a reference shape for
/// operator `op`.
///
/// For `+`/`-` the candidate must match the reference shape exactly.
/// For `*` both legacy swapped-reference checks apply: the candidate's
/// row count must equal the reference column count AND the candidate's
/// column count must equal the reference row count. Any operator
/// outside `+ - *` is fatal for the expression.
///
/// An empty `remaining` (no further literal) is valid.
pub fn validate(
    remaining: &str,
    ref_rows: usize,
    ref_cols: usize,
    op: char,
) -> Result<(), CalcError> {
    let dims = match measure(remaining)? {
        Some(d) => d,
        None => return Ok(()),
    };

    match op {
        '+' | '-' => {
            if dims.cols != ref_cols || dims.rows != ref_rows {
                return Err(CalcError::bad_dimension(format!(
                    "'{}' needs {}×{}, next matrix is {}×{}",
                    op, ref_rows, ref_cols, dims.rows, dims.cols
                )));
            }
        }
        '*' => {
            if dims.rows != ref_cols || dims.cols != ref_rows {
                return Err(CalcError::bad_dimension(format!(
                    "'*' after a {}×{} matrix needs {}×{}, next matrix is {}×{}",
                    ref_rows, ref_cols, ref_cols, ref_rows, dims.rows, dims.cols
                )));
            }
        }
        other => return Err(CalcError::unknown_operator(other)),
    }

    Ok(())
}
