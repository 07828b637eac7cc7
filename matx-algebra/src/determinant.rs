//! Determinant via unpivoted Gaussian elimination
//!
//! No partial pivoting: an exactly-zero pivot aborts elimination and
//! the determinant is defined to be zero. This keeps the numerics of
//! the original calculator; it is a known accuracy trade-off.

use matx_core::Matrix;

use crate::checks::check_square;
use crate::AlgebraError;

/// Reduce a square matrix to upper-triangular form in place.
///
/// Returns `false` when a zero pivot is hit before elimination
/// completes; the matrix contents are unspecified in that case.
pub fn upper_triangularize(m: &mut Matrix) -> bool {
    let n = m.rows();
    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            if m[(i, i)] == 0.0 {
                return false;
            }
            let factor = m[(j, i)] / m[(i, i)];
            for k in i..n {
                let above = m[(i, k)];
                m[(j, k)] -= factor * above;
            }
        }
    }
    true
}

/// Determinant of a square matrix: the product of the diagonal of its
/// upper-triangular form. Works on a copy; the input is untouched.
pub fn determinant(a: &Matrix) -> Result<f64, AlgebraError> {
    check_square(a)?;

    let mut work = a.clone();
    if !upper_triangularize(&mut work) {
        return Ok(0.0);
    }

    let det = (0..work.rows()).map(|i| work[(i, i)]).product();
    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_det_2x2() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!((determinant(&a).unwrap() - (-2.0)).abs() < 1e-10);
    }

    #[test]
    fn test_det_identity() {
        assert!((determinant(&Matrix::identity(3)).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_det_1x1() {
        assert_eq!(determinant(&m(vec![vec![7.0]])).unwrap(), 7.0);
    }

    #[test]
    fn test_det_duplicated_row_is_zero() {
        let a = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![1.0, 2.0, 3.0],
        ]);
        assert_eq!(determinant(&a).unwrap(), 0.0);
    }

    #[test]
    fn test_det_zero_pivot_aborts_to_zero() {
        // Leading zero pivot; with pivoting the determinant would be -2
        let a = m(vec![vec![0.0, 1.0], vec![2.0, 3.0]]);
        assert_eq!(determinant(&a).unwrap(), 0.0);
    }

    #[test]
    fn test_det_3x3() {
        let a = m(vec![
            vec![2.0, 0.0, 1.0],
            vec![1.0, 3.0, 2.0],
            vec![1.0, 1.0, 1.0],
        ]);
        // det = 2*(3-2) - 0 + 1*(1-3) = 0
        assert!((determinant(&a).unwrap() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_det_requires_square() {
        assert_eq!(
            determinant(&Matrix::zeros(2, 3)),
            Err(AlgebraError::NotSquare(2, 3))
        );
    }

    #[test]
    fn test_input_untouched() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let copy = a.clone();
        determinant(&a).unwrap();
        assert_eq!(a, copy);
    }
}
