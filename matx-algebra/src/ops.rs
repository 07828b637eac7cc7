//! Element-wise arithmetic, matrix product, transpose, trace

use matx_core::Matrix;

use crate::checks::{check_matmul_dims, check_same_dims, check_square};
use crate::AlgebraError;

/// Element-wise sum; both operands must share the same shape
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, AlgebraError> {
    let mut out = a.clone();
    add_assign(&mut out, b)?;
    Ok(out)
}

/// Fold variant of [`add`]: adds `b` into the caller-owned accumulator
pub fn add_assign(acc: &mut Matrix, b: &Matrix) -> Result<(), AlgebraError> {
    check_same_dims(acc, b)?;
    for i in 0..acc.rows() {
        for j in 0..acc.cols() {
            acc[(i, j)] += b[(i, j)];
        }
    }
    Ok(())
}

/// Element-wise difference; both operands must share the same shape
pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix, AlgebraError> {
    let mut out = a.clone();
    sub_assign(&mut out, b)?;
    Ok(out)
}

/// Fold variant of [`sub`]: subtracts `b` from the caller-owned accumulator
pub fn sub_assign(acc: &mut Matrix, b: &Matrix) -> Result<(), AlgebraError> {
    check_same_dims(acc, b)?;
    for i in 0..acc.rows() {
        for j in 0..acc.cols() {
            acc[(i, j)] -= b[(i, j)];
        }
    }
    Ok(())
}

/// Multiply every element by a scalar
pub fn scale(a: &Matrix, k: f64) -> Matrix {
    let mut out = a.clone();
    for i in 0..out.rows() {
        for j in 0..out.cols() {
            out[(i, j)] *= k;
        }
    }
    out
}

/// Standard matrix product; requires `a.cols() == b.rows()`,
/// result shape is `(a.rows(), b.cols())`
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, AlgebraError> {
    check_matmul_dims(a, b)?;

    let mut out = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut sum = 0.0;
            for k in 0..a.cols() {
                sum += a[(i, k)] * b[(k, j)];
            }
            out[(i, j)] = sum;
        }
    }
    Ok(out)
}

/// Transpose: result shape `(cols, rows)`, `out[j][i] = a[i][j]`
pub fn transpose(a: &Matrix) -> Matrix {
    let mut out = Matrix::zeros(a.cols(), a.rows());
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            out[(j, i)] = a[(i, j)];
        }
    }
    out
}

/// Sum of the diagonal; square matrices only
pub fn trace(a: &Matrix) -> Result<f64, AlgebraError> {
    check_square(a)?;
    Ok((0..a.rows()).map(|i| a[(i, i)]).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_add() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum, m(vec![vec![6.0, 8.0], vec![10.0, 12.0]]));
    }

    #[test]
    fn test_add_commutes() {
        let a = m(vec![vec![1.0, -2.0], vec![0.5, 4.0]]);
        let b = m(vec![vec![3.0, 6.0], vec![-7.0, 8.0]]);
        assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = m(vec![vec![1.0, 2.0]]);
        let b = m(vec![vec![1.0], vec![2.0]]);
        assert!(add(&a, &b).is_err());
    }

    #[test]
    fn test_sub_is_add_of_negation() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![0.5, 1.5], vec![2.5, 3.5]]);
        let direct = sub(&a, &b).unwrap();
        let via_scale = add(&a, &scale(&b, -1.0)).unwrap();
        assert!(direct.approx_eq(&via_scale, 1e-12));
    }

    #[test]
    fn test_fold_accumulator() {
        let mut acc = m(vec![vec![1.0, 1.0]]);
        add_assign(&mut acc, &m(vec![vec![2.0, 3.0]])).unwrap();
        sub_assign(&mut acc, &m(vec![vec![1.0, 1.0]])).unwrap();
        assert_eq!(acc, m(vec![vec![2.0, 3.0]]));
    }

    #[test]
    fn test_multiply() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let prod = multiply(&a, &b).unwrap();
        assert_eq!(prod, m(vec![vec![19.0, 22.0], vec![43.0, 50.0]]));
    }

    #[test]
    fn test_multiply_identity() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let id = Matrix::identity(2);
        assert_eq!(multiply(&id, &a).unwrap(), a);
    }

    #[test]
    fn test_multiply_shapes() {
        let a = m(vec![vec![1.0, 2.0, 3.0]]); // 1x3
        let b = m(vec![vec![1.0], vec![2.0], vec![3.0]]); // 3x1
        let prod = multiply(&a, &b).unwrap();
        assert_eq!(prod.shape(), (1, 1));
        assert_eq!(prod[(0, 0)], 14.0);
        assert!(multiply(&a, &a).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let t = transpose(&a);
        assert_eq!(t, m(vec![vec![1.0, 3.0], vec![2.0, 4.0]]));
    }

    #[test]
    fn test_transpose_round_trip() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(transpose(&transpose(&a)), a);
    }

    #[test]
    fn test_trace() {
        assert_eq!(trace(&Matrix::identity(4)).unwrap(), 4.0);
        assert!(trace(&Matrix::zeros(2, 3)).is_err());
    }
}
