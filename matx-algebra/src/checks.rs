//! Dimension-check helpers shared by the algebra routines

use matx_core::Matrix;

use crate::AlgebraError;

/// Check that two matrices have the same dimensions
pub fn check_same_dims(a: &Matrix, b: &Matrix) -> Result<(), AlgebraError> {
    if a.shape() != b.shape() {
        return Err(AlgebraError::ShapeMismatch(
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols(),
        ));
    }
    Ok(())
}

/// Check that two matrices have compatible dimensions for multiplication
pub fn check_matmul_dims(a: &Matrix, b: &Matrix) -> Result<(), AlgebraError> {
    if a.cols() != b.rows() {
        return Err(AlgebraError::MulMismatch(
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols(),
        ));
    }
    Ok(())
}

/// Check that a matrix is square
pub fn check_square(m: &Matrix) -> Result<(), AlgebraError> {
    if !m.is_square() {
        return Err(AlgebraError::NotSquare(m.rows(), m.cols()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_dims() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let c = Matrix::zeros(3, 2);
        assert!(check_same_dims(&a, &b).is_ok());
        assert_eq!(
            check_same_dims(&a, &c),
            Err(AlgebraError::ShapeMismatch(2, 3, 3, 2))
        );
    }

    #[test]
    fn test_matmul_dims() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 4);
        assert!(check_matmul_dims(&a, &b).is_ok());
        assert!(check_matmul_dims(&b, &a).is_err());
    }

    #[test]
    fn test_square() {
        assert!(check_square(&Matrix::zeros(3, 3)).is_ok());
        assert_eq!(
            check_square(&Matrix::zeros(2, 3)),
            Err(AlgebraError::NotSquare(2, 3))
        );
    }
}
