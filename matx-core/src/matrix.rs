//! The matrix data type
//!
//! A fixed-shape 2-D grid of f64 values stored row-major in one
//! contiguous buffer. The shape never changes after construction;
//! `data.len() == rows * cols` holds for the lifetime of the value.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::CalcError;

/// A 2-D numeric grid with fixed row/column counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create the n-by-n identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Create a matrix from nested rows, validating that all rows
    /// have the same column count
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, CalcError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(CalcError::bad_dimension("matrix has no elements"));
        }

        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(CalcError::inconsistent_columns(i, row.len(), cols));
            }
        }

        let nrows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: nrows,
            cols,
            data,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get element at (row, col), or None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// All elements, row-major
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Compare element-wise within `eps`; shapes must match exactly
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:.2}", self[(i, j)])?;
            }
        }
        Ok(())
    }
}
