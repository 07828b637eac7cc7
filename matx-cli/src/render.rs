//! Result rendering for the REPL

use std::env;

use matx_core::Matrix;

/// Default number of fixed decimal places
const DEFAULT_DIGITS: usize = 2;

/// Formats outcomes for the terminal
pub struct Renderer {
    digits: usize,
}

impl Renderer {
    pub fn new(digits: usize) -> Self {
        Self { digits }
    }

    /// Read the digit count from the `MATX_DIGITS` environment
    /// variable, falling back to the default
    pub fn from_env() -> Self {
        let digits = env::var("MATX_DIGITS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DIGITS);
        Self::new(digits)
    }

    /// One row per line, elements space-separated, fixed decimals
    pub fn matrix(&self, m: &Matrix) -> String {
        let mut out = String::new();
        for i in 0..m.rows() {
            if i > 0 {
                out.push('\n');
            }
            for j in 0..m.cols() {
                if j > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{:.*}", self.digits, m[(i, j)]));
            }
        }
        out
    }

    pub fn scalar(&self, value: f64) -> String {
        format!("{:.*}", self.digits, value)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_layout() {
        let m = Matrix::from_rows(vec![vec![6.0, 8.0], vec![10.0, 12.0]]).unwrap();
        let r = Renderer::default();
        assert_eq!(r.matrix(&m), "6.00 8.00\n10.00 12.00");
    }

    #[test]
    fn test_digit_override() {
        let m = Matrix::from_rows(vec![vec![1.5]]).unwrap();
        let r = Renderer::new(4);
        assert_eq!(r.matrix(&m), "1.5000");
        assert_eq!(r.scalar(-2.0), "-2.0000");
    }
}
