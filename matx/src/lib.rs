//! Matx - interactive matrix-expression calculator
//!
//! The evaluation pipeline: tokenizing a raw input line into matrix
//! literals and operators, validating dimensional compatibility
//! before any numeric work, parsing literals into matrices, and
//! executing the add/subtract/multiply/transpose/determinant
//! algorithms.
//!
//! - `scan`: literal scanner (text -> dimensions / `Matrix`)
//! - `tokenize`: expression tokenizer (line -> segments + operators)
//! - `classify`: operation classifier (line -> `OperationTag`)
//! - `validate`: dimension validator (shape check before parsing)
//! - `eval`: evaluator folding a chain into one owned accumulator

pub mod scan;
pub mod tokenize;
pub mod classify;
pub mod validate;
mod eval;

pub use classify::{classify, OperationTag};
pub use eval::{Evaluator, Outcome};
pub use scan::{measure, scan, Dims};
pub use tokenize::{tokenize, Expression, Op};
pub use validate::validate;

pub use matx_core::{CalcError, Matrix};

/// Main calculator engine: one call per input line
pub struct Calculator {
    evaluator: Evaluator,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
        }
    }

    /// Evaluate one line of input (trailing newline already stripped
    /// by the caller) into a tagged outcome
    pub fn eval(&self, line: &str) -> Result<Outcome, CalcError> {
        self.evaluator.eval(line)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline_addition() {
        let calc = Calculator::new();
        match calc.eval("1,2;3,4 + 5,6;7,8 =").unwrap() {
            Outcome::Matrix(m) => {
                assert_eq!(m.row(0), &[6.0, 8.0]);
                assert_eq!(m.row(1), &[10.0, 12.0]);
            }
            other => panic!("expected matrix, got {:?}", other),
        }
    }

    #[test]
    fn test_full_pipeline_determinant() {
        let calc = Calculator::new();
        assert_eq!(calc.eval("det(1,2;3,4)").unwrap(), Outcome::Scalar(-2.0));
    }

    #[test]
    fn test_errors_leave_calculator_usable() {
        let calc = Calculator::new();
        assert!(calc.eval("1,2 + 1,2,3 =").is_err());
        assert!(calc.eval("1,2 + 1,2 =").is_ok());
    }
}
