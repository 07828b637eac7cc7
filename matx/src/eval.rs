//! Expression evaluator
//!
//! Drives the classifier, tokenizer, validator and algebra engine
//! together: folds a chained expression into one accumulator, or
//! applies a unary function to a single literal. The accumulator is
//! owned exclusively by the evaluator; every result handed back to
//! the caller is a freshly owned value.

use matx_core::{CalcError, Matrix};
use tracing::debug;

use crate::classify::{classify, OperationTag};
use crate::scan::scan;
use crate::tokenize::{tokenize, Op};
use crate::validate::validate;

/// Tagged result of evaluating one input line.
///
/// The core performs no console I/O; the presentation layer decides
/// how to print each variant and how to act on the quit requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Result of a chained expression, a transpose, or an echo
    Matrix(Matrix),
    /// Determinant value
    Scalar(f64),
    /// Graceful loop exit requested
    Quit,
    /// Abnormal process termination requested
    QuitImmediate,
}

/// Line evaluator
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate one input line, already stripped of its newline
    pub fn eval(&self, line: &str) -> Result<Outcome, CalcError> {
        let tag = classify(line);
        debug!(?tag, "classified input line");

        match tag {
            OperationTag::Normal => self.eval_chain(line),
            OperationTag::Determinant => {
                let m = self.scan_call_body(line)?;
                let det = matx_algebra::determinant(&m)?;
                debug!(det, "computed determinant");
                Ok(Outcome::Scalar(det))
            }
            OperationTag::Transpose => {
                let m = self.scan_call_body(line)?;
                Ok(Outcome::Matrix(matx_algebra::transpose(&m)))
            }
            OperationTag::Inverse => Err(CalcError::not_implemented("invs (matrix inverse)")),
            OperationTag::Quit => Ok(Outcome::Quit),
            OperationTag::QuitImmediate => Ok(Outcome::QuitImmediate),
            OperationTag::Unrecognized => {
                let ident = line.split('(').next().unwrap_or(line);
                Err(CalcError::unrecognized(ident))
            }
            OperationTag::Invalid => Err(CalcError::unmatched_paren(line)),
        }
    }

    /// Fold a chained `a op b op c ... =` expression left to right.
    fn eval_chain(&self, line: &str) -> Result<Outcome, CalcError> {
        let expr = tokenize(line)?;

        let mut rest = expr.segments.iter();
        let first = rest.next().ok_or_else(CalcError::empty_expression)?;
        let (mut acc, _) = scan(first)?.ok_or_else(CalcError::empty_expression)?;
        debug!(rows = acc.rows(), cols = acc.cols(), "scanned first literal");

        for (op, segment) in expr.ops.iter().zip(rest) {
            // Shape check first, numeric parsing only afterwards.
            validate(segment, acc.rows(), acc.cols(), op.symbol())?;

            let (operand, _) = match scan(segment)? {
                Some(found) => found,
                None => break, // no further literal: the chain is done
            };

            match op {
                Op::Add => matx_algebra::add_assign(&mut acc, &operand)?,
                Op::Sub => matx_algebra::sub_assign(&mut acc, &operand)?,
                Op::Mul => {
                    // Multiplication replaces the accumulator and
                    // terminates the chain (legacy grammar: one
                    // multiply per expression).
                    acc = matx_algebra::multiply(&acc, &operand)?;
                    debug!(rows = acc.rows(), cols = acc.cols(), "multiplied, chain closed");
                    break;
                }
            }
            debug!(op = %op.symbol(), "folded operand into accumulator");
        }

        Ok(Outcome::Matrix(acc))
    }

    /// Locate and scan the single literal inside a unary call:
    /// `ident(...)` or the bar-delimited `|...|` form.
    fn scan_call_body(&self, line: &str) -> Result<Matrix, CalcError> {
        let body = if line.starts_with('|') {
            let close = line.rfind('|').unwrap_or(0);
            if close == 0 {
                return Err(CalcError::unmatched_paren(line));
            }
            &line[1..close]
        } else {
            let open = line
                .find('(')
                .ok_or_else(|| CalcError::unmatched_paren(line))?;
            let close = line
                .rfind(')')
                .filter(|&c| c > open)
                .ok_or_else(|| CalcError::unmatched_paren(line))?;
            &line[open + 1..close]
        };

        let (m, _) = scan(body)?.ok_or_else(CalcError::empty_expression)?;
        Ok(m)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
