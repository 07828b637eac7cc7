//! Structured errors for the calculator
//!
//! Errors never crash the calculator. They are values that propagate
//! through the pipeline and carry enough detail for the REPL to print
//! something actionable.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const MISSING_TERMINATOR: &str = "MISSING_TERMINATOR";
    pub const UNMATCHED_PAREN: &str = "UNMATCHED_PAREN";
    pub const UNRECOGNIZED_OP: &str = "UNRECOGNIZED_OP";
    pub const UNKNOWN_OPERATOR: &str = "UNKNOWN_OPERATOR";
    pub const BAD_DIMENSION: &str = "BAD_DIMENSION";
    pub const INCONSISTENT_COLUMNS: &str = "INCONSISTENT_COLUMNS";
    pub const NUMERIC_PARSE: &str = "NUMERIC_PARSE";
    pub const EMPTY_EXPRESSION: &str = "EMPTY_EXPRESSION";
    pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Evaluation of this line failed; the REPL continues
    Error,
    /// The calculator cannot continue
    Fatal,
}

/// Structured calculator error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl CalcError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn missing_terminator() -> Self {
        Self::new(codes::MISSING_TERMINATOR, "Required '=' at end of expression")
            .with_suggestion("Terminate the chain with '=', e.g. 1,2;3,4 + 5,6;7,8 =")
    }

    pub fn unmatched_paren(line: &str) -> Self {
        Self::new(
            codes::UNMATCHED_PAREN,
            format!("'(' or ')' not correctly embedded in '{}'", line),
        )
        .with_suggestion("Unary calls look like det(1,2;3,4)")
    }

    pub fn unrecognized(name: &str) -> Self {
        Self::new(
            codes::UNRECOGNIZED_OP,
            format!("operation '{}' not recognised", name),
        )
        .with_suggestion("Known operations: det, trps, invs")
    }

    pub fn unknown_operator(op: char) -> Self {
        Self::new(
            codes::UNKNOWN_OPERATOR,
            format!("'{}' is not a valid operator", op),
        )
        .with_suggestion("Operators are '+', '-' and '*'")
    }

    pub fn bad_dimension(details: impl Into<String>) -> Self {
        Self::new(codes::BAD_DIMENSION, format!("Bad matrix dimension: {}", details.into()))
    }

    pub fn inconsistent_columns(row: usize, got: usize, expected: usize) -> Self {
        Self::new(
            codes::INCONSISTENT_COLUMNS,
            format!("row {} has {} columns, expected {}", row, got, expected),
        )
        .with_suggestion("Every row of a matrix literal must have the same column count")
    }

    pub fn numeric_parse(field: &str, row: usize, col: usize) -> Self {
        Self::new(
            codes::NUMERIC_PARSE,
            format!("'{}' at row {}, column {} is not a number", field, row, col),
        )
    }

    pub fn empty_expression() -> Self {
        Self::new(codes::EMPTY_EXPRESSION, "Expression contains no matrix literal")
    }

    pub fn not_implemented(what: &str) -> Self {
        Self::new(codes::NOT_IMPLEMENTED, format!("{} is not yet implemented", what))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for CalcError {}
