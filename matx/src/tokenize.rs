//! Expression tokenizer
//!
//! Splits a chained expression line into literal substrings and the
//! operators between them, without touching the input: the segments
//! are borrowed slices of the original line.

use matx_core::CalcError;

/// An arithmetic operator between two literals. `=` is the chain
/// terminator and never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    /// The source character for this operator
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
        }
    }
}

/// A tokenized chain: literal substrings in order, and the operator
/// between each adjacent pair. `segments.len() == ops.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    pub segments: Vec<&'a str>,
    pub ops: Vec<Op>,
}

/// Tokenize one chained expression line.
///
/// A `=` must be present; everything after it is ignored. `+` and `*`
/// always split the chain. `-` splits only when immediately followed
/// by a space; a minus glued to what follows belongs to the literal
/// (a negative number). That is the literal-format constraint carried
/// over from the original grammar: negative numbers must not put a
/// space after the sign.
pub fn tokenize(line: &str) -> Result<Expression<'_>, CalcError> {
    if !line.contains('=') {
        return Err(CalcError::missing_terminator());
    }

    let mut segments = Vec::new();
    let mut ops = Vec::new();
    let mut start = 0;

    let bytes = line.as_bytes();
    for i in 0..bytes.len() {
        let op = match bytes[i] {
            b'+' => Some(Op::Add),
            b'*' => Some(Op::Mul),
            b'-' if bytes.get(i + 1) == Some(&b' ') => Some(Op::Sub),
            b'=' => {
                segments.push(&line[start..i]);
                return Ok(Expression { segments, ops });
            }
            _ => None,
        };

        if let Some(op) = op {
            segments.push(&line[start..i]);
            ops.push(op);
            start = i + 1;
        }
    }

    // The upfront check guarantees the '=' arm returned above.
    Err(CalcError::missing_terminator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matx_core::codes;

    #[test]
    fn test_single_literal() {
        let expr = tokenize("1,2;3,4 =").unwrap();
        assert_eq!(expr.segments, vec!["1,2;3,4 "]);
        assert!(expr.ops.is_empty());
    }

    #[test]
    fn test_add_chain() {
        let expr = tokenize("1,2;3,4 + 5,6;7,8 =").unwrap();
        assert_eq!(expr.segments, vec!["1,2;3,4 ", " 5,6;7,8 "]);
        assert_eq!(expr.ops, vec![Op::Add]);
    }

    #[test]
    fn test_three_term_chain() {
        let expr = tokenize("1,1 + 2,2 - 3,3 =").unwrap();
        assert_eq!(expr.segments.len(), 3);
        assert_eq!(expr.ops, vec![Op::Add, Op::Sub]);
    }

    #[test]
    fn test_multiply() {
        let expr = tokenize("1,2 * 3;4 =").unwrap();
        assert_eq!(expr.ops, vec![Op::Mul]);
    }

    #[test]
    fn test_missing_terminator() {
        let err = tokenize("1,2;3,4 + 5,6;7,8").unwrap_err();
        assert_eq!(err.code, codes::MISSING_TERMINATOR);
    }

    #[test]
    fn test_minus_glued_to_digit_stays_in_literal() {
        let expr = tokenize("1,-2;3,4 =").unwrap();
        assert_eq!(expr.segments, vec!["1,-2;3,4 "]);
        assert!(expr.ops.is_empty());
    }

    #[test]
    fn test_minus_with_space_is_subtraction() {
        let expr = tokenize("1,2 - 3,4 =").unwrap();
        assert_eq!(expr.segments, vec!["1,2 ", " 3,4 "]);
        assert_eq!(expr.ops, vec![Op::Sub]);
    }

    #[test]
    fn test_text_after_terminator_ignored() {
        let expr = tokenize("1,2 = garbage + more").unwrap();
        assert_eq!(expr.segments, vec!["1,2 "]);
        assert!(expr.ops.is_empty());
    }

    #[test]
    fn test_invariant_segment_count() {
        let expr = tokenize("1 + 2 + 3 + 4 =").unwrap();
        assert_eq!(expr.segments.len(), expr.ops.len() + 1);
    }
}
