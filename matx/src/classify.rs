//! Operation classifier
//!
//! Looks at the leading syntax of an input line and decides which
//! evaluation path it takes. Classification is total: every line maps
//! to exactly one tag, and the tag is consumed immediately by the
//! evaluator.

/// What an input line asks the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationTag {
    /// Chained arithmetic expression terminated by `=`
    Normal,
    /// `det(...)` or the bar form `|...|`
    Determinant,
    /// `trps(...)`
    Transpose,
    /// `invs(...)` - recognized, not implemented
    Inverse,
    /// `q` - graceful loop exit
    Quit,
    /// `q!` - immediate abnormal exit
    QuitImmediate,
    /// A well-formed call to an identifier nobody knows
    Unrecognized,
    /// Malformed call syntax (missing `(` or `)`)
    Invalid,
}

/// Classify one input line by its leading syntax
pub fn classify(line: &str) -> OperationTag {
    let first = match line.chars().next() {
        Some(c) => c,
        None => return OperationTag::Invalid,
    };

    if first == '|' {
        return OperationTag::Determinant;
    }

    if first == 'q' {
        if line == "q!" {
            return OperationTag::QuitImmediate;
        }
        return OperationTag::Quit;
    }

    if first.is_alphabetic() {
        let open = match line.find('(') {
            Some(pos) => pos,
            None => return OperationTag::Invalid,
        };
        if !line[open..].contains(')') {
            return OperationTag::Invalid;
        }

        return match &line[..open] {
            "trps" => OperationTag::Transpose,
            "invs" => OperationTag::Inverse,
            "det" => OperationTag::Determinant,
            _ => OperationTag::Unrecognized,
        };
    }

    OperationTag::Normal
}
