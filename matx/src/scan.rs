//! Literal scanner
//!
//! Turns the textual form of one matrix (`1,2;3,4`) into dimensions
//! and, on the full path, into a `Matrix`. Scanning never mutates the
//! input: it works on immutable slices and reports how far it read.
//!
//! Grammar: `matrix := row (';' row)*`, `row := number (',' number)*`,
//! optional leading spaces, optional trailing `;`.

use matx_core::{CalcError, Matrix};

/// Dimensions of a matrix literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

/// Split a literal into its row substrings, tolerating one optional
/// trailing `;` (and trailing whitespace after it).
fn row_segments(text: &str) -> Vec<&str> {
    let mut rows: Vec<&str> = text.split(';').collect();
    while rows.last().is_some_and(|r| r.trim().is_empty()) {
        rows.pop();
    }
    rows
}

/// Measure the dimensions of the literal in `text` without any
/// numeric parsing.
///
/// Empty or whitespace-only text means "no further literal" and is
/// reported as `Ok(None)`, a valid terminal state. A row whose column
/// count differs from the first row's is an error.
pub fn measure(text: &str) -> Result<Option<Dims>, CalcError> {
    let rows = row_segments(text);
    if rows.is_empty() {
        return Ok(None);
    }

    let cols = rows[0].matches(',').count() + 1;
    for (i, row) in rows.iter().enumerate().skip(1) {
        let row_cols = row.matches(',').count() + 1;
        if row_cols != cols {
            return Err(CalcError::inconsistent_columns(i, row_cols, cols));
        }
    }

    Ok(Some(Dims {
        rows: rows.len(),
        cols,
    }))
}

/// Scan the literal in `text` into a `Matrix`.
///
/// Returns the populated matrix together with the cursor one past the
/// last character consumed, so a caller holding a larger remainder can
/// continue from there. Malformed numeric fields are a hard error
/// naming the field and its position; they are not coerced to zero.
pub fn scan(text: &str) -> Result<Option<(Matrix, usize)>, CalcError> {
    let dims = match measure(text)? {
        Some(d) => d,
        None => return Ok(None),
    };

    let mut data = Vec::with_capacity(dims.rows);
    for (i, row_text) in row_segments(text).iter().enumerate() {
        let mut row = Vec::with_capacity(dims.cols);
        for (j, field) in row_text.split(',').enumerate() {
            let field = field.trim();
            let value: f64 = field
                .parse()
                .map_err(|_| CalcError::numeric_parse(field, i, j))?;
            row.push(value);
        }
        data.push(row);
    }

    let matrix = Matrix::from_rows(data)?;
    Ok(Some((matrix, text.len())))
}
