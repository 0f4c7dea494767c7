//! Parser for whitespace-delimited, labeled substitution matrix files.
//!
//! The first non-blank line lists the column labels; every further non-blank
//! line holds a row label followed by one integer score per column:
//!
//! ```text
//!    A  C  G  T  -
//! A  1 -1 -1 -1 -2
//! C -1  1 -1 -1 -2
//! G -1 -1  1 -1 -2
//! T -1 -1 -1  1 -2
//! - -2 -2 -2 -2  1
//! ```

use std::fs;
use std::path::Path;

use crate::aligner::scoring::SubstitutionMatrix;
use crate::errors::PairalignError;

/// Read a substitution matrix from a file.
pub fn read_substitution_matrix<P>(path: P) -> Result<SubstitutionMatrix, PairalignError>
where
    P: AsRef<Path>,
{
    parse_substitution_matrix(&fs::read_to_string(path)?)
}

/// Parse a substitution matrix from text.
pub fn parse_substitution_matrix(text: &str) -> Result<SubstitutionMatrix, PairalignError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(ix, line)| (ix + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(PairalignError::MatrixSyntax {
            line: 1,
            reason: "missing the column label line".to_string(),
        });
    };

    let col_labels = header
        .split_whitespace()
        .map(|token| single_symbol(token, header_line))
        .collect::<Result<Vec<_>, _>>()?;

    let mut row_labels = Vec::new();
    let mut values = Vec::new();
    for (line_number, line) in lines {
        let mut tokens = line.split_whitespace();
        let Some(label) = tokens.next() else {
            continue;
        };
        let label = single_symbol(label, line_number)?;

        let scores = tokens
            .map(|token| {
                token.parse::<i32>().map_err(|_| PairalignError::MatrixSyntax {
                    line: line_number,
                    reason: format!("'{token}' is not an integer score"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        row_labels.push(label);
        values.push(scores);
    }

    SubstitutionMatrix::new(values, row_labels, col_labels)
}

fn single_symbol(token: &str, line: usize) -> Result<u8, PairalignError> {
    let &[symbol] = token.as_bytes() else {
        return Err(PairalignError::MatrixSyntax {
            line,
            reason: format!("label '{token}' is not a single symbol"),
        });
    };

    Ok(symbol)
}
