use rustc_hash::FxHashMap;

use crate::errors::{MatrixAxis, PairalignError};

/// The gap symbol, both as a score table label and in gap-augmented output.
pub const GAP: u8 = b'-';

/// A labeled substitution score table.
///
/// Rows are addressed by symbols from sequence 1 and columns by symbols from
/// sequence 2. The table may be rectangular; the only structural requirements
/// are that both axes are non-empty and that every value row matches the
/// column label count. The linear gap penalty is the score of the first
/// non-gap row label against the gap column.
#[derive(Debug, Clone)]
pub struct SubstitutionMatrix {
    row_labels: Vec<u8>,
    col_labels: Vec<u8>,
    scores: Vec<i32>,
    row_index: FxHashMap<u8, usize>,
    col_index: FxHashMap<u8, usize>,
}

impl SubstitutionMatrix {
    /// Build a substitution matrix from a score table and its axis labels.
    ///
    /// `values` is row-major: `values[r][c]` is the score for
    /// `(row_labels[r], col_labels[c])`. Duplicate labels on an axis resolve
    /// to their first occurrence.
    pub fn new(
        values: Vec<Vec<i32>>,
        row_labels: Vec<u8>,
        col_labels: Vec<u8>,
    ) -> Result<Self, PairalignError> {
        if values.is_empty() || row_labels.is_empty() || col_labels.is_empty() {
            return Err(PairalignError::EmptyMatrix);
        }

        if values.len() != row_labels.len() {
            return Err(PairalignError::LabelMismatch {
                axis: MatrixAxis::Row,
                labels: row_labels.len(),
                values: values.len(),
            });
        }

        let mut scores = Vec::with_capacity(row_labels.len() * col_labels.len());
        for row in values {
            if row.len() != col_labels.len() {
                return Err(PairalignError::LabelMismatch {
                    axis: MatrixAxis::Column,
                    labels: col_labels.len(),
                    values: row.len(),
                });
            }

            scores.extend(row);
        }

        let mut row_index = FxHashMap::default();
        for (ix, &symbol) in row_labels.iter().enumerate() {
            row_index.entry(symbol).or_insert(ix);
        }

        let mut col_index = FxHashMap::default();
        for (ix, &symbol) in col_labels.iter().enumerate() {
            col_index.entry(symbol).or_insert(ix);
        }

        Ok(Self {
            row_labels,
            col_labels,
            scores,
            row_index,
            col_index,
        })
    }

    #[inline(always)]
    pub fn row_labels(&self) -> &[u8] {
        &self.row_labels
    }

    #[inline(always)]
    pub fn col_labels(&self) -> &[u8] {
        &self.col_labels
    }

    /// Look up the score for a pair of symbols.
    pub fn score(&self, row_symbol: u8, col_symbol: u8) -> Result<i32, PairalignError> {
        let row = *self.row_index.get(&row_symbol).ok_or(PairalignError::UnknownSymbol {
            symbol: row_symbol,
            axis: MatrixAxis::Row,
        })?;
        let col = *self.col_index.get(&col_symbol).ok_or(PairalignError::UnknownSymbol {
            symbol: col_symbol,
            axis: MatrixAxis::Column,
        })?;

        Ok(self.scores[row * self.col_labels.len() + col])
    }

    /// The linear gap penalty encoded in this table, read from the gap column.
    pub fn gap_penalty(&self) -> Result<i32, PairalignError> {
        let anchor = self
            .row_labels
            .iter()
            .copied()
            .find(|&symbol| symbol != GAP)
            .ok_or(PairalignError::MissingGapSymbol)?;

        self.score(anchor, GAP)
            .map_err(|_| PairalignError::MissingGapSymbol)
    }
}
