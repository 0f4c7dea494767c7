use crate::aligner::dp::{DpMatrix, Trace};
use crate::aligner::scoring::SubstitutionMatrix;
use crate::aligner::AlignmentMode;
use crate::errors::PairalignError;

/// The cell a traceback starts from, together with the alignment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub score: i32,
    pub row: usize,
    pub col: usize,
}

/// Fill the score and traceback tables cell by cell, row-major.
///
/// Candidate moves are evaluated in the fixed order diagonal, left, up, and a
/// later candidate only wins when strictly greater, making the tie-break
/// priority Diagonal > Left > Up. In local mode non-positive cells are
/// clamped to zero and marked [`Trace::Stop`].
///
/// Returns the traceback start: the bottom-right cell in global mode, or the
/// best positive cell in local mode. Local ties on the best score move the
/// endpoint to the later cell in fill order.
pub fn fill_matrices(
    seq1: &[u8],
    seq2: &[u8],
    scoring: &SubstitutionMatrix,
    gap_penalty: i32,
    mode: AlignmentMode,
    score: &mut DpMatrix<i32>,
    trace: &mut DpMatrix<Trace>,
) -> Result<Endpoint, PairalignError> {
    let mut best = Endpoint {
        score: 0,
        row: 0,
        col: 0,
    };

    for row in 1..score.num_rows() {
        for col in 1..score.num_cols() {
            let substitution = scoring.score(seq1[col - 1], seq2[row - 1])?;

            let mut cell = score.get(row - 1, col - 1) + substitution;
            let mut direction = Trace::Diagonal;

            let left = score.get(row, col - 1) + gap_penalty;
            if left > cell {
                cell = left;
                direction = Trace::Left;
            }

            let up = score.get(row - 1, col) + gap_penalty;
            if up > cell {
                cell = up;
                direction = Trace::Up;
            }

            match mode {
                AlignmentMode::Global => {
                    score.set(row, col, cell);
                    trace.set(row, col, direction);
                }
                AlignmentMode::Local => {
                    if cell <= 0 {
                        score.set(row, col, 0);
                        trace.set(row, col, Trace::Stop);
                    } else {
                        score.set(row, col, cell);
                        trace.set(row, col, direction);

                        if cell >= best.score {
                            best = Endpoint {
                                score: cell,
                                row,
                                col,
                            };
                        }
                    }
                }
            }
        }
    }

    match mode {
        AlignmentMode::Global => {
            let row = score.num_rows() - 1;
            let col = score.num_cols() - 1;

            Ok(Endpoint {
                score: score.get(row, col),
                row,
                col,
            })
        }
        AlignmentMode::Local => Ok(best),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::dp::initialize_matrices;
    use crate::aligner::scoring::GAP;
    use crate::errors::MatrixAxis;

    fn nucleotide_matrix(
        match_score: i32,
        mismatch_score: i32,
        gap_score: i32,
    ) -> SubstitutionMatrix {
        let labels = b"ACGT-".to_vec();
        let values = labels
            .iter()
            .map(|&row_symbol| {
                labels
                    .iter()
                    .map(|&col_symbol| {
                        if row_symbol == GAP || col_symbol == GAP {
                            gap_score
                        } else if row_symbol == col_symbol {
                            match_score
                        } else {
                            mismatch_score
                        }
                    })
                    .collect()
            })
            .collect();

        SubstitutionMatrix::new(values, labels.clone(), labels).unwrap()
    }

    fn fill(
        seq1: &[u8],
        seq2: &[u8],
        matrix: &SubstitutionMatrix,
        mode: AlignmentMode,
    ) -> (DpMatrix<i32>, DpMatrix<Trace>, Endpoint) {
        let gap = matrix.gap_penalty().unwrap();
        let (mut score, mut trace) = initialize_matrices(seq1.len(), seq2.len(), gap, mode);
        let endpoint =
            fill_matrices(seq1, seq2, matrix, gap, mode, &mut score, &mut trace).unwrap();

        (score, trace, endpoint)
    }

    #[test]
    fn test_global_fill() {
        let matrix = nucleotide_matrix(1, -1, -2);
        let (score, trace, endpoint) = fill(b"AGC", b"AAAC", &matrix, AlignmentMode::Global);

        let expected = [
            [0, -2, -4, -6],
            [-2, 1, -1, -3],
            [-4, -1, 0, -2],
            [-6, -3, -2, -1],
            [-8, -5, -4, -1],
        ];
        for (row, expected_row) in expected.iter().enumerate() {
            for (col, &expected_cell) in expected_row.iter().enumerate() {
                assert_eq!(score.get(row, col), expected_cell, "cell ({row}, {col})");
            }
        }

        assert_eq!(endpoint, Endpoint { score: -1, row: 4, col: 3 });
        assert_eq!(trace.get(4, 3), Trace::Diagonal);
        assert_eq!(trace.get(4, 1), Trace::Up);
        assert_eq!(trace.get(1, 2), Trace::Left);
    }

    #[test]
    fn test_diagonal_wins_full_tie() {
        let matrix = SubstitutionMatrix::new(
            vec![vec![0, 0], vec![0, 0]],
            b"A-".to_vec(),
            b"A-".to_vec(),
        )
        .unwrap();
        let (score, trace, _) = fill(b"A", b"A", &matrix, AlignmentMode::Global);

        assert_eq!(score.get(1, 1), 0);
        assert_eq!(trace.get(1, 1), Trace::Diagonal);
    }

    #[test]
    fn test_left_wins_over_up() {
        let matrix = SubstitutionMatrix::new(
            vec![vec![-5, 0], vec![0, 0]],
            b"A-".to_vec(),
            b"A-".to_vec(),
        )
        .unwrap();
        let (score, trace, _) = fill(b"A", b"A", &matrix, AlignmentMode::Global);

        assert_eq!(score.get(1, 1), 0);
        assert_eq!(trace.get(1, 1), Trace::Left);
    }

    #[test]
    fn test_local_clamps_negative_cells() {
        let matrix = nucleotide_matrix(2, -1, -2);
        let (score, trace, endpoint) = fill(b"G", b"C", &matrix, AlignmentMode::Local);

        assert_eq!(score.get(1, 1), 0);
        assert_eq!(trace.get(1, 1), Trace::Stop);
        assert_eq!(endpoint, Endpoint { score: 0, row: 0, col: 0 });
    }

    #[test]
    fn test_local_best_ties_go_to_later_cell() {
        let matrix = nucleotide_matrix(2, -1, -3);
        let (score, _, endpoint) = fill(b"AC", b"ATC", &matrix, AlignmentMode::Local);

        // Both (1, 1) and (3, 2) reach the best score of 2
        assert_eq!(score.get(1, 1), 2);
        assert_eq!(score.get(3, 2), 2);
        assert_eq!(endpoint, Endpoint { score: 2, row: 3, col: 2 });
    }

    #[test]
    fn test_local_scenario() {
        let matrix = nucleotide_matrix(2, -1, -2);
        let (_, _, endpoint) = fill(b"AGC", b"AAAC", &matrix, AlignmentMode::Local);

        assert_eq!(endpoint, Endpoint { score: 3, row: 4, col: 3 });
    }

    #[test]
    fn test_local_endpoint_is_matrix_maximum() {
        let matrix = nucleotide_matrix(2, -1, -2);
        let (score, _, endpoint) = fill(b"TTACGT", b"GGCATT", &matrix, AlignmentMode::Local);

        let mut max_cell = 0;
        for row in 0..score.num_rows() {
            for col in 0..score.num_cols() {
                max_cell = max_cell.max(score.get(row, col));
            }
        }

        assert!(endpoint.score >= 0);
        assert_eq!(endpoint.score, max_cell);
        assert_eq!(score.get(endpoint.row, endpoint.col), endpoint.score);
    }

    #[test]
    fn test_unknown_symbol_aborts_fill() {
        let matrix = nucleotide_matrix(1, -1, -2);
        let gap = matrix.gap_penalty().unwrap();
        let (mut score, mut trace) = initialize_matrices(2, 1, gap, AlignmentMode::Global);

        let err = fill_matrices(
            b"AN",
            b"A",
            &matrix,
            gap,
            AlignmentMode::Global,
            &mut score,
            &mut trace,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PairalignError::UnknownSymbol { symbol: b'N', axis: MatrixAxis::Row }
        ));
    }
}
