use crate::aligner::dp::{DpMatrix, Trace};
use crate::aligner::fill::Endpoint;
use crate::aligner::scoring::GAP;
use crate::aligner::AlignmentMode;
use crate::errors::PairalignError;

/// Walk the traceback table from `start` and reconstruct the aligned pair.
///
/// The walk ends when both indices reach zero, or in local mode as soon as a
/// [`Trace::Stop`] marker is reached. A direction that cannot apply at the
/// current cell surfaces as [`PairalignError::CorruptTraceback`].
pub fn traceback(
    seq1: &[u8],
    seq2: &[u8],
    trace: &DpMatrix<Trace>,
    start: Endpoint,
    mode: AlignmentMode,
) -> Result<(Vec<u8>, Vec<u8>), PairalignError> {
    let mut aligned1 = Vec::new();
    let mut aligned2 = Vec::new();

    let mut row = start.row;
    let mut col = start.col;

    while row > 0 || col > 0 {
        match trace.get(row, col) {
            Trace::Diagonal => {
                if row == 0 || col == 0 {
                    return Err(PairalignError::CorruptTraceback { row, col });
                }

                aligned1.push(seq1[col - 1]);
                aligned2.push(seq2[row - 1]);
                row -= 1;
                col -= 1;
            }
            Trace::Left => {
                if col == 0 {
                    return Err(PairalignError::CorruptTraceback { row, col });
                }

                aligned1.push(seq1[col - 1]);
                aligned2.push(GAP);
                col -= 1;
            }
            Trace::Up => {
                if row == 0 {
                    return Err(PairalignError::CorruptTraceback { row, col });
                }

                aligned1.push(GAP);
                aligned2.push(seq2[row - 1]);
                row -= 1;
            }
            Trace::Stop => match mode {
                AlignmentMode::Local => break,
                AlignmentMode::Global => {
                    return Err(PairalignError::CorruptTraceback { row, col })
                }
            },
        }
    }

    aligned1.reverse();
    aligned2.reverse();

    Ok((aligned1, aligned2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::dp::initialize_matrices;

    fn start(row: usize, col: usize) -> Endpoint {
        Endpoint { score: 0, row, col }
    }

    #[test]
    fn test_global_walk() {
        let (_, mut trace) = initialize_matrices(2, 2, -2, AlignmentMode::Global);
        trace.set(1, 1, Trace::Diagonal);
        trace.set(2, 2, Trace::Diagonal);

        let (aligned1, aligned2) =
            traceback(b"AC", b"AC", &trace, start(2, 2), AlignmentMode::Global).unwrap();

        assert_eq!(aligned1, b"AC");
        assert_eq!(aligned2, b"AC");
    }

    #[test]
    fn test_global_walk_emits_gaps() {
        let (_, mut trace) = initialize_matrices(1, 2, -2, AlignmentMode::Global);
        trace.set(1, 1, Trace::Diagonal);
        trace.set(2, 1, Trace::Up);

        let (aligned1, aligned2) =
            traceback(b"A", b"AC", &trace, start(2, 1), AlignmentMode::Global).unwrap();

        assert_eq!(aligned1, b"A-");
        assert_eq!(aligned2, b"AC");
    }

    #[test]
    fn test_boundary_rows_walk_to_origin() {
        let (_, trace) = initialize_matrices(3, 0, -2, AlignmentMode::Global);

        let (aligned1, aligned2) =
            traceback(b"ACG", b"", &trace, start(0, 3), AlignmentMode::Global).unwrap();

        assert_eq!(aligned1, b"ACG");
        assert_eq!(aligned2, b"---");
    }

    #[test]
    fn test_empty_walk() {
        let (_, trace) = initialize_matrices(0, 0, -2, AlignmentMode::Global);

        let (aligned1, aligned2) =
            traceback(b"", b"", &trace, start(0, 0), AlignmentMode::Global).unwrap();

        assert!(aligned1.is_empty());
        assert!(aligned2.is_empty());
    }

    #[test]
    fn test_local_walk_stops_at_marker() {
        let (_, mut trace) = initialize_matrices(2, 2, -2, AlignmentMode::Local);
        trace.set(2, 2, Trace::Diagonal);

        let (aligned1, aligned2) =
            traceback(b"AC", b"AC", &trace, start(2, 2), AlignmentMode::Local).unwrap();

        assert_eq!(aligned1, b"C");
        assert_eq!(aligned2, b"C");
    }

    #[test]
    fn test_stop_in_global_walk_is_corrupt() {
        let (_, mut trace) = initialize_matrices(1, 1, -2, AlignmentMode::Global);
        trace.set(1, 1, Trace::Stop);

        let err =
            traceback(b"A", b"A", &trace, start(1, 1), AlignmentMode::Global).unwrap_err();

        assert!(matches!(err, PairalignError::CorruptTraceback { row: 1, col: 1 }));
    }

    #[test]
    fn test_move_past_boundary_is_corrupt() {
        let (_, mut trace) = initialize_matrices(1, 1, -2, AlignmentMode::Global);
        trace.set(1, 0, Trace::Left);

        let err =
            traceback(b"A", b"A", &trace, start(1, 0), AlignmentMode::Global).unwrap_err();

        assert!(matches!(err, PairalignError::CorruptTraceback { row: 1, col: 0 }));
    }
}
