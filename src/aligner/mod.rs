pub mod dp;
pub mod fill;
pub mod scoring;
pub mod traceback;

use tracing::{debug, debug_span};

use crate::aligner::dp::initialize_matrices;
use crate::aligner::fill::fill_matrices;
use crate::aligner::scoring::{SubstitutionMatrix, GAP};
use crate::aligner::traceback::traceback;
use crate::errors::PairalignError;

/// Enum representing the kind of alignment to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentMode {
    /// Align both sequences end to end (Needleman-Wunsch)
    Global,

    /// Report the highest-scoring pair of subsequences (Smith-Waterman)
    Local,
}

/// The outcome of a pairwise alignment: the score and the gap-augmented pair.
///
/// Both aligned sequences have equal length; stripping the gap symbol from
/// either recovers the corresponding input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned1: Vec<u8>,
    pub aligned2: Vec<u8>,
}

impl AlignmentResult {
    /// Render the alignment as three lines: sequence 1, markers ('|' match,
    /// '*' mismatch, space at gaps), and sequence 2.
    pub fn pretty(&self) -> String {
        let mut markers = Vec::with_capacity(self.aligned1.len());
        for (&symbol1, &symbol2) in self.aligned1.iter().zip(self.aligned2.iter()) {
            markers.push(if symbol1 == GAP || symbol2 == GAP {
                b' '
            } else if symbol1 == symbol2 {
                b'|'
            } else {
                b'*'
            });
        }

        format!(
            "{}\n{}\n{}",
            String::from_utf8_lossy(&self.aligned1),
            String::from_utf8_lossy(&markers),
            String::from_utf8_lossy(&self.aligned2),
        )
    }
}

/// Pairwise sequence aligner over a caller-provided substitution matrix.
pub struct PairwiseAligner<'a> {
    scoring: &'a SubstitutionMatrix,
}

impl<'a> PairwiseAligner<'a> {
    pub fn new(scoring: &'a SubstitutionMatrix) -> Self {
        Self { scoring }
    }

    /// Align two sequences, globally or locally.
    pub fn align(
        &self,
        seq1: impl AsRef<[u8]>,
        seq2: impl AsRef<[u8]>,
        mode: AlignmentMode,
    ) -> Result<AlignmentResult, PairalignError> {
        self.align_u8(seq1.as_ref(), seq2.as_ref(), mode)
    }

    fn align_u8(
        &self,
        seq1: &[u8],
        seq2: &[u8],
        mode: AlignmentMode,
    ) -> Result<AlignmentResult, PairalignError> {
        let span = debug_span!("pairwise_align");
        let _enter = span.enter();

        // Configuration problems must surface before any table is allocated
        let gap_penalty = self.scoring.gap_penalty()?;

        let (mut score, mut trace) =
            initialize_matrices(seq1.len(), seq2.len(), gap_penalty, mode);
        let endpoint = fill_matrices(
            seq1,
            seq2,
            self.scoring,
            gap_penalty,
            mode,
            &mut score,
            &mut trace,
        )?;

        debug!(score = endpoint.score, row = endpoint.row, col = endpoint.col, "END");

        let (aligned1, aligned2) = traceback(seq1, seq2, &trace, endpoint, mode)?;

        Ok(AlignmentResult {
            score: endpoint.score,
            aligned1,
            aligned2,
        })
    }
}
