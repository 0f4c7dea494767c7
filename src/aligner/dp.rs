use crate::aligner::AlignmentMode;

/// A single traceback direction stored per matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    /// Consume a symbol from both sequences (match or mismatch)
    Diagonal,

    /// Consume a symbol from sequence 1, emitting a gap in sequence 2
    Left,

    /// Consume a symbol from sequence 2, emitting a gap in sequence 1
    Up,

    /// Local alignment restart marker, also seeding the local boundary
    Stop,
}

/// Dense DP table with flat row-major storage.
#[derive(Debug, Clone)]
pub struct DpMatrix<T> {
    num_rows: usize,
    num_cols: usize,
    cells: Vec<T>,
}

impl<T> DpMatrix<T>
where
    T: Copy,
{
    pub fn new(num_rows: usize, num_cols: usize, fill: T) -> Self {
        Self {
            num_rows,
            num_cols,
            cells: vec![fill; num_rows * num_cols],
        }
    }

    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline(always)]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.num_cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.num_cols + col] = value;
    }
}

/// Allocate and seed the score and traceback tables for one alignment.
///
/// Rows correspond to sequence 2 and columns to sequence 1, with one extra
/// boundary row and column at index 0. Global mode seeds the boundary with
/// accumulating gap penalties and the matching gap directions; local mode
/// seeds an all-zero boundary marked [`Trace::Stop`].
pub fn initialize_matrices(
    seq1_len: usize,
    seq2_len: usize,
    gap_penalty: i32,
    mode: AlignmentMode,
) -> (DpMatrix<i32>, DpMatrix<Trace>) {
    let num_rows = seq2_len + 1;
    let num_cols = seq1_len + 1;

    match mode {
        AlignmentMode::Global => {
            let mut score = DpMatrix::new(num_rows, num_cols, 0);
            let mut trace = DpMatrix::new(num_rows, num_cols, Trace::Diagonal);

            for col in 1..num_cols {
                score.set(0, col, col as i32 * gap_penalty);
                trace.set(0, col, Trace::Left);
            }

            for row in 1..num_rows {
                score.set(row, 0, row as i32 * gap_penalty);
                trace.set(row, 0, Trace::Up);
            }

            // Cell (0, 0) keeps Trace::Diagonal as the walk-back terminus.
            (score, trace)
        }
        AlignmentMode::Local => (
            DpMatrix::new(num_rows, num_cols, 0),
            DpMatrix::new(num_rows, num_cols, Trace::Stop),
        ),
    }
}
