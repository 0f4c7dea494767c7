use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// The matrix axis a symbol is resolved against
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatrixAxis {
    Row,
    Column,
}

impl Display for MatrixAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

#[derive(Debug)]
pub enum PairalignError {
    /// A sequence symbol has no label on the given axis of the substitution matrix
    UnknownSymbol { symbol: u8, axis: MatrixAxis },

    /// The substitution matrix has no rows or no columns
    EmptyMatrix,

    /// The number of labels on an axis does not match the score table shape
    LabelMismatch {
        axis: MatrixAxis,
        labels: usize,
        values: usize,
    },

    /// The substitution matrix has no gap column to derive the gap penalty from
    MissingGapSymbol,

    /// The traceback table held a direction that cannot apply at the given cell
    CorruptTraceback { row: usize, col: usize },

    /// A substitution matrix file could not be parsed
    MatrixSyntax { line: usize, reason: String },

    /// The sequence input held fewer than the two records needed for an alignment
    TooFewSequences(usize),

    /// Other IO errors
    IOError(io::Error),
}

impl Error for PairalignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::IOError(ref source) => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for PairalignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl Display for PairalignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::UnknownSymbol { symbol, axis } =>
                write!(f, "Symbol '{}' is not a {axis} label of the substitution matrix!", char::from(symbol)),
            Self::EmptyMatrix =>
                write!(f, "The substitution matrix must have at least one row and one column!"),
            Self::LabelMismatch { axis, labels, values } =>
                write!(f, "The number of {axis} labels ({labels}) does not match the score table ({values})!"),
            Self::MissingGapSymbol =>
                write!(f, "The substitution matrix has no gap ('-') column to derive the gap penalty from!"),
            Self::CorruptTraceback { row, col } =>
                write!(f, "The traceback table is corrupt at row {row}, column {col}!"),
            Self::MatrixSyntax { line, ref reason } =>
                write!(f, "Could not parse the substitution matrix at line {line}: {reason}"),
            Self::TooFewSequences(num) =>
                write!(f, "Found {num} sequence(s) in the input, but an alignment needs two!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}
