pub mod fasta;
pub mod mtx;

pub use fasta::{read_sequences, write_alignment};
pub use mtx::read_substitution_matrix;
