pub mod aligner;
pub mod errors;
pub mod io;
