use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pairalign::aligner::AlignmentMode;

/// An enum indicating what kind of alignment to perform
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlignmentSpan {
    /// Perform global (end-to-end) alignment
    Global,

    /// Perform local alignment, reporting the highest-scoring pair of
    /// subsequences
    Local,
}

impl From<AlignmentSpan> for AlignmentMode {
    fn from(span: AlignmentSpan) -> Self {
        match span {
            AlignmentSpan::Global => AlignmentMode::Global,
            AlignmentSpan::Local => AlignmentMode::Local,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliSubcommand {
    /// Align two sequences and write the aligned pair as FASTA
    Align(AlignArgs),
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Sequences to align in FASTA format. The first two records are aligned.
    #[clap(help_heading = "Inputs")]
    pub sequences: PathBuf,

    /// Substitution matrix file with the pairwise scores and the gap penalty.
    #[arg(short, long)]
    #[clap(help_heading = "Inputs")]
    pub scoring: PathBuf,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Alignment span, either global or local alignment.
    #[arg(short = 'm', long, default_value = "global")]
    #[clap(help_heading = "Alignment configuration")]
    pub alignment_span: AlignmentSpan,
}
