use std::fs;
use std::fs::File;
use std::io::{self, stdout, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;

use tracing::Subscriber;
use tracing::{debug, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Registry};

use pairalign::aligner::{AlignmentMode, PairwiseAligner};
use pairalign::errors::PairalignError;
use pairalign::io::{read_sequences, read_substitution_matrix, write_alignment};

mod cli;

/// Build our base tracing subscriber with stderr logging.
fn build_base_subscriber(verbose: u8) -> impl Subscriber + for<'span> LookupSpan<'span> {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap();

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log)
}

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    build_base_subscriber(args.verbose).init();

    match &args.command {
        Some(cli::CliSubcommand::Align(v)) => align_subcommand(v)?,
        None => anyhow::bail!("No subcommand given. See --help for usage."),
    };

    Ok(())
}

fn align_subcommand(align_args: &cli::AlignArgs) -> Result<()> {
    let scoring = read_substitution_matrix(&align_args.scoring).with_context(|| {
        format!(
            "Could not read the substitution matrix from {:?}",
            align_args.scoring
        )
    })?;

    let sequences = read_sequences(&align_args.sequences).with_context(|| {
        format!(
            "Could not read the sequences from {:?}",
            align_args.sequences
        )
    })?;

    if sequences.len() < 2 {
        return Err(PairalignError::TooFewSequences(sequences.len())).with_context(|| {
            format!("Not enough records in {:?}", align_args.sequences)
        });
    }

    if sequences.len() > 2 {
        warn!(
            "Found {} sequences, aligning only the first two.",
            sequences.len()
        );
    }

    let seq1 = &sequences[0];
    let seq2 = &sequences[1];
    let mode = AlignmentMode::from(align_args.alignment_span);

    info!("Aligning {} against {} ({:?})...", seq1.id, seq2.id, mode);

    let aligner = PairwiseAligner::new(&scoring);
    let result = aligner.align(&seq1.sequence, &seq2.sequence, mode)?;

    info!("Done. Alignment score: {}", result.score);
    debug!("\n{}", result.pretty());

    // Determine where to write the aligned pair to
    let writer: Box<dyn Write> = if let Some(path) = &align_args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)?;
        Box::new(file) as Box<dyn Write>
    } else {
        Box::new(stdout()) as Box<dyn Write>
    };

    write_alignment(
        writer,
        (seq1.id.as_str(), result.aligned1.as_slice()),
        (seq2.id.as_str(), result.aligned2.as_slice()),
        result.score,
    )
    .context("Could not write the alignment output")?;

    Ok(())
}
