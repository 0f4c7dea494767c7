//! FASTA input and output for aligned sequence pairs.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta::{self as fasta, record::{Definition, Sequence}, Record};

use crate::errors::PairalignError;

/// A single FASTA record: the full definition line text and the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaSequence {
    pub id: String,
    pub sequence: Vec<u8>,
}

/// Read all records from a FASTA file, transparently decompressing gzip.
pub fn read_sequences<P>(path: P) -> Result<Vec<FastaSequence>, PairalignError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Check if we have a gzipped file
    let is_gzipped = path
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let reader_inner: Box<dyn BufRead> = if is_gzipped {
        Box::new(
            File::open(path)
                .map(MultiGzDecoder::new)
                .map(BufReader::new)?,
        )
    } else {
        Box::new(File::open(path).map(BufReader::new)?)
    };

    read_sequences_from(reader_inner)
}

/// Read all records from an open FASTA reader.
pub fn read_sequences_from<R>(reader: R) -> Result<Vec<FastaSequence>, PairalignError>
where
    R: BufRead,
{
    let mut reader = fasta::io::Reader::new(reader);

    let mut sequences = Vec::new();
    for result in reader.records() {
        let record = result?;

        let name = String::from_utf8_lossy(record.name());
        let id = match record.description() {
            Some(description) => format!("{} {}", name, String::from_utf8_lossy(description)),
            None => name.into_owned(),
        };

        sequences.push(FastaSequence {
            id,
            sequence: record.sequence().as_ref().to_vec(),
        });
    }

    Ok(sequences)
}

/// Write an aligned pair as FASTA, annotating each definition line with the
/// alignment score.
pub fn write_alignment<W>(
    output: W,
    seq1: (&str, &[u8]),
    seq2: (&str, &[u8]),
    score: i32,
) -> Result<(), PairalignError>
where
    W: Write,
{
    let mut writer = fasta::io::Writer::new(output);

    for (id, aligned) in [seq1, seq2] {
        let definition = Definition::new(format!("{id}; score={score}"), None);
        let sequence = Sequence::from_iter(aligned.iter().copied());
        writer.write_record(&Record::new(definition, sequence))?;
    }

    Ok(())
}
