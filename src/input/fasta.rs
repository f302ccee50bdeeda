use std::{fmt::Debug, path::Path};

use anyhow::{bail, Context, Result};
use compact_genome::{
    implementation::DefaultSequenceStore,
    interface::{alphabet::Alphabet, sequence::GenomeSequence, sequence_store::SequenceStore},
    io::fasta::read_fasta_file,
};
use log::{info, warn};

/// A protein sequence together with the id of the fasta record it was read from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Sequence {
    pub id: String,
    pub residues: Vec<char>,
}

/// Reads the first record of a fasta file.
///
/// Characters marked in `skip_characters` (indexed by their ASCII value) are dropped while reading.
pub fn read_sequence<AlphabetType: Alphabet + Debug + Clone + Eq + 'static>(
    path: &Path,
    skip_characters: &[bool],
) -> Result<Sequence> {
    info!("Loading fasta file {path:?}");

    let mut sequence_store = DefaultSequenceStore::<AlphabetType>::new();
    let records = read_fasta_file(path, &mut sequence_store, false, true, skip_characters)
        .with_context(|| format!("Error loading file: {path:?}"))?;

    let record_amount = records.len();
    let Some(record) = records.into_iter().next() else {
        bail!("Found no fasta records in {path:?}");
    };
    if record_amount > 1 {
        warn!(
            "Found {record_amount} fasta records in {path:?}, aligning only the first one: {}",
            record.id
        );
    }

    let sequence = sequence_store
        .get(&record.sequence_handle)
        .as_genome_subsequence();
    let residues: Vec<char> = sequence.as_string().chars().collect();

    if residues.is_empty() {
        bail!("Fasta record {} in {path:?} has an empty sequence", record.id);
    }

    info!("Loaded {} with {} residues", record.id, residues.len());

    Ok(Sequence {
        id: record.id,
        residues,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use compact_genome::implementation::alphabets::iupac_amino_acid_alphabet::IupacAminoAcidAlphabet;

    use super::*;

    fn fasta_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_multiline_record() {
        let file = fasta_file(">ADK_2AK3A adenylate kinase\nMSSSE\nSIRMV\n");
        let sequence = read_sequence::<IupacAminoAcidAlphabet>(file.path(), &[]).unwrap();

        assert_eq!(sequence.id, "ADK_2AK3A");
        assert_eq!(sequence.residues, "MSSSESIRMV".chars().collect::<Vec<_>>());
    }

    #[test]
    fn uses_the_first_of_several_records() {
        let file = fasta_file(">first\nMKV\n>second\nWWW\n");
        let sequence = read_sequence::<IupacAminoAcidAlphabet>(file.path(), &[]).unwrap();

        assert_eq!(sequence.id, "first");
        assert_eq!(sequence.residues, vec!['M', 'K', 'V']);
    }

    #[test]
    fn skips_marked_characters() {
        let mut skip_characters = vec![false; usize::from(b'-') + 1];
        skip_characters[usize::from(b'-')] = true;

        let file = fasta_file(">gapped\nMK-V\n");
        let sequence =
            read_sequence::<IupacAminoAcidAlphabet>(file.path(), &skip_characters).unwrap();

        assert_eq!(sequence.residues, vec!['M', 'K', 'V']);
    }

    #[test]
    fn rejects_file_without_records() {
        let file = fasta_file("");
        assert!(read_sequence::<IupacAminoAcidAlphabet>(file.path(), &[]).is_err());
    }

    #[test]
    fn rejects_missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing.fasta");
        assert!(read_sequence::<IupacAminoAcidAlphabet>(&path, &[]).is_err());
    }
}
