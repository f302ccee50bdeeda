use std::{fmt::Debug, path::PathBuf, time::Instant};

use alignment::{align, AlignmentMode};
use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use compact_genome::{
    implementation::alphabets::{
        dna_alphabet::DnaAlphabet, dna_alphabet_or_n::DnaAlphabetOrN,
        dna_iupac_nucleic_acid_alphabet::DnaIupacNucleicAcidAlphabet,
        famsa_amino_acid_alphabet::FamsaAminoAcidAlphabet,
        iupac_amino_acid_alphabet::IupacAminoAcidAlphabet, rna_alphabet::RnaAlphabet,
        rna_alphabet_or_n::RnaAlphabetOrN,
        rna_iupac_nucleic_acid_alphabet::RnaIupacNucleicAcidAlphabet,
    },
    interface::alphabet::Alphabet,
};
use input::{dot_product_matrix, read_sequence, Embedding, Sequence};
use log::{info, LevelFilter};
use report::{write_matrix_csv, write_report};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

mod alignment;
mod input;
mod report;

#[derive(Parser)]
struct Cli {
    /// The minimum importance of log messages to output.
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The per-residue embedding file of the first protein.
    ///
    /// Each line holds the whitespace separated embedding vector of one residue.
    embedding_a: PathBuf,

    /// The fasta file of the first protein.
    fasta_a: PathBuf,

    /// The per-residue embedding file of the second protein.
    embedding_b: PathBuf,

    /// The fasta file of the second protein.
    fasta_b: PathBuf,

    /// The alignment policy.
    #[clap(value_enum, default_value = "nw")]
    mode: ModeArgument,

    /// The alphabet present in the input files.
    #[clap(long, short = 'a', default_value = "iupac-amino-acid")]
    alphabet: InputAlphabet,

    /// A string of (ASCII) characters that should be skipped in the input fasta.
    ///
    /// For example, `-` characters of an aligned fasta can be skipped this way.
    #[clap(long, default_value = "")]
    skip_characters: String,

    /// The directory to write the alignment report into.
    #[clap(long, short = 'o', default_value = "results")]
    output_dir: PathBuf,

    /// Also write the alignment matrix as CSV to this file.
    #[clap(long)]
    matrix_output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum ModeArgument {
    /// Global alignment (Needleman-Wunsch).
    Nw,
    /// Local alignment (Smith-Waterman).
    Sw,
    /// Glocal alignment, anchored at both ends of the second protein only.
    Gl,
}

impl From<ModeArgument> for AlignmentMode {
    fn from(mode: ModeArgument) -> Self {
        match mode {
            ModeArgument::Nw => Self::Global,
            ModeArgument::Sw => Self::Local,
            ModeArgument::Gl => Self::Glocal,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, ValueEnum)]
enum InputAlphabet {
    Dna,
    DnaN,
    Rna,
    RnaN,
    DnaIupac,
    RnaIupac,
    /// The IUPAC amino acid alphabet.
    IupacAminoAcid,
    /// The FAMSA amino acid alphabet.
    FamsaAminoAcid,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    info!("Logging initialised");

    run(&cli)?;

    info!("Terminating");

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let (sequence_a, sequence_b) = match cli.alphabet {
        InputAlphabet::Dna => read_sequences::<DnaAlphabet>(cli),
        InputAlphabet::DnaN => read_sequences::<DnaAlphabetOrN>(cli),
        InputAlphabet::Rna => read_sequences::<RnaAlphabet>(cli),
        InputAlphabet::RnaN => read_sequences::<RnaAlphabetOrN>(cli),
        InputAlphabet::DnaIupac => read_sequences::<DnaIupacNucleicAcidAlphabet>(cli),
        InputAlphabet::RnaIupac => read_sequences::<RnaIupacNucleicAcidAlphabet>(cli),
        InputAlphabet::IupacAminoAcid => read_sequences::<IupacAminoAcidAlphabet>(cli),
        InputAlphabet::FamsaAminoAcid => read_sequences::<FamsaAminoAcidAlphabet>(cli),
    }?;

    let embedding_a = Embedding::from_file(&cli.embedding_a)?;
    let embedding_b = Embedding::from_file(&cli.embedding_b)?;
    for (embedding, sequence, path) in [
        (&embedding_a, &sequence_a, &cli.embedding_a),
        (&embedding_b, &sequence_b, &cli.embedding_b),
    ] {
        ensure!(
            embedding.len() == sequence.residues.len(),
            "Embedding file {path:?} has {} vectors, but sequence {} has {} residues",
            embedding.len(),
            sequence.id,
            sequence.residues.len()
        );
    }

    let scores = dot_product_matrix(&embedding_a, &embedding_b)?;

    let mode = AlignmentMode::from(cli.mode);
    info!(
        "Computing {mode} alignment of {} and {}",
        sequence_a.id, sequence_b.id
    );
    let start_time = Instant::now();
    let (matrix, results) = align(&scores, &sequence_a.residues, &sequence_b.residues, mode)?;
    let duration = Instant::now() - start_time;

    info!("Runtime: {:.2}s", duration.as_secs_f64());
    info!("Found {} optimal alignments", results.len());
    for result in &results {
        info!("Alignment score {:?}: {}", result.score, result.cigar());
    }

    if let Some(matrix_output) = &cli.matrix_output {
        write_matrix_csv(matrix_output, &matrix)?;
    }

    let report = write_report(
        &cli.output_dir,
        mode,
        &sequence_a.id,
        &sequence_b.id,
        &results,
    )?;
    info!("Wrote report {report:?}");

    Ok(())
}

fn read_sequences<AlphabetType: Alphabet + Debug + Clone + Eq + 'static>(
    cli: &Cli,
) -> Result<(Sequence, Sequence)> {
    let skip_characters = skip_character_table(&cli.skip_characters);

    Ok((
        read_sequence::<AlphabetType>(&cli.fasta_a, &skip_characters)?,
        read_sequence::<AlphabetType>(&cli.fasta_b, &skip_characters)?,
    ))
}

/// Marks each ASCII value present in `characters`.
fn skip_character_table(characters: &str) -> Vec<bool> {
    let mut skip_characters = Vec::new();
    for character in characters.bytes().map(usize::from) {
        if skip_characters.len() <= character {
            skip_characters.resize(character + 1, false);
        }
        skip_characters[character] = true;
    }
    skip_characters
}
