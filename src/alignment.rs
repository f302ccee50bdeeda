use log::debug;

pub use error::AlignmentError;
pub use matrix::{AlignmentMatrix, Cell};
pub use mode::AlignmentMode;
pub use score::ScoreMatrix;
pub use traceback::{trace, TracebackResult};

mod display;
mod error;
mod matrix;
mod mode;
mod score;
mod traceback;

/// Builds the alignment matrix of `scores` and traces all optimal alignments of `mode`.
///
/// The score matrix must have one row per residue of `sequence_a` and one column per residue of `sequence_b`.
pub fn align(
    scores: &ScoreMatrix,
    sequence_a: &[char],
    sequence_b: &[char],
    mode: AlignmentMode,
) -> Result<(AlignmentMatrix, Vec<TracebackResult>), AlignmentError> {
    if scores.rows() != sequence_a.len() || scores.columns() != sequence_b.len() {
        return Err(AlignmentError::InvalidInput(format!(
            "score matrix is {}x{}, but the sequences have lengths {} and {}",
            scores.rows(),
            scores.columns(),
            sequence_a.len(),
            sequence_b.len()
        )));
    }

    let matrix = AlignmentMatrix::build(scores, mode);
    debug!(
        "Built {mode} alignment matrix of size {}x{}",
        matrix.rows(),
        matrix.columns()
    );

    let results = trace(&matrix, sequence_a, sequence_b, mode)?;
    debug!("Traced {} alignments", results.len());
    for result in &results {
        debug!("{result}");
    }

    Ok((matrix, results))
}
