use thiserror::Error;

/// Errors raised while building or tracing an alignment matrix.
///
/// All of them are final: the computation is pure, so retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// Degenerate or mismatched input dimensions, or non-finite scores.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The alignment matrix does not fit the sequences it is traced against.
    #[error(
        "inconsistent dimensions: expected a {expected_rows}x{expected_columns} alignment matrix, but found {rows}x{columns}"
    )]
    InconsistentDimensions {
        expected_rows: usize,
        expected_columns: usize,
        rows: usize,
        columns: usize,
    },

    /// The alignment matrix consists of boundary cells only.
    #[error("the alignment matrix has no interior cells")]
    EmptyAlignment,
}
