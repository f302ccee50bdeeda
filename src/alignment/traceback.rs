use super::{
    error::AlignmentError,
    matrix::{AlignmentMatrix, Cell},
    mode::AlignmentMode,
};

pub const GAP_CHARACTER: char = '-';

/// One optimal alignment recovered from an [`AlignmentMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct TracebackResult {
    /// The first sequence with gaps inserted.
    pub aligned_a: String,
    /// The second sequence with gaps inserted, of the same length as `aligned_a`.
    pub aligned_b: String,
    /// The matrix value at `start`.
    pub score: f64,
    /// The cell the traceback started from.
    pub start: Cell,
    /// The cell where the traceback stopped.
    pub end: Cell,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Step {
    Diagonal,
    Top,
    Left,
}

impl Step {
    /// Chooses the predecessor of `cell` among its neighbours.
    ///
    /// Priority on equal values is diagonal, then top, then left.
    /// In row 0 only the left neighbour exists.
    /// The diagonal is compared as the raw neighbour value without the residue score,
    /// so a diagonal step may be taken where the fill preferred a gap.
    fn select(matrix: &AlignmentMatrix, cell: Cell) -> Self {
        let Cell { row, column } = cell;
        debug_assert!(column > 0);
        if row == 0 {
            return Self::Left;
        }

        let diagonal = matrix[(row - 1, column - 1)];
        let top = matrix[(row - 1, column)];
        let left = matrix[(row, column - 1)];
        let max = diagonal.max(top).max(left);

        if diagonal == max {
            Self::Diagonal
        } else if top == max {
            Self::Top
        } else {
            Self::Left
        }
    }
}

/// Reconstructs one alignment per start cell of `mode`.
///
/// With several optimal start cells the last one in row-major order is reported first.
pub fn trace(
    matrix: &AlignmentMatrix,
    sequence_a: &[char],
    sequence_b: &[char],
    mode: AlignmentMode,
) -> Result<Vec<TracebackResult>, AlignmentError> {
    let expected_rows = sequence_a.len() + 1;
    let expected_columns = sequence_b.len() + 1;
    if matrix.rows() != expected_rows || matrix.columns() != expected_columns {
        return Err(AlignmentError::InconsistentDimensions {
            expected_rows,
            expected_columns,
            rows: matrix.rows(),
            columns: matrix.columns(),
        });
    }

    if !matrix.has_interior() {
        return Err(AlignmentError::EmptyAlignment);
    }

    Ok(mode
        .start_cells(matrix)
        .into_iter()
        .rev()
        .map(|start| trace_from(matrix, sequence_a, sequence_b, mode, start))
        .collect())
}

fn trace_from(
    matrix: &AlignmentMatrix,
    sequence_a: &[char],
    sequence_b: &[char],
    mode: AlignmentMode,
    start: Cell,
) -> TracebackResult {
    let mut aligned_a = Vec::new();
    let mut aligned_b = Vec::new();
    let mut cell = start;

    let mut apply = |step: Step, cell: &mut Cell| match step {
        Step::Diagonal => {
            aligned_a.push(sequence_a[cell.row - 1]);
            aligned_b.push(sequence_b[cell.column - 1]);
            cell.row -= 1;
            cell.column -= 1;
        }
        Step::Top => {
            aligned_a.push(sequence_a[cell.row - 1]);
            aligned_b.push(GAP_CHARACTER);
            cell.row -= 1;
        }
        Step::Left => {
            aligned_a.push(GAP_CHARACTER);
            aligned_b.push(sequence_b[cell.column - 1]);
            cell.column -= 1;
        }
    };

    while mode.continues(cell) {
        apply(Step::select(matrix, cell), &mut cell);
    }

    if mode.drains_boundary() {
        while cell.row > 0 {
            apply(Step::Top, &mut cell);
        }
        while cell.column > 0 {
            apply(Step::Left, &mut cell);
        }
    }

    TracebackResult {
        aligned_a: aligned_a.into_iter().rev().collect(),
        aligned_b: aligned_b.into_iter().rev().collect(),
        score: matrix[start],
        start,
        end: cell,
    }
}

impl TracebackResult {
    /// A compact summary of the alignment columns.
    ///
    /// Runs of identical residues are written as `<amount>M`,
    /// every other column as its two characters in brackets, e.g. `2M[A-]1M[CG]`.
    pub fn cigar(&self) -> String {
        enum CigarElement {
            Match { amount: usize },
            Mismatch { column: (char, char) },
        }

        let mut cigar = Vec::new();
        for column in self.aligned_a.chars().zip(self.aligned_b.chars()) {
            if column.0 == column.1 && column.0 != GAP_CHARACTER {
                if let Some(CigarElement::Match { amount }) = cigar.last_mut() {
                    *amount += 1;
                } else {
                    cigar.push(CigarElement::Match { amount: 1 });
                }
            } else {
                cigar.push(CigarElement::Mismatch { column });
            }
        }

        let mut cigar_string = String::new();
        for element in &cigar {
            match element {
                CigarElement::Match { amount } => cigar_string.push_str(&format!("{amount}M")),
                CigarElement::Mismatch { column } => {
                    cigar_string.push('[');
                    cigar_string.push(column.0);
                    cigar_string.push(column.1);
                    cigar_string.push(']');
                }
            }
        }

        cigar_string
    }
}
