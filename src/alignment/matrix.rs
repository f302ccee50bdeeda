use std::ops::Index;

use super::{mode::AlignmentMode, score::ScoreMatrix};

/// The cost of aligning a residue against a gap.
pub const GAP_SCORE: f64 = 0.0;

/// A coordinate in an [`AlignmentMatrix`].
///
/// Row `i` and column `j` refer to the prefixes of length `i` and `j` of the two sequences,
/// so row 0 and column 0 lie before the first residue.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Dynamic programming matrix with one boundary row and column in front of the residues.
///
/// Never modified after [`AlignmentMatrix::build`] returns.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentMatrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl AlignmentMatrix {
    /// Fills the matrix in row-major order.
    ///
    /// Each interior cell is the maximum of its diagonal neighbour plus the residue score
    /// and its top and left neighbours plus [`GAP_SCORE`].
    /// Modes that floor at zero additionally never drop below zero.
    pub fn build(scores: &ScoreMatrix, mode: AlignmentMode) -> Self {
        let rows = scores.rows() + 1;
        let columns = scores.columns() + 1;
        let mut values = vec![0.0; rows * columns];
        let index = |row: usize, column: usize| row * columns + column;

        for row in 0..rows {
            values[index(row, 0)] = row as f64 * GAP_SCORE;
        }
        for column in 0..columns {
            values[index(0, column)] = column as f64 * GAP_SCORE;
        }

        for row in 1..rows {
            for column in 1..columns {
                let diagonal = values[index(row - 1, column - 1)] + scores[(row - 1, column - 1)];
                let top = values[index(row - 1, column)] + GAP_SCORE;
                let left = values[index(row, column - 1)] + GAP_SCORE;

                let mut value = diagonal.max(top).max(left);
                if mode.floors_at_zero() {
                    value = value.max(0.0);
                }
                values[index(row, column)] = value;
            }
        }

        Self {
            rows,
            columns,
            values,
        }
    }

    /// The number of rows including the boundary row.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns including the boundary column.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn has_interior(&self) -> bool {
        self.rows > 1 && self.columns > 1
    }

    pub fn row_values(&self, row: usize) -> &[f64] {
        &self.values[row * self.columns..(row + 1) * self.columns]
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn column_max_value(&self, column: usize) -> f64 {
        (0..self.rows)
            .map(|row| self[(row, column)])
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// All cells holding exactly `value`, in row-major order.
    pub fn cells_equal_to(&self, value: f64) -> Vec<Cell> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, cell_value)| **cell_value == value)
            .map(|(index, _)| Cell::new(index / self.columns, index % self.columns))
            .collect()
    }

    /// All cells of `column` holding exactly `value`, from top to bottom.
    pub fn column_cells_equal_to(&self, column: usize, value: f64) -> Vec<Cell> {
        (0..self.rows)
            .filter(|row| self[(*row, column)] == value)
            .map(|row| Cell::new(row, column))
            .collect()
    }

    /// Wraps raw values, bypassing the fill rule.
    #[cfg(test)]
    pub(crate) fn from_raw(rows: usize, columns: usize, values: Vec<f64>) -> Self {
        assert_eq!(rows * columns, values.len());
        Self {
            rows,
            columns,
            values,
        }
    }
}

impl Index<(usize, usize)> for AlignmentMatrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && column < self.columns);
        &self.values[row * self.columns + column]
    }
}

impl Index<Cell> for AlignmentMatrix {
    type Output = f64;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self[(cell.row, cell.column)]
    }
}
