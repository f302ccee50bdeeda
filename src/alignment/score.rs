use std::ops::Index;

use super::error::AlignmentError;

/// Residue similarities between two sequences.
///
/// Row `i` belongs to residue `i` of the first sequence, column `j` to residue `j` of the second.
/// Both dimensions are at least one and every score is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: usize,
    columns: usize,
    scores: Vec<f64>,
}

impl ScoreMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AlignmentError> {
        let row_amount = rows.len();
        let column_amount = rows.first().map(Vec::len).unwrap_or(0);

        if row_amount == 0 || column_amount == 0 {
            return Err(AlignmentError::InvalidInput(format!(
                "score matrix must not be empty, but is {row_amount}x{column_amount}"
            )));
        }

        let mut scores = Vec::with_capacity(row_amount * column_amount);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != column_amount {
                return Err(AlignmentError::InvalidInput(format!(
                    "score matrix row {row_index} has {} columns, but row 0 has {column_amount}",
                    row.len()
                )));
            }

            if let Some(column_index) = row.iter().position(|score| !score.is_finite()) {
                return Err(AlignmentError::InvalidInput(format!(
                    "score matrix entry ({row_index}, {column_index}) is not finite: {}",
                    row[column_index]
                )));
            }

            scores.extend(row);
        }

        Ok(Self {
            rows: row_amount,
            columns: column_amount,
            scores,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(column < self.columns);
        &self.scores[row * self.columns + column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_rows_in_order() {
        let matrix = ScoreMatrix::from_rows(vec![vec![2.0, -1.0, -1.0], vec![-1.0, -1.0, 2.0]])
            .unwrap();

        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.columns(), 3);
        assert_eq!(matrix[(0, 0)], 2.0);
        assert_eq!(matrix[(1, 1)], -1.0);
        assert_eq!(matrix[(1, 2)], 2.0);
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            ScoreMatrix::from_rows(Vec::new()),
            Err(AlignmentError::InvalidInput(_))
        ));
        assert!(matches!(
            ScoreMatrix::from_rows(vec![Vec::new(), Vec::new()]),
            Err(AlignmentError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = ScoreMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(AlignmentError::InvalidInput(_))));
    }

    #[test]
    fn rejects_non_finite_scores() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = ScoreMatrix::from_rows(vec![vec![1.0, value]]);
            assert!(matches!(result, Err(AlignmentError::InvalidInput(_))));
        }
    }
}
