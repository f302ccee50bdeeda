use super::matrix::{AlignmentMatrix, Cell};

/// The alignment policy, shared by matrix construction and traceback.
///
/// | Mode   | Fill floor | Start cells                        | Traceback runs while  | Boundary drain |
/// |--------|------------|------------------------------------|-----------------------|----------------|
/// | Global | none       | bottom-right corner                | `i > 0 && j > 0`      | yes            |
/// | Local  | zero       | all cells equal to the matrix max  | `i > 0 && j > 0`      | no             |
/// | Glocal | zero       | last-column cells equal to its max | `j > 0`               | no             |
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum AlignmentMode {
    /// Needleman-Wunsch.
    Global,
    /// Smith-Waterman.
    Local,
    /// Ends at the last residue of the second sequence and starts at its first.
    Glocal,
}

impl AlignmentMode {
    pub fn floors_at_zero(self) -> bool {
        match self {
            Self::Global => false,
            Self::Local | Self::Glocal => true,
        }
    }

    /// The cells to start a traceback from, in row-major order.
    ///
    /// Ties are compared with exact floating point equality.
    pub fn start_cells(self, matrix: &AlignmentMatrix) -> Vec<Cell> {
        let last_row = matrix.rows() - 1;
        let last_column = matrix.columns() - 1;

        match self {
            Self::Global => vec![Cell::new(last_row, last_column)],
            Self::Local => matrix.cells_equal_to(matrix.max_value()),
            Self::Glocal => {
                matrix.column_cells_equal_to(last_column, matrix.column_max_value(last_column))
            }
        }
    }

    /// True if the traceback has not yet reached its stop condition at `cell`.
    pub fn continues(self, cell: Cell) -> bool {
        match self {
            Self::Global | Self::Local => cell.row > 0 && cell.column > 0,
            Self::Glocal => cell.column > 0,
        }
    }

    /// True if leftover residues are aligned against gaps once the traceback hits a boundary.
    pub fn drains_boundary(self) -> bool {
        self == Self::Global
    }

    pub fn report_label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Local => "Local",
            Self::Glocal => "Glocal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::score::ScoreMatrix;

    fn matrix(mode: AlignmentMode) -> AlignmentMatrix {
        let scores = ScoreMatrix::from_rows(vec![
            vec![3.0, -1.0],
            vec![-1.0, -1.0],
            vec![-1.0, 1.0],
        ])
        .unwrap();
        AlignmentMatrix::build(&scores, mode)
    }

    #[test]
    fn global_starts_in_the_corner() {
        assert_eq!(
            AlignmentMode::Global.start_cells(&matrix(AlignmentMode::Global)),
            vec![Cell::new(3, 2)]
        );
    }

    #[test]
    fn local_starts_at_every_maximum() {
        // Rows: [0 0 0], [0 3 3], [0 3 3], [0 3 4]
        let matrix = matrix(AlignmentMode::Local);
        assert_eq!(
            AlignmentMode::Local.start_cells(&matrix),
            vec![Cell::new(3, 2)]
        );

        let scores = ScoreMatrix::from_rows(vec![vec![2.0, -1.0], vec![-1.0, -1.0]]).unwrap();
        let matrix = AlignmentMatrix::build(&scores, AlignmentMode::Local);
        assert_eq!(
            AlignmentMode::Local.start_cells(&matrix),
            vec![
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
    }

    #[test]
    fn glocal_starts_in_the_last_column_only() {
        let scores = ScoreMatrix::from_rows(vec![vec![5.0, -1.0], vec![-1.0, -1.0]]).unwrap();
        let matrix = AlignmentMatrix::build(&scores, AlignmentMode::Glocal);

        // The matrix maximum 5 also sits at (1, 1), which must not be selected.
        assert_eq!(
            AlignmentMode::Glocal.start_cells(&matrix),
            vec![Cell::new(1, 2), Cell::new(2, 2)]
        );
    }

    #[test]
    fn stop_conditions() {
        let boundary_row = Cell::new(0, 3);
        let boundary_column = Cell::new(3, 0);
        let interior = Cell::new(1, 1);

        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            assert!(mode.continues(interior));
            assert!(!mode.continues(boundary_row));
            assert!(!mode.continues(boundary_column));
        }

        assert!(AlignmentMode::Glocal.continues(interior));
        assert!(AlignmentMode::Glocal.continues(boundary_row));
        assert!(!AlignmentMode::Glocal.continues(boundary_column));

        assert!(AlignmentMode::Global.drains_boundary());
        assert!(!AlignmentMode::Local.drains_boundary());
        assert!(!AlignmentMode::Glocal.drains_boundary());
    }
}
