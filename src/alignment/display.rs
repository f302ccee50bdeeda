use std::fmt::Display;

use super::{AlignmentMode, Cell, TracebackResult};

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report_label().to_lowercase())
    }
}

impl Display for TracebackResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Alignment[{} -> {}; score {:?}; {}]",
            self.start,
            self.end,
            self.score,
            self.cigar()
        )
    }
}
