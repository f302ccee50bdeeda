use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use log::info;

use crate::alignment::{AlignmentMatrix, AlignmentMode, TracebackResult};

/// Writes all alignments of one run into `<output_directory>/<Mode>_<id_a>_&_<id_b>.txt`.
///
/// The directory is created if necessary and an existing report of the same name is replaced.
pub fn write_report(
    output_directory: &Path,
    mode: AlignmentMode,
    id_a: &str,
    id_b: &str,
    results: &[TracebackResult],
) -> Result<PathBuf> {
    fs::create_dir_all(output_directory)
        .with_context(|| format!("Error creating output directory {output_directory:?}"))?;

    let path = output_directory.join(format!(
        "{}_{}_&_{}.txt",
        mode.report_label(),
        file_name_component(id_a),
        file_name_component(id_b)
    ));
    info!("Writing {} alignments to {path:?}", results.len());

    let file = File::create(&path).with_context(|| format!("Error creating file {path:?}"))?;
    let mut writer = BufWriter::new(file);
    for result in results {
        write_result(&mut writer, mode, id_a, id_b, result)
            .with_context(|| format!("Error writing file {path:?}"))?;
    }
    writer
        .flush()
        .with_context(|| format!("Error writing file {path:?}"))?;

    Ok(path)
}

fn write_result(
    writer: &mut impl Write,
    mode: AlignmentMode,
    id_a: &str,
    id_b: &str,
    result: &TracebackResult,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} alignment of {id_a} and {id_b}\n",
        mode.report_label()
    )?;
    writeln!(writer, "Alignment_score = {:?}\n", result.score)?;
    writeln!(writer, "{id_a}")?;
    writeln!(writer, "{}", result.aligned_a)?;
    writeln!(writer, "{}", result.aligned_b)?;
    writeln!(writer, "{id_b}\n")
}

/// Fasta ids may contain path separators.
fn file_name_component(id: &str) -> String {
    id.replace(['/', '\\'], "_")
}

/// Writes the alignment matrix as CSV, one record per row including the boundary row.
pub fn write_matrix_csv(path: &Path, matrix: &AlignmentMatrix) -> Result<()> {
    info!(
        "Writing {}x{} alignment matrix to {path:?}",
        matrix.rows(),
        matrix.columns()
    );

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("Error creating CSV file {path:?}"))?;

    for row in 0..matrix.rows() {
        writer
            .write_record(matrix.row_values(row).iter().map(f64::to_string))
            .with_context(|| format!("Error writing CSV line {row}"))?;
    }

    writer
        .flush()
        .with_context(|| format!("Error writing CSV file {path:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{Cell, ScoreMatrix};

    fn result(aligned_a: &str, aligned_b: &str, score: f64) -> TracebackResult {
        TracebackResult {
            aligned_a: aligned_a.to_string(),
            aligned_b: aligned_b.to_string(),
            score,
            start: Cell::new(2, 3),
            end: Cell::new(0, 0),
        }
    }

    #[test]
    fn writes_global_report() {
        let directory = tempfile::tempdir().unwrap();
        let output_directory = directory.path().join("results");

        let path = write_report(
            &output_directory,
            AlignmentMode::Global,
            "ADK_2AK3A",
            "6PF2K_1BIF",
            &[result("A-C", "AGC", 4.0)],
        )
        .unwrap();

        assert_eq!(path, output_directory.join("Global_ADK_2AK3A_&_6PF2K_1BIF.txt"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Global alignment of ADK_2AK3A and 6PF2K_1BIF\n\n\
             Alignment_score = 4.0\n\n\
             ADK_2AK3A\nA-C\nAGC\n6PF2K_1BIF\n\n"
        );
    }

    #[test]
    fn writes_every_local_result_and_replaces_old_reports() {
        let directory = tempfile::tempdir().unwrap();
        let write = |results: &[TracebackResult]| {
            write_report(directory.path(), AlignmentMode::Local, "a", "b/c", results).unwrap()
        };

        write(&[result("XX", "YY", 1.0)]);
        let path = write(&[result("K", "R", 2.5), result("W", "W", 2.5)]);

        assert_eq!(path.file_name().unwrap(), "Local_a_&_b_c.txt");
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.matches("Local alignment of a and b/c").count(), 2);
        assert_eq!(content.matches("Alignment_score = 2.5").count(), 2);
        assert!(!content.contains("XX"));
    }

    #[test]
    fn writes_matrix_csv() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("matrix.csv");
        let scores = ScoreMatrix::from_rows(vec![vec![2.0, -1.0], vec![-1.0, 0.5]]).unwrap();
        let matrix = AlignmentMatrix::build(&scores, AlignmentMode::Global);

        write_matrix_csv(&path, &matrix).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "0,0,0\n0,2,2\n0,2,2.5\n"
        );
    }
}
