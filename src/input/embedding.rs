use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{ensure, Context, Result};
use log::info;

use crate::alignment::ScoreMatrix;

/// One embedding vector per residue, all of the same dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    vectors: Vec<Vec<f64>>,
}

impl Embedding {
    /// Reads an embedding file with one line of whitespace separated values per residue.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading embedding file {path:?}");

        let file = File::open(path).with_context(|| format!("Error opening file: {path:?}"))?;
        let embedding = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Error loading file: {path:?}"))?;

        info!(
            "Loaded {} embedding vectors of dimension {}",
            embedding.len(),
            embedding.dimension()
        );
        Ok(embedding)
    }

    /// Blank lines are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut vectors: Vec<Vec<f64>> = Vec::new();

        for (line_index, line) in reader.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line.with_context(|| format!("Error reading line {line_number}"))?;
            if line.trim().is_empty() {
                continue;
            }

            let vector = line
                .split_whitespace()
                .map(|value| {
                    value.parse().with_context(|| {
                        format!("Error parsing '{value}' as f64 in line {line_number}")
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            if let Some(first) = vectors.first() {
                ensure!(
                    vector.len() == first.len(),
                    "Line {line_number} has {} values, but the first vector has {}",
                    vector.len(),
                    first.len()
                );
            }

            vectors.push(vector);
        }

        ensure!(!vectors.is_empty(), "Found no embedding vectors");
        Ok(Self { vectors })
    }

    /// The number of residues.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn dimension(&self) -> usize {
        self.vectors.first().map(Vec::len).unwrap_or(0)
    }
}

/// Scores each residue pair with the inner product of their embedding vectors.
pub fn dot_product_matrix(embedding_a: &Embedding, embedding_b: &Embedding) -> Result<ScoreMatrix> {
    ensure!(
        embedding_a.dimension() == embedding_b.dimension(),
        "Embedding dimensions differ: {} != {}",
        embedding_a.dimension(),
        embedding_b.dimension()
    );

    let rows: Vec<Vec<f64>> = embedding_a
        .vectors
        .iter()
        .map(|vector_a| {
            embedding_b
                .vectors
                .iter()
                .map(|vector_b| {
                    vector_a
                        .iter()
                        .zip(vector_b)
                        .map(|(value_a, value_b)| value_a * value_b)
                        .sum()
                })
                .collect()
        })
        .collect();

    Ok(ScoreMatrix::from_rows(rows)?)
}
