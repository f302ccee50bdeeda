pub use embedding::{dot_product_matrix, Embedding};
pub use fasta::{read_sequence, Sequence};

mod embedding;
mod fasta;
