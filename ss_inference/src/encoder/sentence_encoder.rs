use crate::error::{Error, Result};
use ss_core::types::embedding::Embedding;

/// Maps sentences to fixed-dimension vectors, one per sentence, in order.
pub trait SentenceEncoder {
    fn encode(&self, sentences: &[String]) -> Result<Vec<Embedding>>;

    /// Output dimension, when known before the first encode.
    fn dimension(&self) -> Option<usize>;

    fn model_name(&self) -> &str;
}

/// Verifies a backend answered with exactly one embedding per sentence.
pub fn check_encoded(model: &str, expected: usize, embeddings: Vec<Embedding>) -> Result<Vec<Embedding>> {
    if embeddings.len() != expected {
        return Err(Error::EmbeddingCountMismatch {
            model: model.to_string(),
            expected,
            found: embeddings.len(),
        });
    }
    Ok(embeddings)
}
