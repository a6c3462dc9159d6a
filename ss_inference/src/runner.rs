use crate::encoder::{SentenceEncoder, check_encoded};
use crate::error::Result;
use crate::utils::similarity::similarity_cos;
use ss_core::error::ErrorCore;
use ss_core::types::embedding::Embedding;
use ss_core::types::sentence::SentenceList;
use ss_core::types::similarity_matrix::SimilarityMatrix;
use tracing::info;

/// Encodes two sentence lists with one model and scores every pair.
#[derive(Debug)]
pub struct Runner<E> {
    encoder: E,
}

impl<E: SentenceEncoder> Runner<E> {
    pub fn new(encoder: E) -> Self {
        Runner { encoder }
    }

    /// Scores every pair. The matrix has one row per `source` sentence and
    /// one column per `target` sentence.
    pub fn compare(&self, source: &SentenceList, target: &SentenceList) -> Result<SimilarityMatrix> {
        let embeddings_source = self.encode(source)?;
        let embeddings_target = self.encode(target)?;
        let matrix = similarity_cos(&embeddings_source, &embeddings_target)?;
        if matrix.shape() != (source.len(), target.len()) {
            return Err(ErrorCore::MatrixShape {
                rows: source.len(),
                cols: target.len(),
                len: matrix.rows() * matrix.cols(),
            }
            .into());
        }
        info!(
            "Compared {} x {} sentences with {}",
            source.len(),
            target.len(),
            self.encoder.model_name()
        );
        Ok(matrix)
    }

    fn encode(&self, sentences: &SentenceList) -> Result<Vec<Embedding>> {
        let embeddings = self.encoder.encode(sentences)?;
        let embeddings = check_encoded(self.encoder.model_name(), sentences.len(), embeddings)?;
        if let Some(expected) = self.encoder.dimension()
            && let Some((index, e)) = embeddings.iter().enumerate().find(|(_, e)| e.len() != expected)
        {
            return Err(ErrorCore::DimensionMismatch {
                list: sentences.label(),
                index,
                expected,
                found: e.len(),
            }
            .into());
        }
        Ok(embeddings)
    }
}
