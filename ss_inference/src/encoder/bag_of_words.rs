use crate::encoder::SentenceEncoder;
use crate::error::{Error, Result};
use ss_core::types::embedding::Embedding;

/// Deterministic stand-in for a real model: hashes lowercase words into
/// `dim` buckets and counts them.
pub struct BagOfWordsEncoder {
    dim: usize,
}

impl BagOfWordsEncoder {
    pub fn new(dim: usize) -> Self {
        BagOfWordsEncoder { dim }
    }

    fn bucket(&self, word: &str) -> usize {
        // FNV-1a
        let hash = word
            .bytes()
            .fold(0xcbf29ce484222325_u64, |h, b| (h ^ b as u64).wrapping_mul(0x100000001b3));
        (hash % self.dim as u64) as usize
    }
}

impl SentenceEncoder for BagOfWordsEncoder {
    fn encode(&self, sentences: &[String]) -> Result<Vec<Embedding>> {
        if sentences.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(sentences
            .iter()
            .map(|s| {
                let mut v = vec![0.0; self.dim];
                for word in s.split_whitespace() {
                    v[self.bucket(&word.to_lowercase())] += 1.0;
                }
                v
            })
            .collect())
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.dim)
    }

    fn model_name(&self) -> &str {
        "bag-of-words"
    }
}
