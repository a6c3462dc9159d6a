use serde::{Deserialize, Serialize};
use std::fmt;

/// One reported comparison between a sentence of list A and one of list B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencePair {
    pub source: String,
    pub target: String,
    pub score: f32,
}

impl fmt::Display for SentencePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \t\t {} \t\t Score: {:.4}",
            self.source, self.target, self.score
        )
    }
}
