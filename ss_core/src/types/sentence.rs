use crate::error::{ErrorCore, Result};
use std::ops::Deref;

/// A named, non-empty, ordered list of sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceList {
    label: &'static str,
    sentences: Vec<String>,
}

impl SentenceList {
    pub fn new(label: &'static str, sentences: Vec<String>) -> Result<Self> {
        if sentences.is_empty() {
            return Err(ErrorCore::EmptySentenceList(label.to_string()));
        }
        Ok(SentenceList { label, sentences })
    }

    /// One sentence per line. Lines are trimmed and blank ones skipped.
    pub fn from_lines(label: &'static str, text: &str) -> Result<Self> {
        let sentences = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(label, sentences)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn as_slice(&self) -> &[String] {
        &self.sentences
    }
}

impl Deref for SentenceList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.sentences
    }
}
