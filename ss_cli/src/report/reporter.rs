use crate::error::Result;
use ss_core::error::ErrorCore;
use ss_core::types::sentence_pair::SentencePair;
use ss_core::types::similarity_matrix::SimilarityMatrix;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Every row of list A instead of only the first one.
    pub all: bool,
    pub rank: bool,
    pub json: bool,
}

/// Builds the reported pairs, row-major, from the matrix.
pub fn select_pairs(
    source: &[String],
    target: &[String],
    matrix: &SimilarityMatrix,
    options: &ReportOptions,
) -> Result<Vec<SentencePair>> {
    if matrix.shape() != (source.len(), target.len()) {
        return Err(ErrorCore::MatrixShape {
            rows: source.len(),
            cols: target.len(),
            len: matrix.rows() * matrix.cols(),
        }
        .into());
    }
    let rows = if options.all { source.len() } else { source.len().min(1) };

    let mut pairs = Vec::with_capacity(rows * target.len());
    for (i, sentence) in source.iter().enumerate().take(rows) {
        for (other, score) in target.iter().zip(matrix.row(i)?) {
            pairs.push(SentencePair {
                source: sentence.clone(),
                target: other.clone(),
                score: *score,
            });
        }
    }

    if options.rank {
        pairs.sort_by(|a, b| b.score.total_cmp(&a.score));
    }
    Ok(pairs)
}

pub fn write_report<W: Write>(out: &mut W, pairs: &[SentencePair], options: &ReportOptions) -> Result<()> {
    if options.json {
        serde_json::to_writer_pretty(&mut *out, pairs)?;
        writeln!(out)?;
    } else {
        for pair in pairs {
            writeln!(out, "{pair}")?;
        }
    }
    out.flush()?;
    Ok(())
}
