use crate::error::{ErrorCore, Result};

/// Fixed-length vector produced by the model for one sentence.
pub type Embedding = Vec<f32>;

/// Returns the dimension shared by every embedding of `list`, or `None` when
/// the list is empty.
pub fn common_dimension(list: &'static str, embeddings: &[Embedding]) -> Result<Option<usize>> {
    let Some(first) = embeddings.first() else {
        return Ok(None);
    };
    let expected = first.len();
    if let Some((index, e)) = embeddings
        .iter()
        .enumerate()
        .find(|(_, e)| e.len() != expected)
    {
        return Err(ErrorCore::DimensionMismatch {
            list,
            index,
            expected,
            found: e.len(),
        });
    }
    Ok(Some(expected))
}
