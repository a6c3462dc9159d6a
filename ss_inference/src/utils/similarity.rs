use crate::error::Result;
use crate::utils::math::cosine_sim;
use rayon::prelude::*;
use ss_core::error::ErrorCore;
use ss_core::types::embedding::{Embedding, common_dimension};
use ss_core::types::similarity_matrix::SimilarityMatrix;
use tracing::debug;

/// Cosine similarity of every vector of `a` against every vector of `b`.
/// The result has `a.len()` rows and `b.len()` columns.
pub fn similarity_cos(a: &[Embedding], b: &[Embedding]) -> Result<SimilarityMatrix> {
    let dim_a = common_dimension("A", a)?;
    let dim_b = common_dimension("B", b)?;
    if let (Some(expected), Some(found)) = (dim_a, dim_b)
        && expected != found
    {
        return Err(ErrorCore::DimensionMismatch {
            list: "B",
            index: 0,
            expected,
            found,
        }
        .into());
    }

    debug!("computing {}x{} similarity matrix", a.len(), b.len());
    let scores: Vec<f32> = a
        .par_iter()
        .flat_map_iter(|x| b.iter().map(move |y| cosine_sim(x, y)))
        .collect();

    Ok(SimilarityMatrix::from_scores(a.len(), b.len(), scores)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn vectors() -> (Vec<Embedding>, Vec<Embedding>) {
        let a = vec![vec![1.0, 0.0, 0.0], vec![0.5, 0.5, 0.0]];
        let b = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![-1.0, 0.2, 0.7],
            vec![0.2, 0.9, -0.3],
        ];
        (a, b)
    }

    #[test]
    fn test_shape() {
        let (a, b) = vectors();
        let m = similarity_cos(&a, &b).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 4);
    }

    #[test]
    fn test_values_in_range() {
        let (a, b) = vectors();
        let m = similarity_cos(&a, &b).unwrap();
        assert!(m.iter().all(|(_, _, s)| (-1.0..=1.0).contains(&s)));
        assert!((m.get(0, 0).unwrap() - 1.0).abs() < 1e-5);
        assert_eq!(m.get(0, 1), Some(0.0));
    }

    #[test]
    fn test_symmetric() {
        let (a, b) = vectors();
        let ab = similarity_cos(&a, &b).unwrap();
        let ba = similarity_cos(&b, &a).unwrap();
        for (i, j, score) in ab.iter() {
            assert_eq!(Some(score), ba.get(j, i));
        }
    }

    #[test]
    fn test_row_order_preserved() {
        let a: Vec<Embedding> = (0..64).map(|i| vec![1.0, i as f32]).collect();
        let b = vec![vec![1.0, 0.0]];
        let m = similarity_cos(&a, &b).unwrap();
        for i in 0..64 {
            assert_eq!(m.get(i, 0), Some(cosine_sim(&a[i], &b[0])));
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = vec![vec![1.0, 0.0, 0.0]];
        let b = vec![vec![1.0, 0.0]];
        let err = similarity_cos(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(ErrorCore::DimensionMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_ragged_input_mismatch() {
        let a = vec![vec![1.0, 0.0], vec![1.0]];
        let b = vec![vec![1.0, 0.0]];
        assert!(similarity_cos(&a, &b).is_err());
    }

    #[test]
    fn test_empty_side() {
        let b = vec![vec![1.0, 0.0]];
        let m = similarity_cos(&[], &b).unwrap();
        assert_eq!(m.shape(), (0, 1));
    }
}
