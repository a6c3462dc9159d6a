#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>()
}

#[inline]
pub fn l2norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity of two vectors of the same length. A zero vector scores
/// 0.0 against anything.
#[inline]
pub fn cosine_sim(a: &[f32], b: &[f32]) -> f32 {
    let denom = l2norm(a) * l2norm(b);
    if denom == 0.0 {
        return 0.0;
    }
    (dot(a, b) / denom).clamp(-1.0, 1.0)
}
