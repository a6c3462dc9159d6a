use crate::error::{ErrorCore, Result};
use serde::Serialize;

/// Row-major `rows x cols` matrix of cosine scores. Row `i` belongs to
/// sentence `i` of list A, column `j` to sentence `j` of list B.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn from_scores(rows: usize, cols: usize, scores: Vec<f32>) -> Result<Self> {
        if rows * cols != scores.len() {
            return Err(ErrorCore::MatrixShape {
                rows,
                cols,
                len: scores.len(),
            });
        }
        Ok(SimilarityMatrix { rows, cols, scores })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.scores.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> Result<&[f32]> {
        if row >= self.rows {
            return Err(ErrorCore::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        let start = row * self.cols;
        Ok(&self.scores[start..start + self.cols])
    }

    /// `(row, col, score)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, score)| (i / self.cols, i % self.cols, *score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimilarityMatrix {
        SimilarityMatrix::from_scores(2, 3, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap()
    }

    #[test]
    fn test_shape_checked() {
        let err = SimilarityMatrix::from_scores(2, 2, vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, ErrorCore::MatrixShape { rows: 2, cols: 2, len: 3 }));
    }

    #[test]
    fn test_get_and_row() {
        let m = sample();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 2), Some(0.6));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.row(1).unwrap(), &[0.4, 0.5, 0.6]);
        assert!(matches!(m.row(2), Err(ErrorCore::RowOutOfRange { row: 2, rows: 2 })));
    }

    #[test]
    fn test_iter_row_major() {
        let cells: Vec<_> = sample().iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], (0, 0, 0.1));
        assert_eq!(cells[4], (1, 1, 0.5));
    }

    #[test]
    fn test_empty_matrix() {
        let m = SimilarityMatrix::from_scores(0, 3, vec![]).unwrap();
        assert_eq!(m.shape(), (0, 3));
        assert_eq!(m.iter().count(), 0);
    }
}
