pub mod embedding;
pub mod sentence;
pub mod sentence_pair;
pub mod similarity_matrix;
