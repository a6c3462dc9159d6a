pub(crate) mod sentence_encoder;
#[cfg(test)]
pub(crate) mod bag_of_words;

pub use crate::encoder::sentence_encoder::SentenceEncoder;
pub use crate::encoder::sentence_encoder::check_encoded;
