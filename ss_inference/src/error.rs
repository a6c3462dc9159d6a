use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] ss_core::error::ErrorCore),

    #[error("Failed to load model {model}: {reason}")]
    ModelLoad { model: String, reason: String },

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Model could not be found in the path: {0}")]
    ModelPathNotFound(String),

    #[error("Model file {file} not found in {path}")]
    ModelFileMissing { file: String, path: String },

    #[error("Failed to encode sentences with {model}: {reason}")]
    Encoding { model: String, reason: String },

    #[error("Cannot encode an empty sentence list")]
    EmptyInput,

    #[error("Model {model} returned {found} embeddings for {expected} sentences")]
    EmbeddingCountMismatch {
        model: String,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// Whether the error happened while resolving or loading the model.
    pub fn is_model_load(&self) -> bool {
        matches!(
            self,
            Error::ModelLoad { .. }
                | Error::UnknownModel(_)
                | Error::ModelPathNotFound(_)
                | Error::ModelFileMissing { .. }
        )
    }

    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            Error::Encoding { .. } | Error::EmptyInput | Error::EmbeddingCountMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, crate::error::Error>;
