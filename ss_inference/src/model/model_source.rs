use std::fmt;
use std::path::{Path, PathBuf};

/// Where the model weights come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Name looked up in the fastembed registry, downloaded into the cache.
    Pretrained(String),
    /// Directory holding an exported `model.onnx` plus tokenizer files.
    Local(PathBuf),
}

impl ModelSource {
    /// An identifier naming an existing directory is local, anything else is
    /// a registry name.
    pub fn from_identifier(identifier: &str) -> Self {
        let identifier = identifier.trim();
        let path = Path::new(identifier);
        if path.is_dir() {
            ModelSource::Local(path.to_path_buf())
        } else {
            ModelSource::Pretrained(identifier.to_string())
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::Pretrained(name) => write!(f, "{name}"),
            ModelSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_pretrained() {
        assert_eq!(
            ModelSource::from_identifier(" all-MiniLM-L6-v2 "),
            ModelSource::Pretrained("all-MiniLM-L6-v2".into())
        );
    }

    #[test]
    fn test_existing_dir_is_local() {
        let dir = tempfile::tempdir().unwrap();
        let identifier = dir.path().display().to_string();
        assert_eq!(
            ModelSource::from_identifier(&identifier),
            ModelSource::Local(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ModelSource::Pretrained("all-MiniLM-L6-v2".into()).to_string(),
            "all-MiniLM-L6-v2"
        );
        assert_eq!(
            ModelSource::Local(PathBuf::from("/models/minilm")).to_string(),
            "/models/minilm"
        );
    }

    #[test]
    fn test_file_is_not_local() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let identifier = file.path().display().to_string();
        assert!(matches!(
            ModelSource::from_identifier(&identifier),
            ModelSource::Pretrained(_)
        ));
    }
}
