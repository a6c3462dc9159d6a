use crate::error::{ErrorCore, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";
pub const DEFAULT_MAX_LENGTH: usize = 512;

pub const DEFAULT_SOURCE: [&str; 1] = ["The cat sits outside"];
pub const DEFAULT_TARGET: [&str; 3] = [
    "The dog plays in the garden",
    "A woman watches TV",
    "The cat sits inside",
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Registry name or local directory of the embedding model.
    pub model: String,
    pub cache_dir: Option<PathBuf>,
    pub show_download_progress: bool,
    pub max_length: usize,
    pub batch_size: Option<usize>,
    pub source: Vec<String>,
    pub target: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: DEFAULT_MODEL.to_string(),
            cache_dir: None,
            show_download_progress: false,
            max_length: DEFAULT_MAX_LENGTH,
            batch_size: None,
            source: DEFAULT_SOURCE.iter().map(|s| s.to_string()).collect(),
            target: DEFAULT_TARGET.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Reads a JSON config; missing fields keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("loading config in {}", path.display());
        let config = Self::from_file::<Config>(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ErrorCore::InvalidConfig("model must not be empty".into()));
        }
        if self.max_length == 0 {
            return Err(ErrorCore::InvalidConfig("max_length must be greater than 0".into()));
        }
        if self.batch_size == Some(0) {
            return Err(ErrorCore::InvalidConfig("batch_size must be greater than 0".into()));
        }
        Ok(())
    }

    fn from_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let data = fs::read_to_string(path).map_err(|source| ErrorCore::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config: T = serde_json::from_str(&data)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_matches_demo() {
        let config = Config::default();
        assert_eq!(config.model, "all-MiniLM-L6-v2");
        assert_eq!(config.source, vec!["The cat sits outside"]);
        assert_eq!(config.target.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{"model": "bge-small-en-v1.5", "batch_size": 8}"#);
        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.model, "bge-small-en-v1.5");
        assert_eq!(config.batch_size, Some(8));
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.target, Config::default().target);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config(r#"{"modle": "typo"}"#);
        assert!(matches!(
            Config::from_path(file.path()),
            Err(ErrorCore::JsonError(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(r#"{"batch_size": 0}"#);
        assert!(matches!(
            Config::from_path(file.path()),
            Err(ErrorCore::InvalidConfig(_))
        ));

        let config = Config {
            model: " ".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_path(Path::new("/nonexistent/sentsim.json")).unwrap_err();
        assert!(matches!(err, ErrorCore::ReadFile { .. }));
    }
}
