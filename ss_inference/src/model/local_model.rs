use crate::error::{Error, Result};
use fastembed::{Pooling, TokenizerFiles, UserDefinedEmbeddingModel};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const ONNX_FILE: &str = "model.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";
const CONFIG_FILE: &str = "config.json";
const SPECIAL_TOKENS_MAP_FILE: &str = "special_tokens_map.json";
const TOKENIZER_CONFIG_FILE: &str = "tokenizer_config.json";

#[derive(Debug, Deserialize)]
struct LocalModelConfig {
    hidden_size: Option<usize>,
}

pub struct LocalModel {
    pub model_path: PathBuf,
    pub dim: Option<usize>,
    pub model: UserDefinedEmbeddingModel,
}

impl LocalModel {
    pub fn load_with_path(root_path: &Path) -> Result<LocalModel> {
        if !root_path.exists() {
            return Err(Error::ModelPathNotFound(root_path.display().to_string()));
        }

        let model_path = find_model_path_from_root(root_path)?;
        debug!("loading local model in {}", model_path.display());

        let config_file = read_model_file(&model_path, CONFIG_FILE)?;
        let config: LocalModelConfig = serde_json::from_slice(&config_file)
            .map_err(|e| model_load_error(&model_path, format!("invalid {CONFIG_FILE}: {e}")))?;

        let tokenizer_files = TokenizerFiles {
            tokenizer_file: read_model_file(&model_path, TOKENIZER_FILE)?,
            config_file,
            special_tokens_map_file: read_model_file(&model_path, SPECIAL_TOKENS_MAP_FILE)?,
            tokenizer_config_file: read_model_file(&model_path, TOKENIZER_CONFIG_FILE)?,
        };
        let onnx_file = read_model_file(&model_path, ONNX_FILE)?;
        let model = UserDefinedEmbeddingModel::new(onnx_file, tokenizer_files).with_pooling(Pooling::Mean);

        Ok(LocalModel {
            model_path,
            dim: config.hidden_size,
            model,
        })
    }
}

/// First directory under `root_path` (itself included) holding `model.onnx`.
fn find_model_path_from_root(root_path: &Path) -> Result<PathBuf> {
    WalkDir::new(root_path)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == ONNX_FILE)
        .find_map(|entry| entry.path().parent().map(Path::to_path_buf))
        .ok_or_else(|| Error::ModelFileMissing {
            file: ONNX_FILE.to_string(),
            path: root_path.display().to_string(),
        })
}

fn read_model_file(model_path: &Path, file: &str) -> Result<Vec<u8>> {
    let path = model_path.join(file);
    if !path.is_file() {
        return Err(Error::ModelFileMissing {
            file: file.to_string(),
            path: model_path.display().to_string(),
        });
    }
    fs::read(&path).map_err(|e| model_load_error(model_path, format!("cannot read {file}: {e}")))
}

fn model_load_error(model_path: &Path, reason: String) -> Error {
    Error::ModelLoad {
        model: model_path.display().to_string(),
        reason,
    }
}
