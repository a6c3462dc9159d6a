use crate::encoder::{SentenceEncoder, check_encoded};
use crate::error::{Error, Result};
use crate::model::local_model::LocalModel;
use crate::model::model_source::ModelSource;
use crate::model::registry::resolve_pretrained;
use fastembed::{InitOptions, InitOptionsUserDefined, TextEmbedding};
use ss_core::config::Config;
use ss_core::types::embedding::Embedding;
use std::path::Path;
use tracing::{debug, info};

/// A loaded embedding model, used read-only for every encode call.
pub struct ModelRuntime {
    pub name: String,
    source: ModelSource,
    dimension: Option<usize>,
    batch_size: Option<usize>,
    embedding: TextEmbedding,
}

impl ModelRuntime {
    /// Resolves `config.model` and materializes the weights, downloading
    /// them into the cache on first use.
    pub fn load(config: &Config) -> Result<ModelRuntime> {
        config.validate()?;
        let source = ModelSource::from_identifier(&config.model);
        let runtime = match &source {
            ModelSource::Pretrained(name) => Self::load_pretrained(name, config)?,
            ModelSource::Local(path) => Self::load_with_path(path, config)?,
        };
        info!(
            "Model {} loaded from {} ({} dims)",
            runtime.name,
            runtime.source,
            runtime
                .dimension
                .map_or_else(|| "unknown".to_string(), |d| d.to_string())
        );
        Ok(runtime)
    }

    fn load_pretrained(name: &str, config: &Config) -> Result<ModelRuntime> {
        let pretrained = resolve_pretrained(name)?;
        let mut options = InitOptions::new(pretrained.model.clone())
            .with_show_download_progress(config.show_download_progress)
            .with_max_length(config.max_length);
        if let Some(cache_dir) = &config.cache_dir {
            debug!("using model cache {}", cache_dir.display());
            options = options.with_cache_dir(cache_dir.clone());
        }

        let embedding = TextEmbedding::try_new(options).map_err(|e| Error::ModelLoad {
            model: pretrained.model_code.clone(),
            reason: format!("{e:#}"),
        })?;

        Ok(ModelRuntime {
            name: pretrained.model_code,
            source: ModelSource::Pretrained(name.to_string()),
            dimension: Some(pretrained.dim),
            batch_size: config.batch_size,
            embedding,
        })
    }

    fn load_with_path(path: &Path, config: &Config) -> Result<ModelRuntime> {
        let local = LocalModel::load_with_path(path)?;
        let name = local.model_path.display().to_string();
        let options = InitOptionsUserDefined::default().with_max_length(config.max_length);

        let embedding = TextEmbedding::try_new_from_user_defined(local.model, options).map_err(|e| {
            Error::ModelLoad {
                model: name.clone(),
                reason: format!("{e:#}"),
            }
        })?;

        Ok(ModelRuntime {
            name,
            source: ModelSource::Local(path.to_path_buf()),
            dimension: local.dim,
            batch_size: config.batch_size,
            embedding,
        })
    }
}

impl SentenceEncoder for ModelRuntime {
    fn encode(&self, sentences: &[String]) -> Result<Vec<Embedding>> {
        if sentences.is_empty() {
            return Err(Error::EmptyInput);
        }
        debug!(
            "encoding {} sentences with {} (batch size {:?})",
            sentences.len(),
            self.name,
            self.batch_size
        );
        let embeddings = self
            .embedding
            .embed(sentences.to_vec(), self.batch_size)
            .map_err(|e| Error::Encoding {
                model: self.name.clone(),
                reason: format!("{e:#}"),
            })?;
        check_encoded(&self.name, sentences.len(), embeddings)
    }

    fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
