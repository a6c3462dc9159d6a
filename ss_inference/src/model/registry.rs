use crate::error::{Error, Result};
use fastembed::{EmbeddingModel, ModelInfo, TextEmbedding};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct PretrainedModel {
    pub model: EmbeddingModel,
    pub model_code: String,
    pub dim: usize,
    pub description: String,
}

/// Every model the registry can download, ordered by model code.
pub fn list_pretrained() -> Vec<PretrainedModel> {
    let mut models: Vec<PretrainedModel> = TextEmbedding::list_supported_models()
        .into_iter()
        .map(|info| PretrainedModel {
            model: info.model,
            model_code: info.model_code,
            dim: info.dim,
            description: info.description,
        })
        .collect();
    models.sort_by(|a, b| {
        a.model_code
            .cmp(&b.model_code)
            .then_with(|| a.description.cmp(&b.description))
    });
    models
}

/// Lowercased last path segment, without a trailing `-onnx`.
fn short_name(code: &str) -> String {
    let last = code.rsplit('/').next().unwrap_or(code).to_lowercase();
    match last.strip_suffix("-onnx") {
        Some(stripped) => stripped.to_string(),
        None => last,
    }
}

fn is_quantized(info: &ModelInfo<EmbeddingModel>) -> bool {
    format!("{:?}", info.model).ends_with('Q') || info.model_file.contains("quantized")
}

/// Registry entries in a fixed order: full precision before quantized, then
/// by model code and model file. The registry itself has no stable order.
fn candidates() -> Vec<ModelInfo<EmbeddingModel>> {
    order_candidates(TextEmbedding::list_supported_models())
}

fn order_candidates(mut models: Vec<ModelInfo<EmbeddingModel>>) -> Vec<ModelInfo<EmbeddingModel>> {
    models.sort_by(|a, b| {
        is_quantized(a)
            .cmp(&is_quantized(b))
            .then_with(|| a.model_code.cmp(&b.model_code))
            .then_with(|| a.model_file.cmp(&b.model_file))
    });
    models
}

/// Finds the registry entry for `name`. An exact model code match wins, then
/// a short name match ignoring any org prefix. Ties go to the first entry of
/// [`candidates`].
pub fn resolve_pretrained(name: &str) -> Result<PretrainedModel> {
    find_pretrained(&candidates(), name)
}

fn find_pretrained(models: &[ModelInfo<EmbeddingModel>], name: &str) -> Result<PretrainedModel> {
    let wanted = short_name(name);

    let info = models
        .iter()
        .find(|info| info.model_code.eq_ignore_ascii_case(name))
        .or_else(|| models.iter().find(|info| short_name(&info.model_code) == wanted))
        .ok_or_else(|| Error::UnknownModel(name.to_string()))?;

    debug!("resolved {} to {} ({} dims)", name, info.model_code, info.dim);
    Ok(PretrainedModel {
        model: info.model.clone(),
        model_code: info.model_code.clone(),
        dim: info.dim,
        description: info.description.clone(),
    })
}
