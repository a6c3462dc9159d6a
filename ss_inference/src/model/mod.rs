pub(crate) mod local_model;
pub(crate) mod model_runtime;
pub(crate) mod model_source;
pub(crate) mod registry;

pub use crate::model::model_runtime::ModelRuntime;
pub use crate::model::model_source::ModelSource;
pub use crate::model::registry::{PretrainedModel, list_pretrained, resolve_pretrained};
