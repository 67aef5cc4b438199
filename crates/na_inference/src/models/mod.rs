use std::sync::Arc;

use na_core::{Error, PreferenceModel, Result};

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

/// Model construction options. `api_key` is required by the Gemini model;
/// the rest fall back to built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub model_name: Option<String>,
}

/// Instantiate a preference model by name.
pub fn create_model(name: &str, config: &Config) -> Result<Arc<dyn PreferenceModel>> {
    match name {
        "gemini" => Ok(Arc::new(GeminiModel::new(config.clone())?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Inference(format!(
            "Unknown model '{}'. Available models: gemini, dummy",
            other
        ))),
    }
}
