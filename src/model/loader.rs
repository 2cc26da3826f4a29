//! ONNX model loader

use anyhow::{Context, Result};
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;
use tracing::info;

/// The loaded regression model with its resolved tensor names.
pub struct LoadedModel {
    /// Model name, used in records and logs
    pub name: String,
    /// ONNX Runtime session
    pub session: Session,
    /// Input name for the model
    pub input_name: String,
    /// Output name for the predicted value
    pub output_name: String,
}

impl LoadedModel {
    /// Deserialize the artifact from disk.
    ///
    /// There is exactly one artifact per process; it is loaded once before
    /// the interaction loop starts and reused for every prediction. A
    /// missing or corrupt file is fatal and aborts startup.
    pub fn load<P: AsRef<Path>>(path: P, name: &str, intra_threads: usize) -> Result<Self> {
        let path = path.as_ref();

        ort::init().commit()?;

        info!(model = %name, path = %path.display(), threads = intra_threads, "Loading ONNX model");

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(intra_threads)?
            .commit_from_file(path)
            .context(format!("Failed to load model from {:?}", path))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        // Regressor exports typically name the prediction "variable"
        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name.contains("variable") || o.name.contains("output"))
            .map(|o| o.name.clone())
            .unwrap_or_else(|| {
                session
                    .outputs
                    .last()
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| "variable".to_string())
            });

        info!(
            model = %name,
            input = %input_name,
            output = %output_name,
            "Model loaded successfully"
        );

        Ok(Self {
            name: name.to_string(),
            session,
            input_name,
            output_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_is_an_error() {
        let result = LoadedModel::load("models/does_not_exist.onnx", "xgboost", 1);
        assert!(result.is_err());
    }
}
