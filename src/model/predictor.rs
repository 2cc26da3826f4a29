//! Inference over the loaded HPI regressor

use crate::config::AppConfig;
use crate::features::FEATURE_COUNT;
use crate::model::loader::LoadedModel;
use anyhow::{Context, Result};
use tracing::debug;

/// Synchronous predictor over the single loaded model.
///
/// Construction loads the artifact; the same in-memory model serves every
/// prediction for the rest of the process lifetime. Inference is a plain
/// blocking call and is deterministic for a fixed model and input vector.
pub struct HpiPredictor {
    model: LoadedModel,
}

impl HpiPredictor {
    /// Load the configured artifact and build a predictor.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let model = LoadedModel::load(
            &config.model.path,
            &config.model.name,
            config.model.onnx_threads,
        )?;
        Ok(Self { model })
    }

    /// Name of the loaded model.
    pub fn model_name(&self) -> &str {
        &self.model.name
    }

    /// Run one inference over an assembled feature vector and return the
    /// predicted index value.
    pub fn predict(&mut self, features: &[f32]) -> Result<f64> {
        use ort::value::Tensor;

        anyhow::ensure!(
            features.len() == FEATURE_COUNT,
            "expected {} features, got {}",
            FEATURE_COUNT,
            features.len()
        );

        // Input shape [1, num_features]
        let shape = vec![1_i64, features.len() as i64];
        let input_tensor =
            Tensor::from_array((shape, features.to_vec())).context("Failed to create input tensor")?;

        let outputs = self
            .model
            .session
            .run(ort::inputs![&self.model.input_name => input_tensor])
            .context("Inference failed")?;

        let value = extract_prediction(&outputs, &self.model.output_name)?;

        debug!(model = %self.model.name, hpi = value, "Inference complete");

        Ok(value)
    }
}

/// Extract the predicted scalar from model outputs.
///
/// Tries the resolved output name first, then falls back to scanning all
/// outputs for a float tensor, skipping any "label" output.
fn extract_prediction(outputs: &ort::session::SessionOutputs, output_name: &str) -> Result<f64> {
    if let Some(output) = outputs.get(output_name) {
        if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
            let dims: Vec<i64> = shape.iter().copied().collect();
            return scalar_from_tensor(&dims, data);
        }
    }

    for (name, output) in outputs.iter() {
        if name.contains("label") {
            continue;
        }
        if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
            let dims: Vec<i64> = shape.iter().copied().collect();
            debug!(output = %name, "Extracted prediction from fallback output");
            return scalar_from_tensor(&dims, data);
        }
    }

    anyhow::bail!("no float tensor output named {:?} in model outputs", output_name)
}

/// Pull the single predicted value out of an output tensor.
///
/// Regressor exports produce `[1, 1]`, `[1]`, or occasionally a flat
/// tensor whose first element is the prediction for batch size 1.
fn scalar_from_tensor(dims: &[i64], data: &[f32]) -> Result<f64> {
    let first = match data.first() {
        Some(&v) => v,
        None => anyhow::bail!("model returned an empty output tensor (shape {:?})", dims),
    };

    if data.len() > 1 {
        debug!(shape = ?dims, values = data.len(), "Output tensor has multiple values, taking the first");
    }

    Ok(first as f64)
}
