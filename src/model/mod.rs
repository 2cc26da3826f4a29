//! Model loading and inference

pub mod loader;
pub mod predictor;

pub use loader::LoadedModel;
pub use predictor::HpiPredictor;
