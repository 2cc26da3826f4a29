//! HPI Prediction Console Library
//!
//! An interactive form over a pre-trained Housing Price Index regressor:
//! collects a handful of market metrics, assembles the model's fixed
//! 27-feature input vector, and runs a single synchronous inference.

pub mod config;
pub mod features;
pub mod form;
pub mod metrics;
pub mod model;
pub mod types;

pub use config::AppConfig;
pub use features::FeatureAssembler;
pub use form::PredictForm;
pub use metrics::SessionMetrics;
pub use model::predictor::HpiPredictor;
pub use types::{prediction::PredictionRecord, snapshot::MarketSnapshot};
