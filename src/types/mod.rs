//! Type definitions for the prediction console

pub mod prediction;
pub mod snapshot;

pub use prediction::PredictionRecord;
pub use snapshot::MarketSnapshot;
