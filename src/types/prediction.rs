//! Prediction result records

use crate::types::snapshot::MarketSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one predict action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Unique identifier, correlates console output with log lines
    pub prediction_id: String,

    /// Name of the model that produced the value
    pub model: String,

    /// Period the prediction was computed for
    pub year: i32,
    pub month: u32,

    /// Predicted Housing Price Index
    pub predicted_hpi: f64,

    /// When the prediction was made
    pub timestamp: DateTime<Utc>,
}

impl PredictionRecord {
    /// Create a record for a freshly computed prediction.
    pub fn new(model: &str, snapshot: &MarketSnapshot, predicted_hpi: f64) -> Self {
        Self {
            prediction_id: uuid::Uuid::new_v4().to_string(),
            model: model.to_string(),
            year: snapshot.year,
            month: snapshot.month,
            predicted_hpi,
            timestamp: Utc::now(),
        }
    }

    /// The index value rendered to two decimal places, as displayed.
    pub fn formatted_hpi(&self) -> String {
        format!("{:.2}", self.predicted_hpi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            median_sale_price: 300000.0,
            median_list_price: 320000.0,
            homes_sold: 100.0,
            new_listings: 50.0,
            inventory: 200.0,
            year: 2025,
            month: 11,
        }
    }

    #[test]
    fn test_record_serialization() {
        let record = PredictionRecord::new("xgboost", &snapshot(), 287.416);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: PredictionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record.prediction_id, deserialized.prediction_id);
        assert_eq!(record.predicted_hpi, deserialized.predicted_hpi);
        assert_eq!(record.year, deserialized.year);
    }

    #[test]
    fn test_formatted_hpi_two_decimals() {
        let record = PredictionRecord::new("xgboost", &snapshot(), 287.416);
        assert_eq!(record.formatted_hpi(), "287.42");

        let record = PredictionRecord::new("xgboost", &snapshot(), 300.0);
        assert_eq!(record.formatted_hpi(), "300.00");
    }
}
