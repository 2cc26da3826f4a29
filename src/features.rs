//! Feature vector assembly for HPI model inference.
//!
//! The trained regressor expects a fixed 27-feature input. Only seven of
//! those features come from the form; the rest (day-on-market, quarter,
//! lagged HPI/price/inventory, rolling averages, the HPI first difference)
//! were computed by the training pipeline from historical series that are
//! not available here, so they are filled with a default value of zero.
//! The vector length and positional ordering must match training exactly;
//! a mismatch cannot be detected at runtime and yields wrong predictions.

use crate::types::snapshot::MarketSnapshot;

/// Length of the model input vector.
pub const FEATURE_COUNT: usize = 27;

/// Feature names in the exact order used during training.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "median_sale_price",
    "median_list_price",
    "homes_sold",
    "new_listings",
    "inventory",
    "median_dom",
    "price",
    "year",
    "month",
    "quarter",
    "hpi_lag_1",
    "median_sale_price_lag_1",
    "inventory_lag_1",
    "hpi_lag_2",
    "median_sale_price_lag_2",
    "inventory_lag_2",
    "hpi_lag_3",
    "median_sale_price_lag_3",
    "inventory_lag_3",
    "hpi_lag_6",
    "median_sale_price_lag_6",
    "inventory_lag_6",
    "hpi_lag_12",
    "median_sale_price_lag_12",
    "inventory_lag_12",
    "sale_price_roll3",
    "hpi_diff_1",
];

/// Builds model input vectors from a [`MarketSnapshot`].
///
/// Zero is a placeholder for the lag and rolling features, not a neutral
/// value; predictions made this way are approximate.
pub struct FeatureAssembler;

impl FeatureAssembler {
    /// Create a new feature assembler.
    pub fn new() -> Self {
        Self
    }

    /// Assemble the model input vector for one snapshot.
    ///
    /// Every position starts at zero; the seven user-supplied values are
    /// written to their named positions.
    pub fn assemble(&self, snapshot: &MarketSnapshot) -> Vec<f32> {
        FEATURE_NAMES
            .iter()
            .map(|&name| match name {
                "median_sale_price" => snapshot.median_sale_price as f32,
                "median_list_price" => snapshot.median_list_price as f32,
                "homes_sold" => snapshot.homes_sold as f32,
                "new_listings" => snapshot.new_listings as f32,
                "inventory" => snapshot.inventory as f32,
                "year" => snapshot.year as f32,
                "month" => snapshot.month as f32,
                _ => 0.0,
            })
            .collect()
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Position of a named feature in the input vector.
    pub fn index_of(name: &str) -> Option<usize> {
        FEATURE_NAMES.iter().position(|&n| n == name)
    }
}

impl Default for FeatureAssembler {
    fn default() -> Self {
        Self::new()
    }
}
