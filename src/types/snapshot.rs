//! Market metrics entered by the user for a single prediction

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One month of housing-market metrics, as entered through the form.
///
/// These are the only model features the user controls; every other
/// feature position is filled with a default value at assembly time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Median sale price for the period
    pub median_sale_price: f64,

    /// Median list price for the period
    pub median_list_price: f64,

    /// Number of homes sold
    pub homes_sold: f64,

    /// Number of new listings
    pub new_listings: f64,

    /// Active inventory
    pub inventory: f64,

    /// Calendar year of the period
    pub year: i32,

    /// Calendar month of the period (1-12)
    pub month: u32,
}

impl MarketSnapshot {
    /// Check the bounded fields. Year bounds come from configuration,
    /// month is always 1-12. The five market metrics are unbounded.
    pub fn validate(&self, year_min: i32, year_max: i32) -> Result<()> {
        anyhow::ensure!(
            (year_min..=year_max).contains(&self.year),
            "year {} outside {}..={}",
            self.year,
            year_min,
            year_max
        );
        anyhow::ensure!(
            (1..=12).contains(&self.month),
            "month {} outside 1..=12",
            self.month
        );
        Ok(())
    }

    /// The period as `YYYY-MM`, used in logs and prediction records.
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
