//! Interactive prompt flow for entering market metrics.
//!
//! Reader and writer are injected so the whole flow runs against in-memory
//! buffers in tests. An empty line accepts the shown default; unparseable
//! or out-of-range input re-prompts.

use crate::config::FormConfig;
use crate::types::prediction::PredictionRecord;
use crate::types::snapshot::MarketSnapshot;
use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Sequential numeric form over the seven user-editable fields.
pub struct PredictForm {
    config: FormConfig,
}

impl PredictForm {
    /// Create a form with the configured defaults and bounds.
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// Prompt for every field and build a snapshot.
    pub fn read_snapshot<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<MarketSnapshot> {
        let defaults = &self.config.defaults;

        let median_sale_price =
            prompt_number(input, output, "Median Sale Price", defaults.median_sale_price)?;
        let median_list_price =
            prompt_number(input, output, "Median List Price", defaults.median_list_price)?;
        let homes_sold = prompt_number(input, output, "Homes Sold", defaults.homes_sold)?;
        let new_listings = prompt_number(input, output, "New Listings", defaults.new_listings)?;
        let inventory = prompt_number(input, output, "Inventory", defaults.inventory)?;

        let year = prompt_bounded(
            input,
            output,
            "Year",
            defaults.year,
            self.config.year_min,
            self.config.year_max,
        )?;
        let month = prompt_bounded(input, output, "Month", defaults.month, 1, 12)?;

        Ok(MarketSnapshot {
            median_sale_price,
            median_list_price,
            homes_sold,
            new_listings,
            inventory,
            year,
            month,
        })
    }
}

/// Prompt for an unbounded numeric field.
///
/// Empty line accepts the default; non-finite or unparseable input
/// re-prompts. End of input also accepts the default.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: f64,
) -> Result<f64> {
    loop {
        write!(output, "{} [{}]: ", label, default)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }

        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }

        match line.parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(value),
            _ => writeln!(output, "  Enter a number.")?,
        }
    }
}

/// Prompt for a bounded integer field (step 1), re-prompting until the
/// value lies within `min..=max`.
fn prompt_bounded<R, W, T>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: T,
    min: T,
    max: T,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: Copy + PartialOrd + Display + FromStr,
{
    loop {
        write!(output, "{} [{}]: ", label, default)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }

        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }

        match line.parse::<T>() {
            Ok(value) if value >= min && value <= max => return Ok(value),
            _ => writeln!(output, "  Enter a whole number between {} and {}.", min, max)?,
        }
    }
}

/// Ask whether to run another prediction. Anything other than an
/// explicit yes, including end of input, exits the loop.
pub fn confirm_another<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "Predict again? [y/N]: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Print the session banner and the default-value caveat.
pub fn print_banner<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "╔══════════════════════════════════════════════════════╗")?;
    writeln!(output, "║        Housing Price Index (HPI) Prediction          ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════╝")?;
    writeln!(output, "Enter values for the key features below.")?;
    writeln!(
        output,
        "All other features are filled with default values of zero; lag and"
    )?;
    writeln!(
        output,
        "rolling features are not derived from your inputs, so predictions"
    )?;
    writeln!(output, "are approximate.")?;
    writeln!(output)?;
    Ok(())
}

/// Render a successful prediction to two decimal places.
pub fn render_prediction<W: Write>(output: &mut W, record: &PredictionRecord) -> Result<()> {
    writeln!(output, "Predicted HPI: {}", record.formatted_hpi())?;
    Ok(())
}

/// Render a prediction failure. The previous result is never re-shown.
pub fn render_error<W: Write>(output: &mut W, error: &anyhow::Error) -> Result<()> {
    writeln!(output, "Error during prediction: {:#}", error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use std::io::Cursor;

    fn form() -> PredictForm {
        PredictForm::new(FormConfig {
            defaults: Default::default(),
            year_min: 2000,
            year_max: 2100,
        })
    }

    #[test]
    fn test_empty_lines_accept_defaults() {
        let mut input = Cursor::new("\n\n\n\n\n\n\n");
        let mut output = Vec::new();

        let snapshot = form().read_snapshot(&mut input, &mut output).unwrap();

        assert_eq!(snapshot.median_sale_price, 300000.0);
        assert_eq!(snapshot.median_list_price, 320000.0);
        assert_eq!(snapshot.homes_sold, 100.0);
        assert_eq!(snapshot.new_listings, 50.0);
        assert_eq!(snapshot.inventory, 200.0);
        assert_eq!(snapshot.year, 2025);
        assert_eq!(snapshot.month, 11);
    }

    #[test]
    fn test_entered_values_override_defaults() {
        let mut input = Cursor::new("250000\n270000\n80\n40\n150\n2024\n6\n");
        let mut output = Vec::new();

        let snapshot = form().read_snapshot(&mut input, &mut output).unwrap();

        assert_eq!(snapshot.median_sale_price, 250000.0);
        assert_eq!(snapshot.median_list_price, 270000.0);
        assert_eq!(snapshot.homes_sold, 80.0);
        assert_eq!(snapshot.new_listings, 40.0);
        assert_eq!(snapshot.inventory, 150.0);
        assert_eq!(snapshot.year, 2024);
        assert_eq!(snapshot.month, 6);
    }

    #[test]
    fn test_garbage_reprompts_then_accepts() {
        let mut input = Cursor::new("not-a-number\n310000\n\n\n\n\n\n\n");
        let mut output = Vec::new();

        let snapshot = form().read_snapshot(&mut input, &mut output).unwrap();

        assert_eq!(snapshot.median_sale_price, 310000.0);
        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("Enter a number."));
    }

    #[test]
    fn test_year_and_month_bounds_reprompt() {
        // year 1980 rejected, then 2010; month 13 rejected, then 12
        let mut input = Cursor::new("\n\n\n\n\n1980\n2010\n13\n12\n");
        let mut output = Vec::new();

        let snapshot = form().read_snapshot(&mut input, &mut output).unwrap();

        assert_eq!(snapshot.year, 2010);
        assert_eq!(snapshot.month, 12);
        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("between 2000 and 2100"));
        assert!(rendered.contains("between 1 and 12"));
    }

    #[test]
    fn test_end_of_input_accepts_defaults() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let snapshot = form().read_snapshot(&mut input, &mut output).unwrap();
        assert_eq!(snapshot.year, 2025);
    }

    #[test]
    fn test_confirm_another() {
        let mut output = Vec::new();

        let mut input = Cursor::new("y\n");
        assert!(confirm_another(&mut input, &mut output).unwrap());

        let mut input = Cursor::new("yes\n");
        assert!(confirm_another(&mut input, &mut output).unwrap());

        let mut input = Cursor::new("n\n");
        assert!(!confirm_another(&mut input, &mut output).unwrap());

        let mut input = Cursor::new("\n");
        assert!(!confirm_another(&mut input, &mut output).unwrap());

        // end of input
        let mut input = Cursor::new("");
        assert!(!confirm_another(&mut input, &mut output).unwrap());
    }

    #[test]
    fn test_render_prediction_two_decimals() {
        let snapshot = MarketSnapshot {
            median_sale_price: 300000.0,
            median_list_price: 320000.0,
            homes_sold: 100.0,
            new_listings: 50.0,
            inventory: 200.0,
            year: 2025,
            month: 11,
        };
        let record = PredictionRecord::new("xgboost", &snapshot, 287.416);

        let mut output = Vec::new();
        render_prediction(&mut output, &record).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Predicted HPI: 287.42\n");
    }

    #[test]
    fn test_render_error_mentions_failure() {
        let mut output = Vec::new();
        render_error(&mut output, &anyhow::anyhow!("shape mismatch")).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.starts_with("Error during prediction:"));
        assert!(rendered.contains("shape mismatch"));
    }
}
