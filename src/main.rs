//! HPI Prediction Console - Main Entry Point
//!
//! Loads the trained regressor once, then serves predictions over an
//! interactive prompt loop until the user exits.

use anyhow::Result;
use hpi_predictor::{
    config::AppConfig, features::FeatureAssembler, form, form::PredictForm,
    metrics::SessionMetrics, model::predictor::HpiPredictor, types::prediction::PredictionRecord,
};
use std::io;
use std::time::Instant;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Configuration first so logging can honor its settings
    let config = AppConfig::load()?;
    init_logging(&config);

    info!("Starting HPI prediction console");
    info!(model = %config.model.name, path = %config.model.path, "Configuration loaded");

    let assembler = FeatureAssembler::new();
    info!(features = assembler.feature_count(), "Feature assembler initialized");

    // Model-load failure is fatal; nothing useful can run without it
    let mut predictor = HpiPredictor::new(&config)?;
    warn!("Lag and rolling features default to zero; predictions are approximate");

    let metrics = SessionMetrics::new();
    let predict_form = PredictForm::new(config.form.clone());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    form::print_banner(&mut output)?;

    loop {
        let snapshot = predict_form.read_snapshot(&mut input, &mut output)?;
        let features = assembler.assemble(&snapshot);

        let started = Instant::now();
        match predictor.predict(&features) {
            Ok(hpi) => {
                let elapsed = started.elapsed();
                let record = PredictionRecord::new(predictor.model_name(), &snapshot, hpi);

                metrics.record_prediction(elapsed, hpi);
                info!(
                    prediction_id = %record.prediction_id,
                    period = %snapshot.period(),
                    hpi = record.predicted_hpi,
                    elapsed_us = elapsed.as_micros() as u64,
                    "Prediction served"
                );

                form::render_prediction(&mut output, &record)?;
            }
            Err(e) => {
                metrics.record_failure();
                error!(error = %e, period = %snapshot.period(), "Prediction failed");
                form::render_error(&mut output, &e)?;
            }
        }

        if !form::confirm_another(&mut input, &mut output)? {
            break;
        }
    }

    info!("Session ending");
    metrics.print_summary();

    Ok(())
}

/// Initialize tracing. `RUST_LOG` wins when set; otherwise the configured
/// level applies to this crate. Logs go to stderr so they never interleave
/// with the form.
fn init_logging(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("hpi_predictor={}", config.logging.level))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
