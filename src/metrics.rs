//! Session statistics for the prediction console.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tracing::info;

/// Counters and distributions for one interactive session.
pub struct SessionMetrics {
    /// Predictions served
    pub predictions: AtomicU64,
    /// Predict actions that failed
    pub failures: AtomicU64,
    /// Inference latencies (in microseconds)
    latencies_us: RwLock<Vec<u64>>,
    /// Predicted index values
    hpi_values: RwLock<Vec<f64>>,
}

impl SessionMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            predictions: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            latencies_us: RwLock::new(Vec::new()),
            hpi_values: RwLock::new(Vec::new()),
        }
    }

    /// Record a served prediction
    pub fn record_prediction(&self, latency: Duration, hpi: f64) {
        self.predictions.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut latencies) = self.latencies_us.write() {
            latencies.push(latency.as_micros() as u64);
        }
        if let Ok(mut values) = self.hpi_values.write() {
            values.push(hpi);
        }
    }

    /// Record a failed predict action
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get latency statistics
    pub fn latency_stats(&self) -> LatencyStats {
        let latencies = match self.latencies_us.read() {
            Ok(latencies) => latencies,
            Err(_) => return LatencyStats::default(),
        };
        if latencies.is_empty() {
            return LatencyStats::default();
        }

        let mut sorted: Vec<u64> = latencies.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        LatencyStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Get the spread of predicted values, if any predictions were served
    pub fn hpi_stats(&self) -> Option<HpiStats> {
        let values = self.hpi_values.read().ok()?;
        if values.is_empty() {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Some(HpiStats { min, max, mean })
    }

    /// Log the end-of-session summary
    pub fn print_summary(&self) {
        let served = self.predictions.load(Ordering::Relaxed);
        let failed = self.failures.load(Ordering::Relaxed);
        let latency = self.latency_stats();

        info!("╔════════════════════════════════════════════╗");
        info!("║        HPI PREDICTION SESSION SUMMARY      ║");
        info!("╠════════════════════════════════════════════╣");
        info!("║ Predictions served: {:>6}                 ║", served);
        info!("║ Failed predictions: {:>6}                 ║", failed);
        info!(
            "║ Latency (μs): mean={:>6} p50={:>6} max={:>6}",
            latency.mean_us, latency.p50_us, latency.max_us
        );
        if let Some(hpi) = self.hpi_stats() {
            info!(
                "║ Predicted HPI: min={:.2} max={:.2} mean={:.2}",
                hpi.min, hpi.max, hpi.mean
            );
        }
        info!("╚════════════════════════════════════════════╝");
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Inference latency statistics
#[derive(Debug, Default)]
pub struct LatencyStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub max_us: u64,
}

/// Spread of predicted index values over the session
#[derive(Debug)]
pub struct HpiStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording() {
        let metrics = SessionMetrics::new();

        metrics.record_prediction(Duration::from_micros(100), 287.4);
        metrics.record_prediction(Duration::from_micros(300), 291.0);
        metrics.record_failure();

        assert_eq!(metrics.predictions.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.failures.load(Ordering::Relaxed), 1);

        let latency = metrics.latency_stats();
        assert_eq!(latency.count, 2);
        assert_eq!(latency.mean_us, 200);
        assert_eq!(latency.max_us, 300);
    }

    #[test]
    fn test_hpi_stats() {
        let metrics = SessionMetrics::new();
        assert!(metrics.hpi_stats().is_none());

        metrics.record_prediction(Duration::from_micros(100), 280.0);
        metrics.record_prediction(Duration::from_micros(100), 300.0);

        let stats = metrics.hpi_stats().unwrap();
        assert_eq!(stats.min, 280.0);
        assert_eq!(stats.max, 300.0);
        assert_eq!(stats.mean, 290.0);
    }
}
