//! Configuration management for the prediction console

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub form: FormConfig,
    pub logging: LoggingConfig,
}

/// Model artifact configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the ONNX export of the trained regressor
    #[serde(default = "default_model_path")]
    pub path: String,
    /// Model name used in records and logs
    #[serde(default = "default_model_name")]
    pub name: String,
    /// Number of threads for ONNX inference (default: 1)
    #[serde(default = "default_onnx_threads")]
    pub onnx_threads: usize,
}

fn default_model_path() -> String {
    "models/hpi_xgb.onnx".to_string()
}

fn default_model_name() -> String {
    "xgboost".to_string()
}

fn default_onnx_threads() -> usize {
    1
}

/// Interactive form configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Values offered when the user accepts a prompt with an empty line
    #[serde(default)]
    pub defaults: FormDefaults,
    /// Lower bound for the year field
    #[serde(default = "default_year_min")]
    pub year_min: i32,
    /// Upper bound for the year field
    #[serde(default = "default_year_max")]
    pub year_max: i32,
}

fn default_year_min() -> i32 {
    2000
}

fn default_year_max() -> i32 {
    2100
}

/// Per-field form defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub median_sale_price: f64,
    pub median_list_price: f64,
    pub homes_sold: f64,
    pub new_listings: f64,
    pub inventory: f64,
    pub year: i32,
    pub month: u32,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            median_sale_price: 300000.0,
            median_list_price: 320000.0,
            homes_sold: 100.0,
            new_listings: 50.0,
            inventory: 200.0,
            year: 2025,
            month: 11,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                path: default_model_path(),
                name: default_model_name(),
                onnx_threads: default_onnx_threads(),
            },
            form: FormConfig {
                defaults: FormDefaults::default(),
                year_min: default_year_min(),
                year_max: default_year_max(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
