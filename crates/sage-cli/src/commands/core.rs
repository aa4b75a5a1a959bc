//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `load_predictor` - Build the predictor from the resolved config
//! - `print_json` - Pretty-print a command result
//! - `cmd_config` - Show the effective predictor configuration

use std::path::Path;

use anyhow::{Context, Result};
use sage_core::{config::default_config_path, Predictor, PredictorConfig};
use serde::Serialize;
use tracing::debug;

/// Load predictor settings from `--config`, the data-dir override, or built-ins
pub fn load_predictor(config_path: Option<&Path>) -> Result<Predictor> {
    let config = PredictorConfig::load(config_path).with_context(|| match config_path {
        Some(path) => format!("Failed to load predictor config from {}", path.display()),
        None => "Failed to load predictor config".to_string(),
    })?;
    debug!(categories = config.classifier.categories.len(), "Predictor config loaded");
    Ok(Predictor::with_config(config))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub fn cmd_config(predictor: &Predictor) -> Result<()> {
    match default_config_path() {
        Some(path) if path.exists() => println!("📄 Override file: {}", path.display()),
        Some(path) => println!("📄 Override file: {} (not present)", path.display()),
        None => println!("📄 Override file: unavailable (no data directory)"),
    }
    println!();
    print_json(predictor.config())
}
