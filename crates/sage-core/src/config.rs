//! Predictor configuration
//!
//! Every constant the predictors use (category list, confidence, forecast
//! distribution, risk thresholds) comes from here.
//!
//! ## Configuration Resolution
//!
//! 1. Explicit path (`--config` / `SAGE_CONFIG`), which must exist
//! 2. Override in data dir (~/.local/share/sage/config/predictors.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/predictors.toml");

/// Expense classifier settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierConfig {
    /// Category labels, indexed by description hash
    pub categories: Vec<String>,
    /// Confidence reported with every classification
    pub confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            categories: ["food", "transport", "health", "entertainment", "utilities"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            confidence: 0.85,
        }
    }
}

/// Anomaly detector settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyConfig {
    pub score: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self { score: 0.2 }
    }
}

/// Forecast distribution settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastConfig {
    /// Mean daily expense
    pub mean: f64,
    /// Standard deviation of the daily noise
    pub std_dev: f64,
    /// Trend label attached to every forecast
    pub trend: String,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            mean: 100.0,
            std_dev: 20.0,
            trend: "stable".to_string(),
        }
    }
}

/// Health risk scoring thresholds and weights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskConfig {
    pub min_sleep_hours: f64,
    pub min_steps: i64,
    pub min_water_liters: f64,
    pub sleep_weight: f64,
    pub steps_weight: f64,
    pub water_weight: f64,
    /// Scores strictly above this are high risk
    pub high_above: f64,
    /// Scores strictly above this (and not high) are medium risk
    pub medium_above: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            min_sleep_hours: 6.0,
            min_steps: 5000,
            min_water_liters: 2.0,
            sleep_weight: 0.25,
            steps_weight: 0.25,
            water_weight: 0.15,
            high_above: 0.6,
            medium_above: 0.3,
        }
    }
}

/// Complete predictor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictorConfig {
    pub classifier: ClassifierConfig,
    pub anomaly: AnomalyConfig,
    pub forecast: ForecastConfig,
    pub risk: RiskConfig,
}

impl PredictorConfig {
    /// Load config, honoring an explicit override path if given
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) => {
                debug!(path = %path.display(), "Loading predictor config");
                fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => {
                    debug!(path = %path.display(), "Loading predictor config override");
                    fs::read_to_string(&path).map_err(|e| {
                        Error::Config(format!("Failed to read {}: {}", path.display(), e))
                    })?
                }
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// The embedded defaults
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }

    /// Reject settings the predictors cannot work with
    pub fn check(&self) -> Result<()> {
        if self.classifier.categories.is_empty() {
            return Err(Error::Config(
                "classifier.categories must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.classifier.confidence) {
            return Err(Error::Config(format!(
                "classifier.confidence must be within [0, 1], got {}",
                self.classifier.confidence
            )));
        }
        if !self.forecast.mean.is_finite() {
            return Err(Error::Config("forecast.mean must be finite".to_string()));
        }
        if !self.forecast.std_dev.is_finite() || self.forecast.std_dev < 0.0 {
            return Err(Error::Config(format!(
                "forecast.std_dev must be a non-negative number, got {}",
                self.forecast.std_dev
            )));
        }
        if self.risk.medium_above > self.risk.high_above {
            return Err(Error::Config(
                "risk.medium_above must not exceed risk.high_above".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("sage").join("config").join("predictors.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    classifier: Option<RawClassifier>,
    anomaly: Option<RawAnomaly>,
    forecast: Option<RawForecast>,
    risk: Option<RawRisk>,
}

#[derive(Debug, Deserialize)]
struct RawClassifier {
    categories: Option<Vec<String>>,
    confidence: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawAnomaly {
    score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    mean: Option<f64>,
    std_dev: Option<f64>,
    trend: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRisk {
    min_sleep_hours: Option<f64>,
    min_steps: Option<i64>,
    min_water_liters: Option<f64>,
    sleep_weight: Option<f64>,
    steps_weight: Option<f64>,
    water_weight: Option<f64>,
    high_above: Option<f64>,
    medium_above: Option<f64>,
}

/// Parse config from TOML content, layering it over the built-in defaults
pub fn parse_config(content: &str) -> Result<PredictorConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = PredictorConfig::default();

    if let Some(classifier) = raw.classifier {
        if let Some(categories) = classifier.categories {
            config.classifier.categories = categories;
        }
        if let Some(confidence) = classifier.confidence {
            config.classifier.confidence = confidence;
        }
    }

    if let Some(anomaly) = raw.anomaly {
        if let Some(score) = anomaly.score {
            config.anomaly.score = score;
        }
    }

    if let Some(forecast) = raw.forecast {
        if let Some(mean) = forecast.mean {
            config.forecast.mean = mean;
        }
        if let Some(std_dev) = forecast.std_dev {
            config.forecast.std_dev = std_dev;
        }
        if let Some(trend) = forecast.trend {
            config.forecast.trend = trend;
        }
    }

    if let Some(risk) = raw.risk {
        let r = &mut config.risk;
        if let Some(v) = risk.min_sleep_hours {
            r.min_sleep_hours = v;
        }
        if let Some(v) = risk.min_steps {
            r.min_steps = v;
        }
        if let Some(v) = risk.min_water_liters {
            r.min_water_liters = v;
        }
        if let Some(v) = risk.sleep_weight {
            r.sleep_weight = v;
        }
        if let Some(v) = risk.steps_weight {
            r.steps_weight = v;
        }
        if let Some(v) = risk.water_weight {
            r.water_weight = v;
        }
        if let Some(v) = risk.high_above {
            r.high_above = v;
        }
        if let Some(v) = risk.medium_above {
            r.medium_above = v;
        }
    }

    config.check()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = PredictorConfig::embedded().unwrap();
        assert_eq!(config, PredictorConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
            [forecast]
            mean = 250.0
            "#,
        )
        .unwrap();

        assert_eq!(config.forecast.mean, 250.0);
        assert_eq!(config.forecast.std_dev, 20.0);
        assert_eq!(config.classifier.categories.len(), 5);
        assert_eq!(config.risk.min_steps, 5000);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse_config(
            r#"
            [classifier]
            confidence = 0.9
            model = "ignored"

            [extras]
            anything = true
            "#,
        )
        .unwrap();
        assert_eq!(config.classifier.confidence, 0.9);
    }

    #[test]
    fn test_empty_categories_rejected() {
        let err = parse_config("[classifier]\ncategories = []\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_negative_std_dev_rejected() {
        let err = parse_config("[forecast]\nstd_dev = -1.0\n").unwrap_err();
        assert!(err.to_string().contains("std_dev"));
    }

    #[test]
    fn test_inverted_risk_thresholds_rejected() {
        let err = parse_config("[risk]\nmedium_above = 0.9\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("[forecast\nmean = ").unwrap_err();
        assert!(err.to_string().contains("Invalid config TOML"));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[anomaly]\nscore = 0.75").unwrap();

        let config = PredictorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.anomaly.score, 0.75);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(PredictorConfig::load(Some(&missing)).is_err());
    }
}
