//! Fraud/anomaly screening
//!
//! Accepts any JSON object and reports the configured baseline score.
//! Nothing is ever flagged.

use serde_json::Value;
use tracing::debug;

use crate::config::AnomalyConfig;
use crate::error::{Error, Result};
use crate::models::AnomalyOutput;

pub fn detect(config: &AnomalyConfig, payload: &Value) -> Result<AnomalyOutput> {
    let fields = payload
        .as_object()
        .ok_or_else(|| Error::invalid_field("body", "must be a JSON object"))?;

    debug!(fields = fields.len(), "Screening payload for anomalies");

    Ok(AnomalyOutput {
        is_anomalous: false,
        score: config.score,
    })
}
