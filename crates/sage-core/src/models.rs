//! Request and response records for the prediction endpoints
//!
//! Field names on the wire follow the service's public JSON contract
//! (`userId`, `sleepHours`, `days_ahead`, ...), so some fields carry an
//! explicit serde rename.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::WireFields;

/// Default forecast horizon in days
pub const DEFAULT_FORECAST_DAYS: i64 = 30;

/// Smallest accepted forecast horizon
pub const MIN_FORECAST_DAYS: i64 = 7;

/// Largest accepted forecast horizon
pub const MAX_FORECAST_DAYS: i64 = 365;

// ========== Finance ==========

/// A single expense to categorize
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExpenseInput {
    #[serde(rename = "userId")]
    pub user_id: String,

    #[validate(
        range(exclusive_min = 0.0, message = "must be greater than 0"),
        custom(function = "crate::validation::finite", message = "must be a finite number")
    )]
    pub amount: f64,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,

    /// Optional transaction date, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl WireFields for ExpenseInput {
    const RENAMED: &'static [(&'static str, &'static str)] = &[("user_id", "userId")];
}

/// Result of expense categorization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseOutput {
    pub predicted_category: String,
    pub confidence: f64,
    #[serde(default)]
    pub is_anomalous: bool,
}

/// Result of fraud/anomaly screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyOutput {
    pub is_anomalous: bool,
    pub score: f64,
}

/// Forecast request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForecastInput {
    #[serde(rename = "userId")]
    pub user_id: String,

    /// Number of future days to project
    #[serde(default = "default_days_ahead")]
    #[validate(range(
        min = 7,
        max = 365,
        message = "must be between 7 and 365 days"
    ))]
    pub days_ahead: i64,
}

impl WireFields for ForecastInput {
    const RENAMED: &'static [(&'static str, &'static str)] = &[("user_id", "userId")];
}

fn default_days_ahead() -> i64 {
    DEFAULT_FORECAST_DAYS
}

/// Forecasted daily expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOutput {
    pub forecast_values: Vec<f64>,
    pub trend: String,
    pub average_daily: f64,
}

// ========== Health ==========

/// Daily health metrics for risk assessment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HealthInput {
    #[serde(rename = "userId")]
    pub user_id: String,

    #[serde(rename = "sleepHours")]
    #[validate(
        range(min = 0.0, max = 24.0, message = "must be between 0 and 24 hours"),
        custom(function = "crate::validation::finite", message = "must be a finite number")
    )]
    pub sleep_hours: f64,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub steps: i64,

    /// Liters of water
    #[serde(rename = "waterIntake")]
    #[validate(
        range(min = 0.0, message = "must not be negative"),
        custom(function = "crate::validation::finite", message = "must be a finite number")
    )]
    pub water_intake: f64,

    /// Free-text symptoms; accepted but not used for scoring
    #[serde(
        rename = "symptomsText",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub symptoms_text: Option<String>,
}

impl WireFields for HealthInput {
    const RENAMED: &'static [(&'static str, &'static str)] = &[
        ("user_id", "userId"),
        ("sleep_hours", "sleepHours"),
        ("water_intake", "waterIntake"),
    ];
}

/// Bucketed health risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Health risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthOutput {
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}
