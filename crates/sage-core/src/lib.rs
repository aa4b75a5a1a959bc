//! Sage Core Library
//!
//! Shared functionality for the Sage finance & health prediction service:
//! - Request/response models for every prediction endpoint
//! - Boundary validation of incoming records
//! - Placeholder predictors (classification, anomaly, forecast, health risk)
//! - Predictor configuration with embedded defaults and file overrides

pub mod config;
pub mod error;
pub mod models;
pub mod predict;
pub mod validation;

pub use config::{
    AnomalyConfig, ClassifierConfig, ForecastConfig, PredictorConfig, RiskConfig,
};
pub use error::{Error, Result};
pub use models::{
    AnomalyOutput, ExpenseInput, ExpenseOutput, ForecastInput, ForecastOutput, HealthInput,
    HealthOutput, RiskLevel,
};
pub use predict::Predictor;
pub use validation::{validate_input, FieldError, WireFields};
