//! Placeholder predictors
//!
//! [`Predictor`] bundles the four prediction functions with their
//! configuration. Every entry point validates its input first, so invalid
//! records never reach the scoring code.

pub mod anomaly;
pub mod classify;
pub mod forecast;
pub mod risk;

use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::config::PredictorConfig;
use crate::error::{Error, Result};
use crate::models::{
    AnomalyOutput, ExpenseInput, ExpenseOutput, ForecastInput, ForecastOutput, HealthInput,
    HealthOutput,
};
use crate::validation::validate_input;

/// Stateless prediction facade shared by the server and CLI
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    config: PredictorConfig,
}

impl Predictor {
    /// Predictor with built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Predict the category of an expense
    pub fn classify_expense(&self, input: &ExpenseInput) -> Result<ExpenseOutput> {
        validate_input(input)?;
        let output = classify::classify(&self.config.classifier, &input.description)?;
        debug!(
            user = %input.user_id,
            category = %output.predicted_category,
            "Classified expense"
        );
        Ok(output)
    }

    /// Screen an arbitrary JSON object for fraud
    pub fn detect_anomaly(&self, payload: &Value) -> Result<AnomalyOutput> {
        anomaly::detect(&self.config.anomaly, payload)
    }

    /// Forecast daily expenses using the thread-local RNG
    pub fn forecast_expenses(&self, input: &ForecastInput) -> Result<ForecastOutput> {
        self.forecast_expenses_with_rng(input, &mut rand::thread_rng())
    }

    /// Forecast daily expenses with a caller-supplied RNG
    pub fn forecast_expenses_with_rng<R: Rng + ?Sized>(
        &self,
        input: &ForecastInput,
        rng: &mut R,
    ) -> Result<ForecastOutput> {
        validate_input(input)?;
        let days = usize::try_from(input.days_ahead).map_err(|_| {
            Error::invalid_field("days_ahead", "must be between 7 and 365 days")
        })?;
        let output = forecast::forecast(&self.config.forecast, days, rng)?;
        debug!(
            user = %input.user_id,
            days,
            average = output.average_daily,
            "Forecast expenses"
        );
        Ok(output)
    }

    /// Score health risk from daily metrics
    pub fn assess_risk(&self, input: &HealthInput) -> Result<HealthOutput> {
        validate_input(input)?;
        let output = risk::assess(
            &self.config.risk,
            input.sleep_hours,
            input.steps,
            input.water_intake,
        );
        debug!(
            user = %input.user_id,
            level = %output.risk_level,
            score = output.risk_score,
            "Assessed health risk"
        );
        Ok(output)
    }
}
