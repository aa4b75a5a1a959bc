//! One-shot prediction commands
//!
//! Each command builds the same input record the HTTP API accepts, runs it
//! through the predictor and prints the result as JSON.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sage_core::{
    AnomalyOutput, ExpenseInput, ExpenseOutput, ForecastInput, ForecastOutput, HealthInput,
    HealthOutput, Predictor,
};
use serde_json::Value;

use super::print_json;

pub fn cmd_classify(
    predictor: &Predictor,
    description: &str,
    amount: f64,
    user: &str,
) -> Result<ExpenseOutput> {
    let input = ExpenseInput {
        user_id: user.to_string(),
        amount,
        description: description.to_string(),
        date: None,
    };
    let output = predictor.classify_expense(&input)?;
    print_json(&output)?;
    Ok(output)
}

pub fn cmd_anomaly(predictor: &Predictor, payload: &str) -> Result<AnomalyOutput> {
    let value: Value = serde_json::from_str(payload).context("Payload is not valid JSON")?;
    let output = predictor.detect_anomaly(&value)?;
    print_json(&output)?;
    Ok(output)
}

/// Forecast `days` of expenses; a seed makes the output reproducible
pub fn cmd_forecast(
    predictor: &Predictor,
    days: i64,
    seed: Option<u64>,
    user: &str,
) -> Result<ForecastOutput> {
    let input = ForecastInput {
        user_id: user.to_string(),
        days_ahead: days,
    };
    let output = match seed {
        Some(seed) => {
            predictor.forecast_expenses_with_rng(&input, &mut StdRng::seed_from_u64(seed))?
        }
        None => predictor.forecast_expenses(&input)?,
    };
    print_json(&output)?;
    Ok(output)
}

pub fn cmd_risk(
    predictor: &Predictor,
    sleep: f64,
    steps: i64,
    water: f64,
    symptoms: Option<String>,
    user: &str,
) -> Result<HealthOutput> {
    let input = HealthInput {
        user_id: user.to_string(),
        sleep_hours: sleep,
        steps,
        water_intake: water,
        symptoms_text: symptoms,
    };
    let output = predictor.assess_risk(&input)?;
    print_json(&output)?;
    Ok(output)
}
