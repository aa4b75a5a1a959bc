//! Finance prediction handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use super::parse_body;
use crate::{AppError, AppState};
use sage_core::{AnomalyOutput, ExpenseInput, ExpenseOutput, ForecastInput, ForecastOutput};

/// POST /finance/classify - Predict an expense category
pub async fn classify_expense(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ExpenseOutput>, AppError> {
    let input: ExpenseInput = parse_body(body)?;
    let output = state.predictor.classify_expense(&input)?;

    info!(
        user = %input.user_id,
        category = %output.predicted_category,
        "Expense classified"
    );

    Ok(Json(output))
}

/// POST /finance/anomaly - Screen a transaction for fraud
///
/// Accepts any JSON object.
pub async fn detect_anomaly(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnomalyOutput>, AppError> {
    let payload: Value = parse_body(body)?;
    Ok(Json(state.predictor.detect_anomaly(&payload)?))
}

/// POST /finance/forecast - Forecast daily expenses
pub async fn forecast_expenses(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ForecastOutput>, AppError> {
    let input: ForecastInput = parse_body(body)?;
    let output = state.predictor.forecast_expenses(&input)?;

    info!(
        user = %input.user_id,
        days = input.days_ahead,
        "Expenses forecast"
    );

    Ok(Json(output))
}
