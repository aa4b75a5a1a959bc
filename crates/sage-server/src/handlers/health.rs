//! Health risk handler

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use tracing::info;

use super::parse_body;
use crate::{AppError, AppState};
use sage_core::{HealthInput, HealthOutput};

/// POST /health/risk - Score health risk from daily metrics
pub async fn assess_risk(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<HealthOutput>, AppError> {
    let input: HealthInput = parse_body(body)?;
    let output = state.predictor.assess_risk(&input)?;

    info!(
        user = %input.user_id,
        level = %output.risk_level,
        "Health risk assessed"
    );

    Ok(Json(output))
}
