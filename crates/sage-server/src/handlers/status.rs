//! Liveness and service info handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::{AppState, VERSION};

/// Prediction endpoints advertised by `GET /`
pub const ENDPOINTS: [&str; 4] = [
    "finance/classify",
    "finance/anomaly",
    "finance/forecast",
    "health/risk",
];

/// Response for `GET /`
#[derive(Serialize)]
pub struct RootResponse {
    pub service: &'static str,
    pub docs: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Response for `GET /health`
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub uptime_secs: u64,
}

/// Response for `GET /status`
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub ready: bool,
}

/// Response for `GET /version`
#[derive(Serialize)]
pub struct VersionResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// GET / - Service overview
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        service: "Sage",
        docs: "/docs",
        endpoints: ENDPOINTS.to_vec(),
    })
}

/// GET /health - Liveness probe
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: now_rfc3339(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

/// GET /status - Readiness
pub async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "Sage ML Service",
        version: VERSION,
        ready: true,
    })
}

/// GET /version - Build version
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: "Sage Finance & Health Assistant API",
        version: VERSION,
        timestamp: now_rfc3339(),
    })
}
