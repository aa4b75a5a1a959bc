//! Sage Web Server
//!
//! Axum-based REST API for the Sage finance & health prediction service.
//!
//! - Prediction endpoints under `/finance` and `/health`
//! - Liveness/info endpoints (`/`, `/health`, `/status`, `/version`)
//! - Request IDs, security headers and request tracing on every response
//! - Field-level validation errors, sanitized JSON error bodies

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::BytesRejection, DefaultBodyLimit, OriginalUri},
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use sage_core::{FieldError, Predictor};

mod handlers;

/// Maximum request body size (10 MB)
pub const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Crate version reported by `/status` and `/version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins (empty = any origin)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: vec![],
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated list of CORS origins
///
/// Entries that are not valid header values are skipped with a warning.
pub fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let ok = HeaderValue::from_str(s).is_ok();
            if !ok {
                warn!(origin = *s, "Ignoring invalid CORS origin");
            }
            ok
        })
        .map(|s| s.to_string())
        .collect()
}

/// Shared application state
pub struct AppState {
    pub predictor: Predictor,
    /// Server start time, for uptime reporting
    pub started_at: Instant,
}

/// Create the application router
pub fn create_router(predictor: Predictor, config: ServerConfig) -> Router {
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    };

    let state = Arc::new(AppState {
        predictor,
        started_at: Instant::now(),
    });

    let finance_routes = Router::new()
        .route("/classify", post(handlers::classify_expense))
        .route("/anomaly", post(handlers::detect_anomaly))
        .route("/forecast", post(handlers::forecast_expenses))
        .method_not_allowed_fallback(handler_405);

    Router::new()
        // Liveness / info
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::service_status))
        .route("/version", get(handlers::version))
        // Predictions
        .nest("/finance", finance_routes)
        .route("/health/risk", post(handlers::assess_risk))
        .method_not_allowed_fallback(handler_405)
        .fallback(handler_404)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        ))
        // Request IDs: set one if the client didn't, then echo it back
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Start the server and run until Ctrl+C / SIGTERM
pub async fn serve_with_config(predictor: Predictor, config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    if config.allowed_origins.is_empty() {
        info!("CORS: any origin allowed");
    } else {
        info!("CORS: {}", config.allowed_origins.join(", "));
    }

    let app = create_router(predictor, config);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, shutting down gracefully..."),
        _ = terminate => info!("SIGTERM received, shutting down gracefully..."),
    }
}

/// Fallback for unknown routes
async fn handler_404(method: Method, uri: Uri) -> AppError {
    AppError::not_found(&format!("Route {} {} not found", method, uri.path()))
}

/// Fallback for known routes hit with the wrong method
async fn handler_405(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        &format!("Method {} not allowed on {}", method, uri.path()),
    )
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    fields: Vec<FieldError>,
    internal: Option<anyhow::Error>,
}

impl AppError {
    /// Field-level validation failure
    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Validation failed".to_string(),
            fields,
            internal: None,
        }
    }

    pub fn new(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            message: msg.to_string(),
            fields: vec![],
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    /// Body that could not be read (too large, aborted)
    pub fn rejected(rejection: BytesRejection) -> Self {
        Self::new(rejection.status(), &rejection.body_text())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = ?err, "Internal error");
        }

        let body = if self.fields.is_empty() {
            Json(serde_json::json!({ "error": self.message }))
        } else {
            Json(serde_json::json!({ "error": self.message, "fields": self.fields }))
        };

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();

        // Validation failures from the core are the caller's fault
        if let Some(sage_core::Error::Validation(fields)) = err.downcast_ref::<sage_core::Error>() {
            return Self::validation(fields.clone());
        }

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
            fields: vec![],
            internal: Some(err),
        }
    }
}
