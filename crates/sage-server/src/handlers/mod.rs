//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod finance;
pub mod health;
pub mod status;

// Re-export all handlers for use in router
pub use finance::*;
pub use health::*;
pub use status::*;

use axum::{body::Bytes, extract::rejection::BytesRejection};
use serde::de::DeserializeOwned;

use crate::AppError;
use sage_core::FieldError;

/// Decode a JSON request body
///
/// An unreadable body (e.g. over the size limit) keeps the rejection's
/// status. Syntax errors, wrong types and missing fields are reported as a
/// validation failure on the `body` field.
pub(crate) fn parse_body<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
) -> Result<T, AppError> {
    let bytes = body.map_err(AppError::rejected)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::validation(vec![FieldError {
            field: "body".to_string(),
            message: e.to_string(),
        }])
    })
}
