//! Error types for Sage

use thiserror::Error;

use crate::validation::FieldError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {}", describe_fields(.0))]
    Validation(Vec<FieldError>),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Computation error: {0}")]
    Computation(String),
}

impl Error {
    /// Shorthand for a single-field validation failure
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Error::Validation(vec![FieldError {
            field: field.to_string(),
            message: message.into(),
        }])
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

fn describe_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, Error>;
