//! Boundary validation for prediction inputs
//!
//! Constraints live on the input records as `#[validate(...)]` attributes.
//! This module turns `validator` failures into field-level [`FieldError`]s
//! so every caller (HTTP handlers, CLI) reports them the same way.
//! Field names are reported in their wire spelling (`sleepHours`, not
//! `sleep_hours`), since that is what clients sent.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{Error, Result};

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// An input record validated at the API boundary
///
/// `validator` reports Rust field names and knows nothing about serde
/// renames, so records list their renamed fields here.
pub trait WireFields: Validate {
    /// `(rust_name, wire_name)` pairs for every renamed field
    const RENAMED: &'static [(&'static str, &'static str)] = &[];

    fn wire_name(field: &str) -> &str {
        Self::RENAMED
            .iter()
            .find(|(rust, _)| *rust == field)
            .map(|(_, wire)| *wire)
            .unwrap_or(field)
    }
}

/// Validate an input record, failing with `Error::Validation` on any violation
pub fn validate_input<T: WireFields>(input: &T) -> Result<()> {
    input
        .validate()
        .map_err(|errors| Error::Validation(field_errors(&errors, T::wire_name)))
}

/// Reject NaN and infinities; inclusive `range` bounds let NaN through
pub fn finite(value: f64) -> std::result::Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

/// Flatten `validator` errors into a list sorted by wire field name
pub fn field_errors(
    errors: &ValidationErrors,
    wire_name: impl Fn(&str) -> &str,
) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = wire_name(&*field).to_string();
            errs.iter().map(move |e| FieldError {
                field: field.clone(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    // Fall back to the constraint code ("range", "length")
                    .unwrap_or_else(|| format!("failed {} check", e.code)),
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseInput, ForecastInput, HealthInput};

    fn expense(amount: f64, description: &str) -> ExpenseInput {
        ExpenseInput {
            user_id: "u-1".to_string(),
            amount,
            description: description.to_string(),
            date: None,
        }
    }

    #[test]
    fn test_valid_expense_passes() {
        assert!(validate_input(&expense(42.0, "Groceries")).is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = validate_input(&expense(0.0, "Coffee")).unwrap_err();
        match err {
            Error::Validation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "amount");
                assert_eq!(fields[0].message, "must be greater than 0");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_and_empty_description_both_reported() {
        let err = validate_input(&expense(-5.0, "")).unwrap_err();
        let Error::Validation(fields) = err else {
            panic!("expected validation error");
        };
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["amount", "description"]);
    }

    #[test]
    fn test_forecast_horizon_bounds() {
        let at = |days| ForecastInput {
            user_id: "u-1".to_string(),
            days_ahead: days,
        };

        assert!(validate_input(&at(7)).is_ok());
        assert!(validate_input(&at(365)).is_ok());
        assert!(validate_input(&at(6)).is_err());
        assert!(validate_input(&at(366)).is_err());
    }

    #[test]
    fn test_health_bounds() {
        let health = |sleep, steps, water| HealthInput {
            user_id: "u-1".to_string(),
            sleep_hours: sleep,
            steps,
            water_intake: water,
            symptoms_text: None,
        };

        assert!(validate_input(&health(0.0, 0, 0.0)).is_ok());
        assert!(validate_input(&health(24.0, 20_000, 4.0)).is_ok());
        assert!(validate_input(&health(24.5, 100, 1.0)).is_err());
        assert!(validate_input(&health(8.0, -1, 1.0)).is_err());
        assert!(validate_input(&health(8.0, 100, -0.5)).is_err());
    }

    #[test]
    fn test_renamed_fields_reported_in_wire_spelling() {
        let input = HealthInput {
            user_id: "u".to_string(),
            sleep_hours: 25.0,
            steps: 10,
            water_intake: -1.0,
            symptoms_text: None,
        };

        let Error::Validation(fields) = validate_input(&input).unwrap_err() else {
            panic!("expected validation error");
        };
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["sleepHours", "waterIntake"]);
    }

    #[test]
    fn test_days_ahead_keeps_snake_case() {
        let input = ForecastInput {
            user_id: "u".to_string(),
            days_ahead: 2,
        };

        let Error::Validation(fields) = validate_input(&input).unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(fields[0].field, "days_ahead");
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let Error::Validation(fields) = validate_input(&expense(f64::NAN, "Coffee")).unwrap_err()
        else {
            panic!("expected validation error");
        };
        assert_eq!(fields[0].field, "amount");
        assert_eq!(fields[0].message, "must be a finite number");

        let health = HealthInput {
            user_id: "u".to_string(),
            sleep_hours: f64::NAN,
            steps: 100,
            water_intake: f64::INFINITY,
            symptoms_text: None,
        };
        let Error::Validation(fields) = validate_input(&health).unwrap_err() else {
            panic!("expected validation error");
        };
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["sleepHours", "waterIntake"]);
    }

    #[test]
    fn test_wire_name_passthrough() {
        assert_eq!(HealthInput::wire_name("water_intake"), "waterIntake");
        assert_eq!(HealthInput::wire_name("steps"), "steps");
    }
}
