//! Integration tests for sage-core
//!
//! These tests exercise the JSON → validate → predict workflow the server
//! and CLI both rely on.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sage_core::{
    models::{MAX_FORECAST_DAYS, MIN_FORECAST_DAYS},
    Error, ExpenseInput, ForecastInput, HealthInput, Predictor, PredictorConfig, RiskLevel,
};

fn expense_json(amount: f64, description: &str) -> serde_json::Value {
    serde_json::json!({
        "userId": "user-42",
        "amount": amount,
        "description": description,
        "date": "2024-03-01"
    })
}

// =============================================================================
// Finance
// =============================================================================

#[test]
fn test_classify_from_json() {
    let predictor = Predictor::new();
    let input: ExpenseInput = serde_json::from_value(expense_json(18.75, "Groceries")).unwrap();

    let out = predictor.classify_expense(&input).unwrap();
    assert_eq!(out.predicted_category, "food");
    assert_eq!(out.confidence, 0.85);
    assert!(!out.is_anomalous);
}

#[test]
fn test_classify_covers_category_set() {
    let predictor = Predictor::new();
    let categories = &predictor.config().classifier.categories;

    let mut seen = std::collections::HashSet::new();
    for i in 0..500 {
        let input: ExpenseInput =
            serde_json::from_value(expense_json(1.0 + i as f64, &format!("item {}", i))).unwrap();
        let out = predictor.classify_expense(&input).unwrap();
        assert!(categories.contains(&out.predicted_category));
        seen.insert(out.predicted_category);
    }

    // 500 hashed descriptions should hit every one of five buckets
    assert_eq!(seen.len(), categories.len());
}

#[test]
fn test_non_positive_amounts_rejected() {
    let predictor = Predictor::new();
    for amount in [0.0, -0.01, -100.0] {
        let input: ExpenseInput = serde_json::from_value(expense_json(amount, "Taxi")).unwrap();
        match predictor.classify_expense(&input) {
            Err(Error::Validation(fields)) => assert_eq!(fields[0].field, "amount"),
            other => panic!("expected validation error for {}, got {:?}", amount, other),
        }
    }
}

#[test]
fn test_anomaly_constant() {
    let predictor = Predictor::new();
    let out = predictor
        .detect_anomaly(&serde_json::json!({ "amount": 1_000_000, "country": "XX" }))
        .unwrap();
    assert!(!out.is_anomalous);
    assert_eq!(out.score, 0.2);
}

#[test]
fn test_forecast_every_valid_horizon() {
    let predictor = Predictor::new();
    let mut rng = StdRng::seed_from_u64(365);

    for days in MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS {
        let input = ForecastInput {
            user_id: "user-42".to_string(),
            days_ahead: days,
        };
        let out = predictor.forecast_expenses_with_rng(&input, &mut rng).unwrap();
        assert_eq!(out.forecast_values.len() as i64, days);
        assert_eq!(out.trend, "stable");
    }
}

// =============================================================================
// Health
// =============================================================================

#[test]
fn test_risk_from_json_high() {
    let predictor = Predictor::new();
    let input: HealthInput = serde_json::from_value(serde_json::json!({
        "userId": "user-42",
        "sleepHours": 4.5,
        "steps": 1200,
        "waterIntake": 0.5,
        "symptomsText": "tired"
    }))
    .unwrap();

    let out = predictor.assess_risk(&input).unwrap();
    assert_eq!(out.risk_level, RiskLevel::High);
    assert!(out.risk_score >= 0.65 - 1e-9);
    assert_eq!(out.recommendations.len(), 3);
}

#[test]
fn test_risk_from_json_low() {
    let predictor = Predictor::new();
    let input: HealthInput = serde_json::from_value(serde_json::json!({
        "userId": "user-42",
        "sleepHours": 8,
        "steps": 10000,
        "waterIntake": 3
    }))
    .unwrap();

    let out = predictor.assess_risk(&input).unwrap();
    assert_eq!(out.risk_level, RiskLevel::Low);
    assert_eq!(out.risk_score, 0.0);
    assert_eq!(out.recommendations, vec!["Keep up healthy habits!"]);
}

#[test]
fn test_custom_config_changes_scoring() {
    let config = sage_core::config::parse_config(
        r#"
        [risk]
        min_steps = 12000
        steps_weight = 0.4
        "#,
    )
    .unwrap();
    let predictor = Predictor::with_config(config);

    let input = HealthInput {
        user_id: "user-42".to_string(),
        sleep_hours: 8.0,
        steps: 10_000,
        water_intake: 3.0,
        symptoms_text: None,
    };
    let out = predictor.assess_risk(&input).unwrap();
    assert_eq!(out.risk_level, RiskLevel::Medium);
    assert!((out.risk_score - 0.4).abs() < 1e-9);
}

#[test]
fn test_default_config_loads() {
    let config = PredictorConfig::embedded().unwrap();
    assert_eq!(config.classifier.categories.len(), 5);
    assert_eq!(config.forecast.mean, 100.0);
}
