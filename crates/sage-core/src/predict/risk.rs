//! Health risk scoring
//!
//! Each metric below its threshold adds a fixed weight to the score and a
//! matching recommendation. The total is bucketed into a [`RiskLevel`].

use crate::config::RiskConfig;
use crate::models::{HealthOutput, RiskLevel};

pub const SLEEP_ADVICE: &str = "Increase sleep to 7-9 hours";
pub const STEPS_ADVICE: &str = "Walk more - aim for 10k steps daily";
pub const WATER_ADVICE: &str = "Drink 8+ glasses of water";
pub const HEALTHY_ADVICE: &str = "Keep up healthy habits!";

pub fn assess(config: &RiskConfig, sleep_hours: f64, steps: i64, water_liters: f64) -> HealthOutput {
    let mut score = 0.0;
    let mut recommendations = Vec::new();

    if sleep_hours < config.min_sleep_hours {
        score += config.sleep_weight;
        recommendations.push(SLEEP_ADVICE.to_string());
    }
    if steps < config.min_steps {
        score += config.steps_weight;
        recommendations.push(STEPS_ADVICE.to_string());
    }
    if water_liters < config.min_water_liters {
        score += config.water_weight;
        recommendations.push(WATER_ADVICE.to_string());
    }

    let risk_level = level_for(config, score);

    if recommendations.is_empty() {
        recommendations.push(HEALTHY_ADVICE.to_string());
    }

    HealthOutput {
        risk_level,
        risk_score: score.min(1.0),
        recommendations,
    }
}

/// Bucket a raw score
pub fn level_for(config: &RiskConfig, score: f64) -> RiskLevel {
    if score > config.high_above {
        RiskLevel::High
    } else if score > config.medium_above {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
