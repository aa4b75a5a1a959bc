//! Expense categorization
//!
//! Picks a category by hashing the description into the configured
//! category list. SHA-256 keeps the mapping identical across processes.

use sha2::{Digest, Sha256};

use crate::config::ClassifierConfig;
use crate::error::{Error, Result};
use crate::models::ExpenseOutput;

/// Stable 64-bit hash of a description (first 8 bytes of its SHA-256, big-endian)
pub fn description_hash(description: &str) -> u64 {
    let digest = Sha256::digest(description.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Categorize an expense description
pub fn classify(config: &ClassifierConfig, description: &str) -> Result<ExpenseOutput> {
    let count = config.categories.len() as u64;
    if count == 0 {
        return Err(Error::Computation(
            "No expense categories configured".to_string(),
        ));
    }

    let index = (description_hash(description) % count) as usize;

    Ok(ExpenseOutput {
        predicted_category: config.categories[index].clone(),
        confidence: config.confidence,
        is_anomalous: false,
    })
}
