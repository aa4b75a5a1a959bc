//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (load_predictor, print_json) and the config command
//! - `predict` - One-shot predictions (classify, anomaly, forecast, risk)
//! - `serve` - Web server command

pub mod core;
pub mod predict;
pub mod serve;

// Re-export command functions for main.rs
pub use core::*;
pub use predict::*;
pub use serve::*;
