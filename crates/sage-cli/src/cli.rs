//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sage - Finance & health predictions
#[derive(Parser)]
#[command(name = "sage")]
#[command(about = "Finance & health prediction service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Predictor config file (TOML); defaults to the data-dir override or built-ins
    #[arg(long, env = "SAGE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "SAGE_PORT", default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, env = "SAGE_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Comma-separated CORS origins (any origin when empty)
        #[arg(long, env = "SAGE_ALLOWED_ORIGINS", default_value = "")]
        allowed_origins: String,
    },

    /// Categorize an expense
    Classify {
        /// Expense description
        #[arg(short, long)]
        description: String,

        /// Expense amount (must be positive)
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,

        /// User identifier
        #[arg(short, long, default_value = "cli")]
        user: String,
    },

    /// Screen a JSON object for fraud
    Anomaly {
        /// JSON object to screen
        #[arg(long, default_value = "{}")]
        payload: String,
    },

    /// Forecast daily expenses
    Forecast {
        /// Number of days to forecast (7-365)
        #[arg(short, long, default_value = "30", allow_negative_numbers = true)]
        days: i64,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// User identifier
        #[arg(short, long, default_value = "cli")]
        user: String,
    },

    /// Score health risk from daily metrics
    Risk {
        /// Hours slept (0-24)
        #[arg(long, allow_negative_numbers = true)]
        sleep: f64,

        /// Steps walked
        #[arg(long, allow_negative_numbers = true)]
        steps: i64,

        /// Water intake in liters
        #[arg(long, allow_negative_numbers = true)]
        water: f64,

        /// Free-text symptoms
        #[arg(long)]
        symptoms: Option<String>,

        /// User identifier
        #[arg(short, long, default_value = "cli")]
        user: String,
    },

    /// Print the effective predictor configuration
    Config,
}
