//! Sage CLI - Finance & health predictions
//!
//! Usage:
//!   sage serve --port 8000                      Start web server
//!   sage classify -d "Groceries" -a 42.5        Categorize an expense
//!   sage anomaly --payload '{"amount": 10}'     Screen a record for fraud
//!   sage forecast --days 30 --seed 7            Forecast daily expenses
//!   sage risk --sleep 7 --steps 8000 --water 2  Score health risk
//!   sage config                                 Show predictor settings

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let predictor = commands::load_predictor(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            allowed_origins,
        } => commands::cmd_serve(predictor, &host, port, &allowed_origins).await,
        Commands::Classify {
            description,
            amount,
            user,
        } => commands::cmd_classify(&predictor, &description, amount, &user).map(|_| ()),
        Commands::Anomaly { payload } => commands::cmd_anomaly(&predictor, &payload).map(|_| ()),
        Commands::Forecast { days, seed, user } => {
            commands::cmd_forecast(&predictor, days, seed, &user).map(|_| ())
        }
        Commands::Risk {
            sleep,
            steps,
            water,
            symptoms,
            user,
        } => commands::cmd_risk(&predictor, sleep, steps, water, symptoms, &user).map(|_| ()),
        Commands::Config => commands::cmd_config(&predictor),
    }
}
