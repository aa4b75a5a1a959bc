//! Server command implementation

use anyhow::Result;
use sage_core::Predictor;
use sage_server::ServerConfig;

pub async fn cmd_serve(
    predictor: Predictor,
    host: &str,
    port: u16,
    allowed_origins: &str,
) -> Result<()> {
    let origins = sage_server::parse_origins(allowed_origins);

    println!("🚀 Starting Sage prediction server...");
    println!("   Listening: http://{}:{}", host, port);
    println!(
        "   Categories: {}",
        predictor.config().classifier.categories.join(", ")
    );
    if origins.is_empty() {
        println!("   🌐 CORS: any origin (set SAGE_ALLOWED_ORIGINS to restrict)");
    } else {
        println!(
            "   🌐 CORS: {} (SAGE_ALLOWED_ORIGINS)",
            origins.join(", ")
        );
    }
    println!();
    println!("   ⚠️  Predictions are placeholders, not trained models");
    println!();

    let config = ServerConfig {
        host: host.to_string(),
        port,
        allowed_origins: origins,
    };

    sage_server::serve_with_config(predictor, config).await
}
