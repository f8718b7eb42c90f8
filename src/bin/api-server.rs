//! Candlesage API Server
//!
//! HTTP API server exposing the signal analysis engine. The service is
//! stateless and can be horizontally scaled; candles come from the wired
//! market-data provider on every request.

use candlesage::config::Config;
use candlesage::core::http::start_server;
use candlesage::logging;
use candlesage::services::market_data::PlaceholderMarketDataProvider;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env();
    info!("Starting Candlesage API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!("This service is stateless and can be horizontally scaled");

    // Candle retrieval belongs to an external collaborator; the placeholder
    // serves no data until a real provider is wired here.
    let market_data = Arc::new(PlaceholderMarketDataProvider);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config, market_data).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
