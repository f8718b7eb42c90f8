//! Environment-based configuration.

use std::env;
use std::time::Duration;

/// Current deployment environment name (`ENVIRONMENT`, default "development").
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

pub const DEFAULT_TIMEFRAME: &str = "15m";
pub const SUPPORTED_TIMEFRAMES: &[&str] = &["15m"];

const DEFAULT_PAIRS: &[&str] = &[
    "BTCUSDT", "ETHUSDT", "ADAUSDT", "DOTUSDT", "LINKUSDT", "BNBUSDT", "SOLUSDT", "MATICUSDT",
    "AVAXUSDT", "LTCUSDT", "XRPUSDT", "ATOMUSDT", "ALGOUSDT", "VETUSDT", "FILUSDT",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub supported_pairs: Vec<String>,
    pub default_timeframe: String,
    /// Budget for the single market-data fetch per analysis request.
    pub market_data_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let supported_pairs = env::var("SUPPORTED_PAIRS")
            .map(|raw| {
                raw.split(',')
                    .map(|p| p.trim().to_uppercase())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
            })
            .ok()
            .filter(|pairs| !pairs.is_empty())
            .unwrap_or_else(|| DEFAULT_PAIRS.iter().map(|p| p.to_string()).collect());

        let timeout_secs = env::var("MARKET_DATA_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(10);

        Self {
            port,
            environment: get_environment(),
            supported_pairs,
            default_timeframe: DEFAULT_TIMEFRAME.to_string(),
            market_data_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
