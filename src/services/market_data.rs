//! Market data provider interface.
//!
//! Candle retrieval and transport belong to an external collaborator; the
//! engine consumes already-fetched candles through this seam and performs
//! no retries of its own.

use std::fmt;

use crate::models::Candle;

/// Failures the market-data collaborator may report.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Unknown trading pair.
    NotFound(String),
    /// Upstream rate limit hit.
    RateLimited,
    /// Upstream did not answer in time.
    Timeout,
    /// Any other transport failure.
    Transport(String),
}

impl fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataError::NotFound(pair) => write!(f, "pair not found: {}", pair),
            MarketDataError::RateLimited => write!(f, "upstream rate limited"),
            MarketDataError::Timeout => write!(f, "upstream timed out"),
            MarketDataError::Transport(details) => write!(f, "transport error: {}", details),
        }
    }
}

impl std::error::Error for MarketDataError {}

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get at least `min_candles` historical candles for a pair, ordered by
    /// strictly increasing open time.
    async fn get_candles(
        &self,
        pair: &str,
        timeframe: &str,
        min_candles: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;

    /// Get the 24h price change in percent, when the source exposes one.
    async fn get_price_change_24h(&self, pair: &str) -> Result<Option<f64>, MarketDataError>;
}

/// Stand-in provider until a real data source is wired up.
pub struct PlaceholderMarketDataProvider;

#[async_trait::async_trait]
impl MarketDataProvider for PlaceholderMarketDataProvider {
    async fn get_candles(
        &self,
        _pair: &str,
        _timeframe: &str,
        _min_candles: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        Ok(Vec::new())
    }

    async fn get_price_change_24h(&self, _pair: &str) -> Result<Option<f64>, MarketDataError> {
        Ok(None)
    }
}
