//! Signal and analysis result types shared across the engine layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalType::Buy => write!(f, "BUY"),
            SignalType::Sell => write!(f, "SELL"),
            SignalType::Hold => write!(f, "HOLD"),
        }
    }
}

/// One indicator's latest value together with its local vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub name: String,
    pub value: f64,
    pub signal: SignalType,
    pub description: String,
}

/// Raw indicator values for the most recent candle, as consumed by the
/// frontend. One snapshot per analysis, never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub ema_short: f64,
    pub ema_long: f64,
    pub stoch_k: f64,
    pub stoch_d: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub bb_upper: f64,
    pub bb_middle: f64,
    pub bb_lower: f64,
    pub last_close: f64,
}

/// Complete outcome of one analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub pair: String,
    pub timeframe: String,
    pub signal: SignalType,
    pub confidence: u8,
    pub last_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_24h: Option<f64>,
    pub indicators: Vec<IndicatorReading>,
    pub snapshot: IndicatorSnapshot,
    pub timestamp: DateTime<Utc>,
    pub reason: String,
}

/// Failures surfaced to the caller of the analysis engine.
///
/// Indicator-level numeric degeneracies (flat windows, zero average loss)
/// are absorbed inside the indicator battery with fixed fallback values and
/// never reach this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Malformed or unsupported trading pair symbol.
    InvalidPair(String),
    /// Fewer candles than the longest indicator window.
    InsufficientData { required: usize, got: usize },
    /// Market data fetch failed or timed out.
    UpstreamUnavailable(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidPair(pair) => {
                write!(f, "invalid trading pair: {}", pair)
            }
            AnalysisError::InsufficientData { required, got } => {
                write!(
                    f,
                    "insufficient candle data: need {} candles, got {}",
                    required, got
                )
            }
            AnalysisError::UpstreamUnavailable(details) => {
                write!(f, "market data unavailable: {}", details)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
