use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One aggregated OHLCV interval.
///
/// Sequences handed to the engine are ordered by strictly increasing
/// `open_time` with fixed spacing equal to the requested timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        open_time: DateTime<Utc>,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
