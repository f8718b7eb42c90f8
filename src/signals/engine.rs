//! Analysis engine orchestrating the indicator battery, vote mapping, and
//! aggregation over one immutable candle sequence.

use chrono::Utc;

use crate::indicators::bank;
use crate::models::{AnalysisError, AnalysisResult, Candle, IndicatorSnapshot, SignalType};
use crate::signals::aggregation::aggregate;
use crate::signals::mapper::map_readings;

pub use crate::indicators::bank::MIN_CANDLES;

pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Run one full analysis over an ordered candle sequence.
    ///
    /// Everything derived here is computed fresh from the candle slice and
    /// the optional 24h change; there is no hidden state between requests.
    pub fn analyze(
        pair: &str,
        timeframe: &str,
        candles: &[Candle],
        price_change_24h: Option<f64>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let snapshot = bank::compute_snapshot(candles)?;
        let readings = map_readings(&snapshot);
        let (signal, confidence) = aggregate(&readings, price_change_24h);
        let reason = build_reason(signal, &snapshot);

        Ok(AnalysisResult {
            pair: pair.to_uppercase(),
            timeframe: timeframe.to_string(),
            signal,
            confidence,
            last_price: snapshot.last_close,
            price_change_24h,
            indicators: readings,
            snapshot,
            timestamp: Utc::now(),
            reason,
        })
    }
}

fn build_reason(signal: SignalType, snapshot: &IndicatorSnapshot) -> String {
    let ema_trend = if snapshot.ema_short > snapshot.ema_long {
        "positive"
    } else {
        "negative"
    };
    match signal {
        SignalType::Buy => format!(
            "Strong bullish indicators: RSI={:.1}, EMA trend {}",
            snapshot.rsi, ema_trend
        ),
        SignalType::Sell => format!(
            "Strong bearish indicators: RSI={:.1}, EMA trend {}",
            snapshot.rsi, ema_trend
        ),
        SignalType::Hold => "Mixed signals, market consolidation".to_string(),
    }
}
