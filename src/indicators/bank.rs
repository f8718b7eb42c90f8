//! Fixed indicator battery evaluated once per analysis request.

use crate::indicators::momentum::{
    calculate_macd_default, calculate_rsi_default, calculate_stochastic_default,
};
use crate::indicators::trend::calculate_ema;
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::{AnalysisError, Candle, IndicatorSnapshot};

/// Longest window any indicator in the battery needs: MACD's 26 + 9.
pub const MIN_CANDLES: usize = 35;

pub const RSI_PERIOD: usize = 14;
pub const EMA_SHORT_PERIOD: usize = 12;
pub const EMA_LONG_PERIOD: usize = 26;

/// Compute the full indicator snapshot from an ordered candle sequence.
///
/// Every indicator is a pure function of the immutable candle slice; nothing
/// here mutates shared state, so the five computations are independent of
/// one another.
pub fn compute_snapshot(candles: &[Candle]) -> Result<IndicatorSnapshot, AnalysisError> {
    if candles.len() < MIN_CANDLES {
        return Err(AnalysisError::InsufficientData {
            required: MIN_CANDLES,
            got: candles.len(),
        });
    }

    // With MIN_CANDLES satisfied every window below is satisfied too, so
    // the per-indicator Options cannot be None here.
    let insufficient = || AnalysisError::InsufficientData {
        required: MIN_CANDLES,
        got: candles.len(),
    };

    let rsi = calculate_rsi_default(candles).ok_or_else(insufficient)?;
    let ema_short = calculate_ema(candles, EMA_SHORT_PERIOD).ok_or_else(insufficient)?;
    let ema_long = calculate_ema(candles, EMA_LONG_PERIOD).ok_or_else(insufficient)?;
    let stochastic = calculate_stochastic_default(candles).ok_or_else(insufficient)?;
    let macd = calculate_macd_default(candles).ok_or_else(insufficient)?;
    let bands = calculate_bollinger_bands_default(candles).ok_or_else(insufficient)?;

    let last_close = candles[candles.len() - 1].close;

    Ok(IndicatorSnapshot {
        rsi,
        ema_short,
        ema_long,
        stoch_k: stochastic.k,
        stoch_d: stochastic.d,
        macd: macd.macd,
        macd_signal: macd.signal,
        macd_histogram: macd.histogram,
        bb_upper: bands.upper,
        bb_middle: bands.middle,
        bb_lower: bands.lower,
        last_close,
    })
}
