//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::Candle;

#[derive(Debug, Clone, Copy)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD series
/// Histogram = MACD - Signal
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdValue> {
    if fast_period > slow_period || candles.len() < slow_period + signal_period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_series = math::ema_series(&closes, fast_period)?;
    let slow_series = math::ema_series(&closes, slow_period)?;

    // Both EMA series are defined from index slow_period - 1 onward; pair
    // them up from there to build the MACD series.
    let offset = slow_period - fast_period;
    let macd_series: Vec<f64> = slow_series
        .iter()
        .enumerate()
        .map(|(i, slow)| fast_series[i + offset] - slow)
        .collect();

    if macd_series.len() < signal_period {
        return None;
    }

    let macd_line = *macd_series.last()?;
    let signal_line = math::ema(&macd_series, signal_period)?;

    Some(MacdValue {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdValue> {
    calculate_macd(candles, 12, 26, 9)
}
