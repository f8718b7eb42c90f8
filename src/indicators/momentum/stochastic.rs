//! Stochastic oscillator indicator

use crate::models::Candle;

/// %K and its %D smoothing line.
#[derive(Debug, Clone, Copy)]
pub struct StochasticValue {
    pub k: f64,
    pub d: f64,
}

/// Calculate the stochastic oscillator.
///
/// %K = 100 * (close - lowestLow) / (highestHigh - lowestLow) over the
/// trailing `k_period` candles; a zero high-low range collapses to 50.
/// %D = SMA of the last `d_period` %K values.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: usize,
    d_period: usize,
) -> Option<StochasticValue> {
    if k_period == 0 || d_period == 0 || candles.len() < k_period + d_period - 1 {
        return None;
    }

    let k = percent_k(&candles[candles.len() - k_period..])?;

    let mut k_values = Vec::with_capacity(d_period);
    for offset in 0..d_period {
        let end = candles.len() - offset;
        k_values.push(percent_k(&candles[end - k_period..end])?);
    }
    let d = k_values.iter().sum::<f64>() / d_period as f64;

    Some(StochasticValue { k, d })
}

/// Calculate the stochastic oscillator with default periods (14, 3)
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticValue> {
    calculate_stochastic(candles, 14, 3)
}

fn percent_k(window: &[Candle]) -> Option<f64> {
    let close = window.last()?.close;
    let lowest_low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let highest_high = window
        .iter()
        .map(|c| c.high)
        .fold(f64::NEG_INFINITY, f64::max);

    let range = highest_high - lowest_low;
    if range == 0.0 {
        return Some(50.0);
    }
    Some(100.0 * (close - lowest_low) / range)
}
