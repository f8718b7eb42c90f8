//! Bollinger Bands indicator

use crate::common::math;
use crate::models::Candle;

#[derive(Debug, Clone, Copy)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: usize,
    std_dev: f64,
) -> Option<BollingerBands> {
    if candles.len() < period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::sma(&closes, period)?;
    let std = math::standard_deviation(&closes, period)?;

    Some(BollingerBands {
        upper: middle + (std_dev * std),
        middle,
        lower: middle - (std_dev * std),
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBands> {
    calculate_bollinger_bands(candles, 20, 2.0)
}
