//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::{Candle, SignalType};

/// Calculate EMA of closing prices for a specific period
pub fn calculate_ema(candles: &[Candle], period: usize) -> Option<f64> {
    if candles.len() < period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema(&closes, period)
}

/// Evaluate an EMA cross (e.g. EMA 12 against EMA 26).
///
/// The cross is binary: the short EMA is either above the long EMA (bullish)
/// or not (bearish); it never abstains.
pub fn check_ema_cross(ema_short: f64, ema_long: f64) -> SignalType {
    if ema_short > ema_long {
        SignalType::Buy
    } else {
        SignalType::Sell
    }
}
