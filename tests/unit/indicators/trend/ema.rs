//! Unit tests for EMA indicator

use candlesage::indicators::trend::{calculate_ema, check_ema_cross};
use candlesage::models::{Candle, SignalType};
use chrono::Utc;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.1, close - 0.1, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_ema_insufficient_data() {
    let candles = candles_from_closes(&[100.0; 10]);
    assert!(calculate_ema(&candles, 20).is_none());
}

#[test]
fn test_ema_constant_series() {
    let candles = candles_from_closes(&[100.0; 50]);
    let ema = calculate_ema(&candles, 12).unwrap();
    assert!((ema - 100.0).abs() < 1e-9);
}

#[test]
fn test_short_ema_leads_in_uptrend() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 0.5).collect();
    let candles = candles_from_closes(&closes);
    let short = calculate_ema(&candles, 12).unwrap();
    let long = calculate_ema(&candles, 26).unwrap();
    assert!(short > long);
}

#[test]
fn test_ema_cross_is_binary() {
    assert_eq!(check_ema_cross(10.0, 9.0), SignalType::Buy);
    assert_eq!(check_ema_cross(9.0, 10.0), SignalType::Sell);
    // An exact tie counts as not-above
    assert_eq!(check_ema_cross(10.0, 10.0), SignalType::Sell);
}
