//! Unit tests for RSI indicator

use candlesage::indicators::momentum::{calculate_rsi, calculate_rsi_default};
use candlesage::models::Candle;
use chrono::Utc;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.1, close - 0.1, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    let candles = candles_from_closes(&[100.0; 14]);
    assert!(calculate_rsi(&candles, 14).is_none());
}

#[test]
fn test_rsi_monotonic_rise_is_100() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert_eq!(rsi, 100.0);
}

#[test]
fn test_rsi_monotonic_fall_is_0() {
    let closes: Vec<f64> = (0..40).map(|i| 200.0 - i as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert!(rsi.abs() < 1e-9);
}

#[test]
fn test_rsi_bounded_for_varying_closes() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + (i as f64 * 0.13).cos() * 2.0)
        .collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert!((0.0..=100.0).contains(&rsi));
}

#[test]
fn test_rsi_flat_series_is_100() {
    // No losses at all collapses to the RSI = 100 fallback
    let candles = candles_from_closes(&[100.0; 40]);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert_eq!(rsi, 100.0);
}
