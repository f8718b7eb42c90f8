//! candlesage: technical-indicator signal engine for crypto trading pairs.
//!
//! Converts an ordered candle sequence into a BUY/SELL/HOLD recommendation
//! with a confidence score by evaluating a fixed battery of five indicators
//! (RSI, EMA cross, Stochastic %K, MACD, Bollinger Bands) and aggregating
//! their votes. Ships with an HTTP API, an adaptive-precision price
//! formatter, and a pluggable market-data seam.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
