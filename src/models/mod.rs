//! Shared data models spanning the engine layers.

pub mod candle;
pub mod signal;

pub use candle::Candle;
pub use signal::{AnalysisError, AnalysisResult, IndicatorReading, IndicatorSnapshot, SignalType};
