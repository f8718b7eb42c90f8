pub mod bank;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use bank::{compute_snapshot, MIN_CANDLES};
