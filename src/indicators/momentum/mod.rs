pub mod macd;
pub mod rsi;
pub mod stochastic;

pub use macd::{calculate_macd, calculate_macd_default, MacdValue};
pub use rsi::{calculate_rsi, calculate_rsi_default};
pub use stochastic::{calculate_stochastic, calculate_stochastic_default, StochasticValue};
