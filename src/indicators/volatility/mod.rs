pub mod bollinger;

pub use bollinger::{calculate_bollinger_bands, calculate_bollinger_bands_default, BollingerBands};
