pub mod ema;

pub use ema::{calculate_ema, check_ema_cross};
