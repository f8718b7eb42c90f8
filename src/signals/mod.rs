pub mod aggregation;
pub mod engine;
pub mod mapper;

pub use aggregation::{aggregate, DISAGREEMENT_PENALTY, MAJORITY_THRESHOLD};
pub use engine::{AnalysisEngine, MIN_CANDLES};
pub use mapper::map_readings;
