//! Majority-vote aggregation of indicator readings.

use crate::models::{IndicatorReading, SignalType};

/// Votes needed for a strict majority of the five indicators.
pub const MAJORITY_THRESHOLD: usize = 3;

/// Confidence points removed when the 24h price direction disagrees with
/// the verdict.
pub const DISAGREEMENT_PENALTY: u8 = 10;

/// Combine local votes into one overall signal and confidence score.
///
/// The signal with a strict majority (>= 3 of 5) wins; any split without a
/// majority resolves to HOLD. Confidence is the majority share of the vote
/// in percent, minus the disagreement penalty when the 24h change moves
/// against a BUY or SELL verdict (HOLD is exempt). Tallying only counts
/// votes, so permuting the readings never changes the result.
pub fn aggregate(
    readings: &[IndicatorReading],
    price_change_24h: Option<f64>,
) -> (SignalType, u8) {
    let mut buy = 0usize;
    let mut sell = 0usize;
    let mut hold = 0usize;
    for reading in readings {
        match reading.signal {
            SignalType::Buy => buy += 1,
            SignalType::Sell => sell += 1,
            SignalType::Hold => hold += 1,
        }
    }

    let majority_count = buy.max(sell).max(hold);
    let overall = if buy >= MAJORITY_THRESHOLD {
        SignalType::Buy
    } else if sell >= MAJORITY_THRESHOLD {
        SignalType::Sell
    } else {
        SignalType::Hold
    };

    let total = readings.len().max(1);
    let mut confidence = (100.0 * majority_count as f64 / total as f64).round() as u8;

    if disagrees_with_24h_change(overall, price_change_24h) {
        confidence = confidence.saturating_sub(DISAGREEMENT_PENALTY);
    }

    (overall, confidence)
}

/// BUY expects a non-negative 24h change, SELL a non-positive one. A missing
/// 24h change never penalizes.
fn disagrees_with_24h_change(signal: SignalType, price_change_24h: Option<f64>) -> bool {
    let Some(change) = price_change_24h else {
        return false;
    };
    match signal {
        SignalType::Buy => change < 0.0,
        SignalType::Sell => change > 0.0,
        SignalType::Hold => false,
    }
}
