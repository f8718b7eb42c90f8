//! Shared rolling-window math used by the indicator battery.

/// Simple moving average over the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Exponential moving average over the full series, seeded with the simple
/// average of the first `period` values.
///
/// EMA_t = value_t * k + EMA_{t-1} * (1 - k), k = 2 / (period + 1)
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).and_then(|series| series.last().copied())
}

/// Full EMA series, one value per input starting at index `period - 1`.
pub fn ema_series(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.len() < period {
        return None;
    }

    let seed = values[..period].iter().sum::<f64>() / period as f64;
    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);

    let mut prev = seed;
    for &value in &values[period..] {
        prev = ema_from_previous(value, prev, period);
        series.push(prev);
    }

    Some(series)
}

/// Single EMA step from the previous smoothed value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = 2.0 / (period as f64 + 1.0);
    value * k + previous * (1.0 - k)
}

/// Population standard deviation over the trailing `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / period as f64;
    Some(variance.sqrt())
}
