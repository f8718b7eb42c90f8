//! Threshold rules converting raw indicator values into local votes.

use crate::common::format::format_usd;
use crate::indicators::trend::check_ema_cross;
use crate::models::{IndicatorReading, IndicatorSnapshot, SignalType};

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const STOCH_OVERSOLD: f64 = 20.0;
pub const STOCH_OVERBOUGHT: f64 = 80.0;

/// Map the latest indicator values onto the five local votes, in the fixed
/// order RSI, EMA cross, Stochastic, MACD, Bollinger.
pub fn map_readings(snapshot: &IndicatorSnapshot) -> Vec<IndicatorReading> {
    vec![
        rsi_reading(snapshot),
        ema_cross_reading(snapshot),
        stochastic_reading(snapshot),
        macd_reading(snapshot),
        bollinger_reading(snapshot),
    ]
}

fn rsi_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let rsi = snapshot.rsi;
    let (signal, description) = if rsi < RSI_OVERSOLD {
        (SignalType::Buy, format!("RSI oversold: {:.2}", rsi))
    } else if rsi > RSI_OVERBOUGHT {
        (SignalType::Sell, format!("RSI overbought: {:.2}", rsi))
    } else {
        (SignalType::Hold, format!("RSI neutral: {:.2}", rsi))
    };

    IndicatorReading {
        name: "RSI".to_string(),
        value: rsi,
        signal,
        description,
    }
}

/// The EMA cross never abstains: the short EMA is either above the long EMA
/// or it is not.
fn ema_cross_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let diff = snapshot.ema_short - snapshot.ema_long;
    let signal = check_ema_cross(snapshot.ema_short, snapshot.ema_long);
    let relation = match signal {
        SignalType::Buy => "above",
        _ => "at or below",
    };

    IndicatorReading {
        name: "EMA Cross".to_string(),
        value: diff,
        signal,
        description: format!(
            "EMA 12 {} EMA 26: {} vs {}",
            relation,
            format_usd(snapshot.ema_short),
            format_usd(snapshot.ema_long)
        ),
    }
}

fn stochastic_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let k = snapshot.stoch_k;
    let (signal, description) = if k < STOCH_OVERSOLD {
        (SignalType::Buy, format!("Stochastic %K oversold: {:.2}", k))
    } else if k > STOCH_OVERBOUGHT {
        (SignalType::Sell, format!("Stochastic %K overbought: {:.2}", k))
    } else {
        (SignalType::Hold, format!("Stochastic %K neutral: {:.2}", k))
    };

    IndicatorReading {
        name: "Stochastic".to_string(),
        value: k,
        signal,
        description,
    }
}

/// MACD is binary like the EMA cross: above the signal line or not.
fn macd_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let (signal, relation) = if snapshot.macd > snapshot.macd_signal {
        (SignalType::Buy, "above")
    } else {
        (SignalType::Sell, "at or below")
    };

    IndicatorReading {
        name: "MACD".to_string(),
        value: snapshot.macd,
        signal,
        description: format!(
            "MACD {} signal line: {:.6} vs {:.6}",
            relation, snapshot.macd, snapshot.macd_signal
        ),
    }
}

fn bollinger_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let close = snapshot.last_close;
    let (signal, description) = if close <= snapshot.bb_lower {
        (
            SignalType::Buy,
            format!(
                "Close {} at or below lower band {}",
                format_usd(close),
                format_usd(snapshot.bb_lower)
            ),
        )
    } else if close >= snapshot.bb_upper {
        (
            SignalType::Sell,
            format!(
                "Close {} at or above upper band {}",
                format_usd(close),
                format_usd(snapshot.bb_upper)
            ),
        )
    } else {
        (
            SignalType::Hold,
            format!(
                "Close {} inside bands {} - {}",
                format_usd(close),
                format_usd(snapshot.bb_lower),
                format_usd(snapshot.bb_upper)
            ),
        )
    };

    IndicatorReading {
        name: "Bollinger Bands".to_string(),
        value: close,
        signal,
        description,
    }
}
