//! Adaptive-precision price formatting.
//!
//! Renders prices spanning 13 orders of magnitude, from sub-micro-cent
//! tokens to five-figure assets, without scientific notation.

/// Maximum fractional digits ever rendered.
const MAX_FRACTION_DIGITS: usize = 20;

/// Format a price with magnitude-dependent precision and a currency prefix.
///
/// Zero, negative, NaN, and infinite inputs all render as the fixed
/// `"{currency}0.00"` sentinel; this function never fails.
pub fn format_crypto_price(price: f64, currency: &str) -> String {
    if !price.is_finite() || price <= 0.0 {
        return format!("{}0.00", currency);
    }

    let decimal_places = if price >= 1000.0 {
        2
    } else if price >= 1.0 {
        if price >= 100.0 {
            2
        } else {
            4
        }
    } else if price >= 0.01 {
        4
    } else if price >= 0.0001 {
        6
    } else {
        // Micro prices: show at least 3 significant digits past the
        // leading zero-fraction digits.
        match leading_fraction_zeros(price) {
            Some(zeros) => (zeros + 3).min(MAX_FRACTION_DIGITS),
            None => return format!("{}0.00", currency),
        }
    };

    let fixed = format!("{:.*}", decimal_places, price);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = format!("{}{}", currency, group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Format with the default `$` currency symbol.
pub fn format_usd(price: f64) -> String {
    format_crypto_price(price, "$")
}

/// Number of zero digits between the decimal point and the first nonzero
/// fractional digit, or None when no nonzero digit appears within the
/// renderable precision.
fn leading_fraction_zeros(price: f64) -> Option<usize> {
    let expanded = format!("{:.*}", MAX_FRACTION_DIGITS, price);
    let fraction = expanded.split_once('.').map(|(_, f)| f)?;
    fraction.bytes().position(|b| b != b'0')
}

/// Insert thousands separators into an integer digit string.
fn group_thousands(integer: &str) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    grouped
}
