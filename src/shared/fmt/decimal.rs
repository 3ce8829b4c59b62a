//! Decimal formatting utilities for human-readable display.
//!
//! Handles `rust_decimal::Decimal` values: fixed-precision rendering with
//! thousands separators, tiered USD formatting for chart tooltips, and
//! conversion of on-chain base units back to token amounts.

use rust_decimal::prelude::*;

use crate::shared::scaling::from_base_units;

/// Smallest USD value rendered with digits; anything below is "Less than".
fn usd_floor() -> Decimal {
    Decimal::new(1, 6)
}

/// Render `value` with exactly `dp` fractional digits and thousands separators.
///
/// Rounds half away from zero.
pub fn fixed(value: &Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let rendered = format!("{:.prec$}", rounded, prec = dp as usize);
    super::num::group_thousands(&rendered)
}

/// Price axis tick label: `$0,0.00`.
pub fn axis_usd(value: &Decimal) -> String {
    format!("${}", fixed(value, 2))
}

/// Tooltip USD value with precision chosen by magnitude.
///
/// | value               | output               |
/// |---------------------|----------------------|
/// | 0                   | `$0.000000`          |
/// | < 0.000001          | `Less than $0.000001`|
/// | < 1                 | `$0.123456`          |
/// | < 100,000           | `$1,234.57`          |
/// | otherwise           | `$1,234,567`         |
pub fn usd(value: &Decimal) -> String {
    if value.is_zero() {
        return "$0.000000".to_string();
    }
    let abs = value.abs();
    if abs < usd_floor() {
        return "Less than $0.000001".to_string();
    }
    if abs < Decimal::ONE {
        return format!("${}", fixed(value, 6));
    }
    if abs < Decimal::from(100_000) {
        return format!("${}", fixed(value, 2));
    }
    format!("${}", fixed(value, 0))
}

/// Render a base-unit amount as a plain token amount (`1000000000000000000` with
/// 18 decimals becomes `"1"`).
///
/// Falls back to the raw base-unit string when the decimals exponent is out of
/// range.
pub fn token_amount(base_units: &Decimal, decimals: u32) -> String {
    match from_base_units(*base_units, decimals) {
        Ok(amount) => amount.normalize().to_string(),
        Err(e) => {
            tracing::warn!(decimals, "Cannot shift amount for display: {}", e);
            base_units.normalize().to_string()
        }
    }
}
