//! Pure conversion module between human-readable token amounts and base units.
//!
//! All math uses `rust_decimal::Decimal` for exact arithmetic.
//! No async, no network calls.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Largest exponent `rust_decimal` can represent as `10^n`.
pub const MAX_DECIMALS: u32 = 28;

/// Errors that can occur while scaling an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    InvalidDecimal { input: String, reason: String },
    Overflow { context: String },
    UnsupportedDecimals(u32),
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::InvalidDecimal { input, reason } => {
                write!(f, "Invalid decimal '{}': {}", input, reason)
            }
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::UnsupportedDecimals(d) => {
                write!(f, "Unsupported decimals exponent {} (max {})", d, MAX_DECIMALS)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

/// Normalize locale-formatted user input: the first comma becomes a period and
/// surrounding whitespace is dropped.
///
/// ```text
/// " 1,5 "  ->  "1.5"
/// ```
pub fn normalize_input(raw: &str) -> String {
    raw.replacen(',', ".", 1).trim().to_string()
}

/// Parse a plain or scientific-notation decimal string. Digit separators
/// (`1_000`) are rejected.
pub fn parse_decimal(input: &str) -> Result<Decimal, ScalingError> {
    if input.contains('_') {
        return Err(ScalingError::InvalidDecimal {
            input: input.to_string(),
            reason: "digit separators are not allowed".to_string(),
        });
    }
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|e| ScalingError::InvalidDecimal {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// `10^decimals` as a `Decimal`.
pub fn pow10(decimals: u32) -> Result<Decimal, ScalingError> {
    if decimals > MAX_DECIMALS {
        return Err(ScalingError::UnsupportedDecimals(decimals));
    }
    let mut factor = Decimal::ONE;
    for _ in 0..decimals {
        factor = factor
            .checked_mul(Decimal::TEN)
            .ok_or_else(|| ScalingError::Overflow {
                context: format!("10^{}", decimals),
            })?;
    }
    Ok(factor)
}

/// Shift `value` up by `decimals` places and truncate toward zero.
pub fn shift_to_base_units(value: Decimal, decimals: u32) -> Result<Decimal, ScalingError> {
    let factor = pow10(decimals)?;
    let scaled = value
        .checked_mul(factor)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", value, decimals),
        })?;
    Ok(scaled.trunc().normalize())
}

/// Convert raw user input into integer base units.
///
/// # Conversion
///
/// ```text
/// input "1,5", decimals 2
///   normalize -> "1.5"
///   parse     -> 1.5
///   shift     -> 150
///   truncate  -> 150
/// ```
pub fn to_base_units(raw: &str, decimals: u32) -> Result<Decimal, ScalingError> {
    let normalized = normalize_input(raw);
    let value = parse_decimal(&normalized)?;
    shift_to_base_units(value, decimals)
}

/// Like [`to_base_units`], but an amount too large to represent saturates to
/// `Decimal::MAX` / `Decimal::MIN` instead of failing. Used where only the
/// comparison against constraints matters.
pub fn saturating_to_base_units(raw: &str, decimals: u32) -> Result<Decimal, ScalingError> {
    let value = parse_decimal(&normalize_input(raw))?;
    match shift_to_base_units(value, decimals) {
        Err(ScalingError::Overflow { .. }) if value.is_sign_negative() => Ok(Decimal::MIN),
        Err(ScalingError::Overflow { .. }) => Ok(Decimal::MAX),
        other => other,
    }
}

/// Convert integer base units back into a human-readable amount.
pub fn from_base_units(value: Decimal, decimals: u32) -> Result<Decimal, ScalingError> {
    let factor = pow10(decimals)?;
    value
        .checked_div(factor)
        .map(|v| v.normalize())
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} / 10^{}", value, decimals),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_input_replaces_first_comma_and_trims() {
        assert_eq!(normalize_input(" 1,5 "), "1.5");
        assert_eq!(normalize_input("1,000,5"), "1.000,5");
        assert_eq!(normalize_input("\t42\n"), "42");
    }

    #[test]
    fn test_comma_input_with_two_decimals() {
        assert_eq!(to_base_units(" 1,5 ", 2).unwrap(), dec("150"));
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(to_base_units("1.239", 2).unwrap(), dec("123"));
        assert_eq!(to_base_units("-2.75", 1).unwrap(), dec("-27"));
        assert_eq!(to_base_units("0.001", 2).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_eighteen_decimals() {
        assert_eq!(
            to_base_units("1000", 18).unwrap(),
            dec("1000000000000000000000")
        );
    }

    #[test]
    fn test_scientific_notation_accepted() {
        assert_eq!(to_base_units("1e3", 0).unwrap(), dec("1000"));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            to_base_units("abc", 2),
            Err(ScalingError::InvalidDecimal { .. })
        ));
        assert!(matches!(
            to_base_units("   ", 2),
            Err(ScalingError::InvalidDecimal { .. })
        ));
        // Only the first comma is normalized.
        assert!(to_base_units("1,000,5", 2).is_err());
    }

    #[test]
    fn test_unsupported_decimals() {
        assert_eq!(pow10(29), Err(ScalingError::UnsupportedDecimals(29)));
        assert!(pow10(28).is_ok());
    }

    #[test]
    fn test_overflow_reported() {
        let result = to_base_units("79228162514264337593543950335", 2);
        assert!(matches!(result, Err(ScalingError::Overflow { .. })));
    }

    #[test]
    fn test_digit_separators_rejected() {
        assert!(matches!(
            to_base_units("1_000", 0),
            Err(ScalingError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_saturating_scale() {
        assert_eq!(saturating_to_base_units("100000000000", 18).unwrap(), Decimal::MAX);
        assert_eq!(saturating_to_base_units("-100000000000", 18).unwrap(), Decimal::MIN);
        assert_eq!(saturating_to_base_units("1,5", 2).unwrap(), dec("150"));
        assert!(saturating_to_base_units("abc", 18).is_err());
        assert!(to_base_units("100000000000", 18).is_err());
    }

    #[test]
    fn test_from_base_units() {
        assert_eq!(
            from_base_units(dec("100000000000000000000"), 18).unwrap(),
            dec("100")
        );
        assert_eq!(from_base_units(dec("150"), 2).unwrap().to_string(), "1.5");
    }
}
