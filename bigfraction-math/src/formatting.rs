//! Formatting utilities for rationals
//!
//! Decimal expansion by long division with repeating-cycle detection,
//! thousands grouping of the integer part, and mixed-number rendering.

use indexmap::IndexSet;
use log::trace;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::locale::Separators;
use crate::rational::{Precision, Rational, RationalResult, DEFAULT_PRECISION};

/// Format configuration for decimal rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalFormat {
    /// Maximum number of fractional digits
    pub precision: Precision,

    /// Decimal and thousands separators
    pub separators: Separators,

    /// Group the integer part with the thousands separator
    pub grouping: bool,
}

impl Default for DecimalFormat {
    /// Default precision with the process-wide separators
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION, separators: *Separators::system(), grouping: true }
    }
}

impl DecimalFormat {
    /// Default configuration, same as `Default::default()`
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximum number of fractional digits
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Use explicit separators instead of the system ones
    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Enable or disable thousands grouping
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }
}

/// Result of long division of a rational's magnitude
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalExpansion {
    /// Sign of the expanded value; zero is never negative
    pub negative: bool,
    /// Truncated integer part of the magnitude
    pub integer: BigInt,
    /// Fractional digits, without trailing zeros past a terminating expansion
    pub digits: String,
    /// Offset into `digits` where the repeating cycle starts, if one was found
    pub cycle_start: Option<usize>,
}

/// Expand `numerator/denominator` to at most `precision` fractional digits
///
/// Each remainder is recorded in insertion order. When one recurs, the digits
/// from its first occurrence onward form the cycle, and any digits still
/// missing up to `precision` are replayed from it instead of divided out.
pub fn expand_decimal(numerator: &BigInt, denominator: &BigInt, precision: Precision) -> DecimalExpansion {
    let precision = precision as usize;
    let negative = numerator.is_negative() != denominator.is_negative() && !numerator.is_zero();
    let numerator = numerator.abs();
    let denominator = denominator.abs();

    let integer = &numerator / &denominator;
    let mut remainder = &numerator % &denominator;
    let mut digits = String::new();
    let mut seen: IndexSet<BigInt> = IndexSet::new();
    let mut cycle_start = None;

    while !remainder.is_zero() && digits.len() < precision {
        if let Some(start) = seen.get_index_of(&remainder) {
            trace!("repeating cycle of length {} after {} digits", digits.len() - start, start);
            let cycle = digits[start..].to_string();
            let missing = precision - digits.len();
            digits.extend(cycle.chars().cycle().take(missing));
            cycle_start = Some(start);
            break;
        }

        seen.insert(remainder.clone());
        remainder = remainder * 10u32;
        let digit = &remainder / &denominator;
        remainder = remainder % &denominator;
        digits.push_str(&digit.to_string());
    }

    DecimalExpansion { negative, integer, digits, cycle_start }
}

/// Render a rational in decimal notation
pub fn format_decimal(rational: &Rational, config: &DecimalFormat) -> String {
    let expansion = expand_decimal(rational.numerator(), rational.denominator(), config.precision);

    let integer_digits = expansion.integer.to_string();
    let integer_part = if config.grouping {
        format_integer_with_separators(&integer_digits, config.separators.thousands)
    } else {
        integer_digits
    };

    let mut result = String::new();
    if expansion.negative && !(expansion.integer.is_zero() && expansion.digits.is_empty()) {
        result.push('-');
    }
    result.push_str(&integer_part);
    if !expansion.digits.is_empty() {
        result.push(config.separators.decimal);
        result.push_str(&expansion.digits);
    }
    result
}

/// Format integer digits with thousands separators
pub fn format_integer_with_separators(digits: &str, separator: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let mut result = String::new();
    let chars: Vec<char> = digits.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        result.push(ch);
        let remaining = chars.len() - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            result.push(separator);
        }
    }

    result
}

/// Render as a mixed number when the decimal form needs at least `threshold`
/// fractional digits, otherwise in decimal notation
///
/// Mixed numbers read `W n/d`, with the whole part left out when it is zero
/// and the sign written once in front.
pub fn format_mixed(rational: &Rational, threshold: usize, config: &DecimalFormat) -> RationalResult<String> {
    if !rational.has_at_least_n_fractional_digits(threshold)? {
        return Ok(format_decimal(rational, config));
    }

    let parts = rational.split_fraction();
    let Some(fraction) = parts.fraction else {
        return Ok(format_decimal(rational, config));
    };

    let sign = if rational.is_negative() { "-" } else { "" };
    let proper = format!("{}/{}", fraction.numerator.abs(), fraction.denominator);
    if parts.whole.is_zero() {
        Ok(format!("{}{}", sign, proper))
    } else {
        let whole = parts.whole.abs().to_string();
        let whole = if config.grouping {
            format_integer_with_separators(&whole, config.separators.thousands)
        } else {
            whole
        };
        Ok(format!("{}{} {}", sign, whole, proper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    fn config(precision: Precision) -> DecimalFormat {
        DecimalFormat::new().with_precision(precision).with_separators(Separators::default())
    }

    #[test]
    fn test_expand_terminating() {
        let expansion = expand_decimal(&BigInt::from(1), &BigInt::from(4), 20);
        assert_eq!(expansion.integer, BigInt::from(0));
        assert_eq!(expansion.digits, "25");
        assert_eq!(expansion.cycle_start, None);
    }

    #[test]
    fn test_expand_repeating() {
        let expansion = expand_decimal(&BigInt::from(1), &BigInt::from(3), 5);
        assert_eq!(expansion.digits, "33333");
        assert_eq!(expansion.cycle_start, Some(0));

        let expansion = expand_decimal(&BigInt::from(1), &BigInt::from(6), 6);
        assert_eq!(expansion.digits, "166666");
        assert_eq!(expansion.cycle_start, Some(1));

        let expansion = expand_decimal(&BigInt::from(1), &BigInt::from(7), 15);
        assert_eq!(expansion.digits, "142857142857142");
    }

    #[test]
    fn test_expand_truncates_at_precision() {
        let expansion = expand_decimal(&BigInt::from(2), &BigInt::from(3), 3);
        assert_eq!(expansion.digits, "666");

        let expansion = expand_decimal(&BigInt::from(7), &BigInt::from(2), 0);
        assert_eq!(expansion.integer, BigInt::from(3));
        assert_eq!(expansion.digits, "");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(&r(1, 3), &config(5)), "0.33333");
        assert_eq!(format_decimal(&r(1, 4), &config(20)), "0.25");
        assert_eq!(format_decimal(&r(-1, 4), &config(20)), "-0.25");
        assert_eq!(format_decimal(&r(5, 1), &config(20)), "5");
        assert_eq!(format_decimal(&Rational::zero(), &config(20)), "0");
    }

    #[test]
    fn test_format_decimal_grouping() {
        assert_eq!(format_decimal(&r(1234567, 1), &config(2)), "1,234,567");
        assert_eq!(format_decimal(&r(123456789, 100), &config(2)), "1,234,567.89");
        assert_eq!(format_decimal(&r(123456789, 100), &config(2).with_grouping(false)), "1234567.89");

        let comma = config(2).with_separators(Separators::decimal_comma());
        assert_eq!(format_decimal(&r(123456789, 100), &comma), "1.234.567,89");
    }

    #[test]
    fn test_format_integer_with_separators() {
        assert_eq!(format_integer_with_separators("123", ','), "123");
        assert_eq!(format_integer_with_separators("1234", ','), "1,234");
        assert_eq!(format_integer_with_separators("123456", ' '), "123 456");
    }

    #[test]
    fn test_format_mixed() {
        assert_eq!(format_mixed(&r(7, 3), 3, &config(20)).unwrap(), "2 1/3");
        assert_eq!(format_mixed(&r(-7, 3), 3, &config(20)).unwrap(), "-2 1/3");
        assert_eq!(format_mixed(&r(1, 8), 3, &config(20)).unwrap(), "1/8");
        assert_eq!(format_mixed(&r(5, 2), 3, &config(20)).unwrap(), "2.5");
        assert!(format_mixed(&r(5, 2), 0, &config(20)).is_err());
    }
}
