//! Formatting tests for decimal, fraction and mixed-number rendering
//!
//! Explicit separators are passed wherever output is compared, so these tests
//! do not depend on the locale of the machine running them.

use bigfraction_math::*;

fn r(n: i64, d: i64) -> Rational {
    Rational::new(BigInt::from(n), BigInt::from(d)).unwrap()
}

fn en(precision: Precision) -> DecimalFormat {
    DecimalFormat::new().with_precision(precision).with_separators(Separators::default())
}

#[test]
fn test_fraction_string() {
    assert_eq!(r(16, 9).to_fraction_string(), "16/9");
    assert_eq!(r(-6, 4).to_fraction_string(), "-3/2");
    assert_eq!(r(5, 1).to_fraction_string(), "5/1");
    assert_eq!(Rational::zero().to_fraction_string(), "0/1");
}

#[test]
fn test_fraction_string_is_not_a_decimal_literal() {
    let text = r(1, 3).to_fraction_string();
    assert!(Rational::parse(&text).is_err());
    assert_eq!(Rational::from_fraction_str(&text).unwrap(), r(1, 3));
}

#[test]
fn test_decimal_expansion_examples() {
    assert_eq!(r(1, 3).to_decimal_string_with(&en(5)), "0.33333");
    assert_eq!(r(1, 4).to_decimal_string_with(&en(20)), "0.25");
    assert_eq!(r(22, 7).to_decimal_string_with(&en(10)), "3.1428571428");
    assert_eq!(r(-5, 6).to_decimal_string_with(&en(4)), "-0.8333");
}

#[test]
fn test_decimal_default_precision() {
    let text = r(2, 3).to_decimal_string_with(&en(DEFAULT_PRECISION));
    assert_eq!(text, "0.66666666666666666666");
}

#[test]
fn test_decimal_of_float_value() {
    let tenth = Rational::from_f64(0.1).unwrap();
    assert_eq!(tenth.to_decimal_string_with(&en(20)), "0.10000000000000000555");
    assert_eq!(tenth.to_decimal_string_with(&en(55)), "0.1000000000000000055511151231257827021181583404541015625");
}

#[test]
fn test_decimal_thousands_grouping() {
    assert_eq!(r(38402160, 1).to_decimal_string_with(&en(2)), "38,402,160");
    assert_eq!(r(-1234567, 2).to_decimal_string_with(&en(2)), "-617,283.5");

    let comma = en(2).with_separators(Separators::decimal_comma());
    assert_eq!(r(-1234567, 2).to_decimal_string_with(&comma), "-617.283,5");

    let swiss = en(1).with_separators(Separators::from_locale("de_CH.UTF-8"));
    assert_eq!(r(1000001, 10).to_decimal_string_with(&swiss), "100\u{2019}000.1");
}

#[test]
fn test_decimal_precision_zero_truncates() {
    assert_eq!(r(7, 2).to_decimal_string_with(&en(0)), "3");
    assert_eq!(r(-7, 2).to_decimal_string_with(&en(0)), "-3");
}

#[test]
fn test_system_separators_used_by_default() {
    let separators = *Separators::system();
    let text = r(3, 2).to_decimal_string(DEFAULT_PRECISION);
    assert_eq!(text, format!("1{}5", separators.decimal));
}

#[test]
fn test_expand_decimal_reports_cycle() {
    let expansion = expand_decimal(&BigInt::from(1), &BigInt::from(12), 8);
    assert_eq!(expansion.digits, "08333333");
    assert_eq!(expansion.cycle_start, Some(2));
    assert!(!expansion.negative);
}

#[test]
fn test_mixed_numbers() {
    assert_eq!(format_mixed(&r(10, 3), 3, &en(20)).unwrap(), "3 1/3");
    assert_eq!(format_mixed(&r(1, 3), 3, &en(20)).unwrap(), "1/3");
    assert_eq!(format_mixed(&r(-1, 3), 3, &en(20)).unwrap(), "-1/3");
    assert_eq!(format_mixed(&r(4001, 3), 3, &en(20)).unwrap(), "1,333 2/3");
    assert_eq!(format_mixed(&r(3, 4), 3, &en(20)).unwrap(), "0.75");
    assert_eq!(format_mixed(&r(6, 1), 3, &en(20)).unwrap(), "6");
}

#[test]
fn test_split_fraction_negative() {
    let parts = r(-7, 2).split_fraction();
    assert_eq!(parts.whole, BigInt::from(-3));
    let fraction = parts.fraction.unwrap();
    assert_eq!(fraction.numerator, BigInt::from(-1));
    assert_eq!(fraction.denominator, BigInt::from(2));
}
