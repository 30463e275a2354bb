//! Rational module providing exact arbitrary precision fractions
//!
//! This module implements the Rational type: a numerator/denominator pair of
//! BigInt values kept in canonical form (positive denominator, coprime parts)
//! after every operation. Values are immutable; every operation returns a new
//! Rational.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU64;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formatting::{format_decimal, DecimalFormat};

/// Precision type for decimal expansion, counted in fractional digits
pub type Precision = u16;

/// Default number of fractional digits produced by decimal expansion
pub const DEFAULT_PRECISION: Precision = 20;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;
const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
const IMPLICIT_BIT: u64 = 0x0010_0000_0000_0000;

/// Bias plus mantissa width: a normal double is `mantissa * 2^(exponent - 1075)`
const EXPONENT_OFFSET: i64 = 1075;

/// Errors that can occur during rational operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// Malformed input or an argument outside the operation's domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Divisor or reciprocal of zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Operation that has no exact rational result
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// Value outside the range of the requested machine type
    #[error("Value too large for target type: {0}")]
    Overflow(String),
}

/// Result type for rational operations
pub type RationalResult<T> = Result<T, RationalError>;

/// The closed set of inputs a Rational can be built from
#[derive(Debug, Clone, PartialEq)]
pub enum RationalInput {
    /// Whole number
    Integer(BigInt),
    /// Double, converted bit-exactly
    Float(f64),
    /// Decimal literal such as `"-12.375"`
    Decimal(String),
    /// Already built value
    Rational(Rational),
}

impl RationalInput {
    /// Convert this input into a canonical Rational
    pub fn into_rational(self) -> RationalResult<Rational> {
        match self {
            RationalInput::Integer(value) => Ok(Rational::from_integer(value)),
            RationalInput::Float(value) => Rational::from_f64(value),
            RationalInput::Decimal(value) => Rational::parse(&value),
            RationalInput::Rational(value) => Ok(value),
        }
    }
}

macro_rules! integer_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RationalInput {
                fn from(value: $t) -> Self {
                    RationalInput::Integer(BigInt::from(value))
                }
            }

            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Rational::from_integer(BigInt::from(value))
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for RationalInput {
    fn from(value: BigInt) -> Self {
        RationalInput::Integer(value)
    }
}

impl From<f64> for RationalInput {
    fn from(value: f64) -> Self {
        RationalInput::Float(value)
    }
}

impl From<&str> for RationalInput {
    fn from(value: &str) -> Self {
        RationalInput::Decimal(value.to_string())
    }
}

impl From<String> for RationalInput {
    fn from(value: String) -> Self {
        RationalInput::Decimal(value)
    }
}

impl From<Rational> for RationalInput {
    fn from(value: Rational) -> Self {
        RationalInput::Rational(value)
    }
}

impl From<&Rational> for RationalInput {
    fn from(value: &Rational) -> Self {
        RationalInput::Rational(value.clone())
    }
}

/// The fractional remainder of a mixed number, `numerator/denominator`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProperFraction {
    /// Signed remainder, smaller in magnitude than the denominator
    pub numerator: BigInt,
    /// Positive denominator
    pub denominator: BigInt,
}

/// A value split into a whole part and an optional proper fraction
///
/// The whole part is truncated toward zero, so the fraction carries the
/// sign of the original value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedParts {
    /// Integer part, truncated toward zero
    pub whole: BigInt,
    /// Remaining fraction, `None` for whole numbers
    pub fraction: Option<ProperFraction>,
}

/// An exact fraction in lowest terms with a positive denominator
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

/// Greatest common divisor of two integers by the Euclidean algorithm
///
/// Signs are ignored and `gcd(0, b) == |b|`.
pub fn gcd_bigint(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Quotient rounded toward negative infinity
pub(crate) fn floor_div(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if !remainder.is_zero() && remainder.is_negative() != denominator.is_negative() {
        quotient - 1
    } else {
        quotient
    }
}

impl Rational {
    /// Canonicalize a numerator/denominator pair. The denominator must be non-zero.
    fn canonical(numerator: BigInt, denominator: BigInt) -> Self {
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let gcd = gcd_bigint(&numerator, &denominator);
        if gcd.is_one() {
            Self { numerator, denominator }
        } else {
            Self { numerator: numerator / &gcd, denominator: denominator / &gcd }
        }
    }

    /// Create a rational from a numerator and denominator
    pub fn new(numerator: BigInt, denominator: BigInt) -> RationalResult<Self> {
        if denominator.is_zero() {
            return Err(RationalError::InvalidArgument("denominator cannot be zero".to_string()));
        }
        Ok(Self::canonical(numerator, denominator))
    }

    /// Create a rational from an integer
    pub fn from_integer(value: BigInt) -> Self {
        Self { numerator: value, denominator: BigInt::one() }
    }

    /// `numerator / denominator` for a denominator that cannot be zero
    pub fn from_ratio(numerator: i64, denominator: NonZeroU64) -> Self {
        Self::canonical(BigInt::from(numerator), BigInt::from(denominator.get()))
    }

    /// Create a rational from a machine integer
    pub fn from_i64(value: i64) -> Self {
        Self::from_integer(BigInt::from(value))
    }

    /// The canonical zero, `0/1`
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// The canonical one, `1/1`
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// Create the exact binary value of a double
    ///
    /// The bit pattern is decomposed into sign, biased exponent and mantissa,
    /// so `0.1` yields `3602879701896397/36028797018963968` rather than `1/10`.
    /// Subnormals are handled; non-finite values are rejected.
    pub fn from_f64(value: f64) -> RationalResult<Self> {
        if !value.is_finite() {
            return Err(RationalError::InvalidArgument(format!(
                "cannot create rational from non-finite value: {}",
                value
            )));
        }

        if value == 0.0 {
            return Ok(Self::zero());
        }

        let bits = value.to_bits();
        let negative = bits & SIGN_MASK != 0;
        let biased_exponent = ((bits & EXPONENT_MASK) >> 52) as i64;
        let stored_mantissa = bits & MANTISSA_MASK;

        // Subnormals have no implicit bit and share the smallest exponent
        let (mantissa, exponent) = if biased_exponent == 0 {
            (stored_mantissa, 1 - EXPONENT_OFFSET)
        } else {
            (stored_mantissa | IMPLICIT_BIT, biased_exponent - EXPONENT_OFFSET)
        };

        let mut numerator = BigInt::from(mantissa);
        let mut denominator = BigInt::one();
        if exponent >= 0 {
            numerator = numerator << (exponent as usize);
        } else {
            denominator = denominator << (exponent.unsigned_abs() as usize);
        }

        if negative {
            numerator = -numerator;
        }

        Ok(Self::canonical(numerator, denominator))
    }

    /// Parse a decimal literal such as `-12.375`, `+3` or `.5`
    ///
    /// Only decimal notation is understood; use `from_fraction_str` for
    /// `n/d` literals.
    pub fn parse(value: &str) -> RationalResult<Self> {
        let trimmed = value.trim();
        let invalid = || RationalError::InvalidArgument(format!("malformed decimal: {:?}", value));

        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let parse_digits = |digits: &str| -> RationalResult<BigInt> {
            if digits.is_empty() {
                Ok(BigInt::zero())
            } else {
                digits.parse::<BigInt>().map_err(|_| invalid())
            }
        };

        let scale = BigInt::from(10).pow(fraction.len() as u32);
        let mut numerator = parse_digits(whole)? * &scale + parse_digits(fraction)?;
        if negative {
            numerator = -numerator;
        }

        Ok(Self::canonical(numerator, scale))
    }

    /// Parse either an `n/d` fraction literal or a decimal literal
    pub fn from_fraction_str(value: &str) -> RationalResult<Self> {
        match value.split_once('/') {
            None => Self::parse(value),
            Some((numerator, denominator)) => {
                let numerator = Self::parse(numerator)?;
                let denominator = Self::parse(denominator)?;
                Self::ratio_of(&numerator, &denominator)
            }
        }
    }

    /// Build a rational from any supported input
    pub fn build(input: impl Into<RationalInput>) -> RationalResult<Self> {
        input.into().into_rational()
    }

    /// Build `numerator / denominator` from any two supported inputs
    pub fn build_ratio(
        numerator: impl Into<RationalInput>,
        denominator: impl Into<RationalInput>,
    ) -> RationalResult<Self> {
        let numerator = numerator.into().into_rational()?;
        let denominator = denominator.into().into_rational()?;
        Self::ratio_of(&numerator, &denominator)
    }

    fn ratio_of(numerator: &Rational, denominator: &Rational) -> RationalResult<Self> {
        if denominator.is_zero() {
            return Err(RationalError::InvalidArgument("denominator cannot be zero".to_string()));
        }
        Ok(Self::canonical(
            &numerator.numerator * &denominator.denominator,
            &numerator.denominator * &denominator.numerator,
        ))
    }

    /// Get the numerator (carries the sign)
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Get the denominator (always positive)
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Re-run canonicalization; a no-op on any value this type produced
    pub fn simplify(&self) -> Self {
        Self::canonical(self.numerator.clone(), self.denominator.clone())
    }

    /// Greatest common divisor of two fractions
    ///
    /// Both are brought over the common denominator `a.d * b.d`; the result
    /// is the integer gcd of the scaled numerators over that denominator.
    pub fn gcd(a: &Rational, b: &Rational) -> Rational {
        let a_scaled = &a.numerator * &b.denominator;
        let b_scaled = &b.numerator * &a.denominator;
        let common = &a.denominator * &b.denominator;
        Self::canonical(gcd_bigint(&a_scaled, &b_scaled), common)
    }

    /// Sum of two fractions
    pub fn add(&self, other: &Rational) -> Rational {
        if self.denominator == other.denominator {
            return Self::canonical(&self.numerator + &other.numerator, self.denominator.clone());
        }
        Self::canonical(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Difference `self - other`
    pub fn subtract(&self, other: &Rational) -> Rational {
        if self.denominator == other.denominator {
            return Self::canonical(&self.numerator - &other.numerator, self.denominator.clone());
        }
        Self::canonical(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Product of two fractions
    pub fn multiply(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.numerator;
        let denominator = if self.denominator.is_one() {
            other.denominator.clone()
        } else if other.denominator.is_one() {
            self.denominator.clone()
        } else {
            &self.denominator * &other.denominator
        };
        Self::canonical(numerator, denominator)
    }

    /// Divide by `other`, failing when `other` is zero
    pub fn divide(&self, other: &Rational) -> RationalResult<Rational> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::canonical(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// `⌊self / other⌋`, rounded toward negative infinity
    pub fn floor_divide(&self, other: &Rational) -> RationalResult<Rational> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let numerator = &self.numerator * &other.denominator;
        let denominator = &self.denominator * &other.numerator;
        Ok(Self::from_integer(floor_div(&numerator, &denominator)))
    }

    /// True modulo: `self - ⌊self / other⌋ * other`, taking the divisor's sign
    pub fn modulo(&self, other: &Rational) -> RationalResult<Rational> {
        let quotient = self.floor_divide(other)?;
        Ok(self.subtract(&quotient.multiply(other)))
    }

    /// Raise to an integral power
    ///
    /// The exponent must reduce to an integer. Negative exponents raise the
    /// reciprocal. The result is exact; exponents beyond `u32` are refused.
    pub fn power(&self, exponent: &Rational) -> RationalResult<Rational> {
        if !exponent.is_integral() {
            return Err(RationalError::UnsupportedOperation(format!(
                "fractional exponent {} is not supported",
                exponent.to_fraction_string()
            )));
        }

        let magnitude = exponent.numerator.abs().to_u32().ok_or_else(|| {
            RationalError::UnsupportedOperation(format!(
                "exponent {} is too large",
                exponent.numerator
            ))
        })?;

        let numerator = self.numerator.pow(magnitude);
        let denominator = self.denominator.pow(magnitude);

        if exponent.is_negative() {
            if numerator.is_zero() {
                return Err(RationalError::DivisionByZero);
            }
            Ok(Self::canonical(denominator, numerator))
        } else {
            Ok(Self::canonical(numerator, denominator))
        }
    }

    /// Approximate `n`th root
    ///
    /// Numerator and denominator are rooted separately in floating point and
    /// each result is converted back exactly, so the answer is only as good
    /// as `f64`. Odd roots keep the sign; even roots of negatives fail.
    pub fn root_n(&self, n: i64) -> RationalResult<Rational> {
        if n < 1 {
            return Err(RationalError::InvalidArgument(format!(
                "root index must be at least 1, got {}",
                n
            )));
        }
        if n == 1 {
            return Ok(self.clone());
        }
        if self.is_negative() && n % 2 == 0 {
            return Err(RationalError::InvalidArgument(format!(
                "even root of negative value {}",
                self.to_fraction_string()
            )));
        }

        let root = |value: &BigInt| -> RationalResult<Rational> {
            let value = value.to_f64().ok_or_else(|| {
                RationalError::Overflow(format!("{} does not fit in f64", value))
            })?;
            let rooted = match n {
                2 => value.sqrt(),
                3 => value.cbrt(),
                _ => value.powf(1.0 / n as f64),
            };
            Rational::from_f64(rooted)
        };

        let magnitude = root(&self.numerator.abs())?.divide(&root(&self.denominator)?)?;
        Ok(if self.is_negative() { -magnitude } else { magnitude })
    }

    /// Swap numerator and denominator, failing for zero
    pub fn reciprocal(&self) -> RationalResult<Rational> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::canonical(self.denominator.clone(), self.numerator.clone()))
    }

    /// Absolute value; the denominator is already positive
    pub fn abs(&self) -> Rational {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.clone() }
    }

    /// Additive inverse
    pub fn negated(&self) -> Rational {
        Self { numerator: -&self.numerator, denominator: self.denominator.clone() }
    }

    /// Three-way comparison by cross-multiplication
    pub fn compare(&self, other: &Rational) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        lhs.cmp(&rhs)
    }

    /// Value equality through `compare`
    pub fn equals(&self, other: &Rational) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Structural equality of numerator and denominator
    pub fn strict_eq(&self, other: &Rational) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }

    /// `self < other`
    pub fn less(&self, other: &Rational) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// `self <= other`
    pub fn less_or_equal(&self, other: &Rational) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// `self > other`
    pub fn greater(&self, other: &Rational) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// `self >= other`
    pub fn greater_or_equal(&self, other: &Rational) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Check if the value is exactly one
    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Whether the value is a whole number
    pub fn is_integral(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// Check if the value is below zero
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Check if the value is above zero
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Returns -1, 0, or 1
    pub fn signum(&self) -> i32 {
        if self.numerator.is_zero() {
            0
        } else if self.numerator.is_positive() {
            1
        } else {
            -1
        }
    }

    /// Convert to f64 - may lose precision
    pub fn to_f64(&self) -> RationalResult<f64> {
        self.to_big_rational().to_f64().ok_or_else(|| {
            RationalError::Overflow(format!("{} does not fit in f64", self.to_fraction_string()))
        })
    }

    /// The value itself when integral, otherwise its floor
    pub fn to_bigint(&self) -> BigInt {
        if self.denominator.is_one() {
            self.numerator.clone()
        } else {
            floor_div(&self.numerator, &self.denominator)
        }
    }

    /// Same as `to_bigint`, narrowed to i64
    pub fn to_i64(&self) -> RationalResult<i64> {
        let value = self.to_bigint();
        value.to_i64().ok_or_else(|| RationalError::Overflow(format!("{} does not fit in i64", value)))
    }

    /// Convert to num-rational's representation
    pub fn to_big_rational(&self) -> BigRational {
        BigRational::new_raw(self.numerator.clone(), self.denominator.clone())
    }

    /// `"numerator/denominator"`, exact and locale independent
    pub fn to_fraction_string(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    /// Decimal expansion with the given number of fractional digits, using the
    /// process-wide separators
    pub fn to_decimal_string(&self, precision: Precision) -> String {
        format_decimal(self, &DecimalFormat::default().with_precision(precision))
    }

    /// Decimal expansion under an explicit format configuration
    pub fn to_decimal_string_with(&self, config: &DecimalFormat) -> String {
        format_decimal(self, config)
    }

    /// Split into a truncated whole part and the remaining proper fraction
    pub fn split_fraction(&self) -> MixedParts {
        let whole = &self.numerator / &self.denominator;
        let remainder = &self.numerator % &self.denominator;

        let fraction = if remainder.is_zero() {
            None
        } else {
            Some(ProperFraction { numerator: remainder, denominator: self.denominator.clone() })
        };

        MixedParts { whole, fraction }
    }

    /// Number of fractional digits in the decimal expansion, `None` when it
    /// never terminates
    pub fn fractional_digit_count(&self) -> Option<usize> {
        let mut reduced = self.denominator.clone();
        for factor in [2u32, 5u32] {
            let factor = BigInt::from(factor);
            while (&reduced % &factor).is_zero() {
                reduced = reduced / &factor;
            }
        }
        if !reduced.is_one() {
            return None;
        }

        // Only 2s and 5s remain in the denominator, so the division terminates
        let mut count = 0;
        let mut remainder = (&self.numerator % &self.denominator).abs();
        while !remainder.is_zero() {
            remainder = (remainder * 10u32) % &self.denominator;
            count += 1;
        }
        Some(count)
    }

    /// Whether the decimal expansion needs at least `n` fractional digits
    ///
    /// Always true for non-terminating expansions. `n` must be positive.
    pub fn has_at_least_n_fractional_digits(&self, n: usize) -> RationalResult<bool> {
        if n < 1 {
            return Err(RationalError::InvalidArgument(
                "digit count must be a positive integer".to_string(),
            ));
        }
        Ok(match self.fractional_digit_count() {
            None => true,
            Some(count) => count >= n,
        })
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl TryFrom<BigRational> for Rational {
    type Error = RationalError;

    // `BigRational::new_raw` can carry a zero denominator
    fn try_from(value: BigRational) -> RationalResult<Self> {
        Self::new(value.numer().clone(), value.denom().clone())
    }
}

impl From<Rational> for BigRational {
    fn from(value: Rational) -> Self {
        BigRational::new_raw(value.numerator, value.denominator)
    }
}

impl TryFrom<f64> for Rational {
    type Error = RationalError;

    fn try_from(value: f64) -> RationalResult<Self> {
        Self::from_f64(value)
    }
}

impl TryFrom<&str> for Rational {
    type Error = RationalError;

    fn try_from(value: &str) -> RationalResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Rational {
    type Error = RationalError;

    fn try_from(value: String) -> RationalResult<Self> {
        Self::parse(&value)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialized as the exact "n/d" string so no precision is lost
impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_fraction_string())
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct RationalVisitor;

        impl<'de> Visitor<'de> for RationalVisitor {
            type Value = Rational;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a fraction string such as \"16/9\" or a decimal literal")
            }

            fn visit_str<E>(self, value: &str) -> Result<Rational, E>
            where
                E: de::Error,
            {
                Rational::from_fraction_str(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(RationalVisitor)
    }
}

// Arithmetic operator implementations
macro_rules! infallible_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                Rational::$inherent(&self, &other)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, other: &Rational) -> Rational {
                Rational::$inherent(&self, other)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                Rational::$inherent(self, &other)
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, other: &Rational) -> Rational {
                Rational::$inherent(self, other)
            }
        }
    };
}

infallible_op!(Add, add, add);
infallible_op!(Sub, sub, subtract);
infallible_op!(Mul, mul, multiply);

// Division and modulo can fail, so their operators yield a Result
macro_rules! fallible_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait for Rational {
            type Output = RationalResult<Rational>;

            fn $method(self, other: Rational) -> Self::Output {
                Rational::$inherent(&self, &other)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = RationalResult<Rational>;

            fn $method(self, other: &Rational) -> Self::Output {
                Rational::$inherent(&self, other)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = RationalResult<Rational>;

            fn $method(self, other: Rational) -> Self::Output {
                Rational::$inherent(self, &other)
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = RationalResult<Rational>;

            fn $method(self, other: &Rational) -> Self::Output {
                Rational::$inherent(self, other)
            }
        }
    };
}

fallible_op!(Div, div, divide);
fallible_op!(Rem, rem, modulo);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational { numerator: -self.numerator, denominator: self.denominator }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}
