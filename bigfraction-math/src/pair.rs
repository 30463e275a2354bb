//! RationalPair module: width x height quantities
//!
//! A RationalPair holds two independently canonical Rationals and adds the
//! pair-level operations used for resolutions and aspect ratios: scaling,
//! alignment, area ordering, and the `WxH` / `W:H` notations.

use std::cmp::{self, Ordering};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formatting::{format_decimal, DecimalFormat};
use crate::rational::{Rational, RationalError, RationalInput, RationalResult};

/// Separator of the dimension notation, `1920x1080`
pub const DIMENSION_SEPARATOR: char = 'x';

/// Separator of the ratio notation, `16:9`
pub const RATIO_SEPARATOR: char = ':';

/// Error type for pair operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    /// Text did not split into exactly two sides
    #[error("Invalid notation: {0}")]
    InvalidNotation(String),

    /// Rational operation error
    #[error("Rational operation failed: {0}")]
    Rational(#[from] RationalError),
}

/// Result type for pair operations
pub type PairResult<T> = Result<T, PairError>;

/// An ordered (width, height) pair of rationals
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RationalPair {
    width: Rational,
    height: Rational,
}

impl RationalPair {
    /// Create a pair from two rationals
    pub fn new(width: Rational, height: Rational) -> Self {
        Self { width, height }
    }

    /// Build a pair from any two supported inputs
    pub fn build(
        width: impl Into<RationalInput>,
        height: impl Into<RationalInput>,
    ) -> RationalResult<Self> {
        Ok(Self::new(Rational::build(width)?, Rational::build(height)?))
    }

    /// Get the width
    pub fn width(&self) -> &Rational {
        &self.width
    }

    /// Get the height
    pub fn height(&self) -> &Rational {
        &self.height
    }

    /// Divide both components by their greatest common divisor
    ///
    /// `1920x1080` simplifies to `16x9`. Fails when both components are zero.
    pub fn simplify(&self) -> RationalResult<Self> {
        let gcd = Rational::gcd(&self.width, &self.height);
        self.descale(&gcd)
    }

    /// Multiply both components by `factor`
    pub fn scale(&self, factor: &Rational) -> Self {
        Self::new(self.width.multiply(factor), self.height.multiply(factor))
    }

    /// Divide both components by `factor`, failing when it is zero
    pub fn descale(&self, factor: &Rational) -> RationalResult<Self> {
        Ok(Self::new(self.width.divide(factor)?, self.height.divide(factor)?))
    }

    /// Whether both components are whole numbers
    pub fn is_integral(&self) -> bool {
        self.width.is_integral() && self.height.is_integral()
    }

    /// `width * height`, the pixel or cell count
    pub fn area(&self) -> Rational {
        self.width.multiply(&self.height)
    }

    /// Strictly wider and strictly taller than `other`
    pub fn exceeds_both_axes(&self, other: &RationalPair) -> bool {
        self.width.greater(&other.width) && self.height.greater(&other.height)
    }

    /// Strictly wider or strictly taller than `other`
    pub fn exceeds_either_axis(&self, other: &RationalPair) -> bool {
        self.width.greater(&other.width) || self.height.greater(&other.height)
    }

    /// Strictly larger area than `other`
    pub fn exceeds_area(&self, other: &RationalPair) -> bool {
        self.area().greater(&other.area())
    }

    /// Whether both components are exact integer multiples of `other`'s
    pub fn is_aligned(&self, other: &RationalPair) -> RationalResult<bool> {
        Ok(self.width.modulo(&other.width)?.is_zero() && self.height.modulo(&other.height)?.is_zero())
    }

    /// The largest uniform factor that keeps `self` within `other` on both axes
    pub fn largest_scale_factor(&self, other: &RationalPair) -> RationalResult<Rational> {
        let ratio_x = self.width.divide(&other.width)?;
        let ratio_y = self.height.divide(&other.height)?;
        Ok(cmp::min(ratio_x, ratio_y))
    }

    /// Component-wise absolute difference
    pub fn alignment_error(&self, other: &RationalPair) -> Self {
        Self::new(
            self.width.subtract(&other.width).abs(),
            self.height.subtract(&other.height).abs(),
        )
    }

    /// Component-wise absolute value
    pub fn abs(&self) -> Self {
        Self::new(self.width.abs(), self.height.abs())
    }

    /// Compare by area, not component-wise
    pub fn cmp_area(&self, other: &RationalPair) -> Ordering {
        self.area().compare(&other.area())
    }

    /// Larger area than `other`
    pub fn greater_than(&self, other: &RationalPair) -> bool {
        self.cmp_area(other) == Ordering::Greater
    }

    /// Smaller area than `other`
    pub fn less_than(&self, other: &RationalPair) -> bool {
        self.cmp_area(other) == Ordering::Less
    }

    /// Area at least `other`'s
    pub fn greater_or_equal(&self, other: &RationalPair) -> bool {
        self.cmp_area(other) != Ordering::Less
    }

    /// Area at most `other`'s
    pub fn less_or_equal(&self, other: &RationalPair) -> bool {
        self.cmp_area(other) != Ordering::Greater
    }

    /// Component-wise value equality
    pub fn equals(&self, other: &RationalPair) -> bool {
        self.width.equals(&other.width) && self.height.equals(&other.height)
    }

    /// Parse `"1920x1080"`
    pub fn from_dimension_notation(text: &str) -> PairResult<Self> {
        Self::parse_notation(text, DIMENSION_SEPARATOR)
    }

    /// Parse `"16:9"`
    pub fn from_ratio_notation(text: &str) -> PairResult<Self> {
        Self::parse_notation(text, RATIO_SEPARATOR)
    }

    fn parse_notation(text: &str, separator: char) -> PairResult<Self> {
        let mut sides = text.split(separator);
        match (sides.next(), sides.next(), sides.next()) {
            (Some(width), Some(height), None) => {
                Ok(Self::new(Rational::parse(width)?, Rational::parse(height)?))
            }
            _ => Err(PairError::InvalidNotation(format!(
                "expected two values separated by {:?}, got {:?}",
                separator, text
            ))),
        }
    }

    /// `"WxH"` with the system separators
    pub fn to_dimension_notation(&self) -> String {
        self.to_dimension_notation_with(&DecimalFormat::default())
    }

    /// `"WxH"` under an explicit format configuration
    pub fn to_dimension_notation_with(&self, config: &DecimalFormat) -> String {
        self.render(DIMENSION_SEPARATOR, config)
    }

    /// `"W:H"` with the system separators
    pub fn to_ratio_notation(&self) -> String {
        self.to_ratio_notation_with(&DecimalFormat::default())
    }

    /// `"W:H"` under an explicit format configuration
    pub fn to_ratio_notation_with(&self, config: &DecimalFormat) -> String {
        self.render(RATIO_SEPARATOR, config)
    }

    fn render(&self, separator: char, config: &DecimalFormat) -> String {
        format!(
            "{}{}{}",
            format_decimal(&self.width, config),
            separator,
            format_decimal(&self.height, config)
        )
    }
}

impl fmt::Display for RationalPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.width, DIMENSION_SEPARATOR, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Separators;

    fn pair(width: i64, height: i64) -> RationalPair {
        RationalPair::new(Rational::from_i64(width), Rational::from_i64(height))
    }

    #[test]
    fn test_simplify() {
        assert_eq!(pair(1920, 1080).simplify().unwrap(), pair(16, 9));
        assert_eq!(pair(2560, 1080).simplify().unwrap(), pair(64, 27));

        let fractional = RationalPair::build("0.5", "0.75").unwrap();
        assert_eq!(fractional.simplify().unwrap(), pair(2, 3));

        assert!(pair(0, 0).simplify().is_err());
    }

    #[test]
    fn test_scale_descale() {
        let factor = Rational::parse("1.5").unwrap();
        assert_eq!(pair(1280, 720).scale(&factor), pair(1920, 1080));
        assert_eq!(pair(1920, 1080).descale(&factor).unwrap(), pair(1280, 720));
        assert!(pair(1920, 1080).descale(&Rational::zero()).is_err());
    }

    #[test]
    fn test_alignment() {
        assert!(pair(1920, 1080).is_aligned(&pair(16, 9)).unwrap());
        assert!(!pair(1921, 1080).is_aligned(&pair(16, 9)).unwrap());
        assert!(pair(1920, 1080).is_aligned(&pair(0, 9)).is_err());
    }

    #[test]
    fn test_largest_scale_factor() {
        let factor = pair(3840, 1600).largest_scale_factor(&pair(16, 9)).unwrap();
        assert_eq!(factor, Rational::build_ratio(1600, 9).unwrap());
    }

    #[test]
    fn test_axis_checks() {
        let big = pair(1920, 1080);
        let wide = pair(2560, 720);
        assert!(big.exceeds_both_axes(&pair(1280, 720)));
        assert!(!wide.exceeds_both_axes(&big));
        assert!(wide.exceeds_either_axis(&big));
        assert!(big.exceeds_area(&wide));
    }

    #[test]
    fn test_area_ordering() {
        let a = pair(1920, 1080);
        let b = pair(1080, 1920);
        let c = pair(1280, 720);
        assert!(a.greater_or_equal(&b));
        assert!(a.less_or_equal(&b));
        assert!(a.greater_than(&c));
        assert!(c.less_than(&a));
        assert_eq!(a.cmp_area(&b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_notation() {
        let parsed = RationalPair::from_dimension_notation("1920x1080").unwrap();
        assert_eq!(parsed, pair(1920, 1080));

        let ratio = RationalPair::from_ratio_notation("2.39:1").unwrap();
        assert_eq!(ratio.width(), &Rational::parse("2.39").unwrap());

        assert!(matches!(
            RationalPair::from_ratio_notation("16:9:1"),
            Err(PairError::InvalidNotation(_))
        ));
        assert!(matches!(
            RationalPair::from_dimension_notation("1920xabc"),
            Err(PairError::Rational(RationalError::InvalidArgument(_)))
        ));

        let plain = DecimalFormat::new().with_separators(Separators::default()).with_grouping(false);
        assert_eq!(pair(1920, 1080).to_dimension_notation_with(&plain), "1920x1080");
        assert_eq!(pair(16, 9).to_ratio_notation_with(&plain), "16:9");
    }

    #[test]
    fn test_abs_and_error() {
        let negative = pair(-16, 9);
        assert_eq!(negative.abs(), pair(16, 9));
        assert_eq!(pair(1900, 1080).alignment_error(&pair(1920, 1072)), pair(20, 8));
    }

    #[test]
    fn test_display() {
        let value = RationalPair::build(1920, "0.5").unwrap();
        assert_eq!(value.to_string(), "1920x1/2");
    }
}
