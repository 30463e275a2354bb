//! Exact rational arithmetic for resolution and aspect ratio math
//!
//! This crate provides arbitrary precision fractions built on BigInt with
//! canonical form after every operation, exact conversion from IEEE-754
//! doubles, decimal expansion with repeating-cycle detection, and width x
//! height pairs for reasoning about display resolutions and aspect ratios.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alignment;
pub mod formatting;
pub mod locale;
pub mod pair;
pub mod rational;

// Re-export main types
pub use alignment::{
    extend, find_nearest_aligned, find_valid_resolutions, NearestChoice, EXTENDED_BOUND_FACTOR,
};
pub use formatting::{
    expand_decimal, format_decimal, format_integer_with_separators, format_mixed, DecimalExpansion,
    DecimalFormat,
};
pub use locale::Separators;
pub use pair::{PairError, PairResult, RationalPair, DIMENSION_SEPARATOR, RATIO_SEPARATOR};
pub use rational::{
    gcd_bigint, MixedParts, Precision, ProperFraction, Rational, RationalError, RationalInput,
    RationalResult, DEFAULT_PRECISION,
};

// Re-export for convenience
pub use num_bigint::BigInt;
pub use num_rational::BigRational;
