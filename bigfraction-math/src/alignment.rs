//! Aligned resolution search
//!
//! Enumerates the integer multiples of an aspect ratio that satisfy width,
//! height and area alignment constraints under a bounding resolution, and
//! finds the aligned resolution nearest to an arbitrary target by area.

use std::num::NonZeroU64;

use log::debug;
use once_cell::sync::Lazy;

use crate::pair::RationalPair;
use crate::rational::{Rational, RationalResult};

/// `9/8`: applied to a bounding resolution so that slightly larger aligned
/// sizes (12.5% above the bound) are still listed
pub static EXTENDED_BOUND_FACTOR: Lazy<Rational> =
    Lazy::new(|| Rational::from_ratio(9, NonZeroU64::MIN.saturating_add(7)));

/// Which side of the target a nearest match may fall on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NearestChoice {
    /// Either side, smallest area difference wins
    #[default]
    Nearest,
    /// Area at most the target's
    Below,
    /// Area at least the target's
    Above,
}

/// Scale a bounding resolution by `factor`, usually `EXTENDED_BOUND_FACTOR`
pub fn extend(max: &RationalPair, factor: &Rational) -> RationalPair {
    max.scale(factor)
}

/// All integer multiples `k * aspect` (k >= 1) of the simplified aspect ratio
/// that fit within `max`'s area, are aligned to `alignment` on both axes, and
/// whose area is a multiple of `alignment_area`. Sorted by area.
pub fn find_valid_resolutions(
    aspect: &RationalPair,
    max: &RationalPair,
    alignment: &RationalPair,
    alignment_area: &Rational,
) -> RationalResult<Vec<RationalPair>> {
    let mut valid = Vec::new();

    if !max.width().is_positive() && !max.height().is_positive() {
        return Ok(valid);
    }

    let aspect = aspect.simplify()?;
    let max_factor = max.largest_scale_factor(&aspect)?;

    let one = Rational::one();
    let mut factor = Rational::one();
    while factor.less_or_equal(&max_factor) {
        let candidate = aspect.scale(&factor);
        factor = factor.add(&one);

        if !candidate.area().modulo(alignment_area)?.is_zero() {
            continue;
        }
        if candidate.greater_than(max) {
            continue;
        }
        if candidate.is_aligned(alignment)? {
            valid.push(candidate);
        }
    }

    valid.sort_by(|a, b| a.cmp_area(b));
    debug!(
        "{} aligned resolutions for {} up to {}",
        valid.len(),
        aspect,
        max
    );
    Ok(valid)
}

/// The candidate whose area is closest to `target`'s, honoring `choice`
///
/// Candidates are sorted by area and binary searched; `None` when no
/// candidate qualifies.
pub fn find_nearest_aligned(
    target: &RationalPair,
    candidates: &[RationalPair],
    choice: NearestChoice,
) -> Option<RationalPair> {
    let mut sorted: Vec<&RationalPair> = candidates.iter().collect();
    sorted.sort_by(|a, b| a.cmp_area(b));

    let target_area = target.area();
    let below_end = sorted.partition_point(|c| c.area().less_or_equal(&target_area));
    let above_start = sorted.partition_point(|c| c.area().less(&target_area));

    let below = below_end.checked_sub(1).map(|i| sorted[i]);
    let above = sorted.get(above_start).copied();

    let nearest = match choice {
        NearestChoice::Below => below,
        NearestChoice::Above => above,
        NearestChoice::Nearest => match (below, above) {
            (Some(b), Some(a)) => {
                let distance_below = target_area.subtract(&b.area()).abs();
                let distance_above = a.area().subtract(&target_area).abs();
                // Ties go to the larger resolution
                if distance_above.less_or_equal(&distance_below) {
                    Some(a)
                } else {
                    Some(b)
                }
            }
            (b, a) => b.or(a),
        },
    };

    nearest.cloned()
}
