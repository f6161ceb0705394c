//! Similarity via normalised Manhattan distance.

use citymatch_core::{DIMENSION_COUNT, MAX_SCORE, Matcher, Score, ScoreVector};

use crate::rounded_div;

/// Largest possible L1 distance between two score vectors.
pub const MAX_DISTANCE: u32 = MAX_SCORE as u32 * DIMENSION_COUNT as u32;

/// Sum of absolute per-dimension differences.
///
/// # Examples
/// ```
/// use citymatch_core::{Score, ScoreVector};
/// use citymatch_scorer::manhattan_distance;
///
/// let low = ScoreVector::uniform(Score::MIN);
/// let high = ScoreVector::uniform(Score::MAX);
/// assert_eq!(manhattan_distance(&low, &high), 600);
/// ```
#[must_use]
pub fn manhattan_distance(a: &ScoreVector, b: &ScoreVector) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|((_, left), (_, right))| u32::from(left.value().abs_diff(right.value())))
        .sum()
}

/// Matcher scoring `round((1 - distance / 600) * 100)`.
///
/// Identical vectors score 100 and opposite corners of the space score 0.
/// The percentage is computed exactly in integers and halves round up, so a
/// distance of 255 scores 58 where floating-point evaluation of the same
/// formula gives 57.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManhattanMatcher;

impl Matcher for ManhattanMatcher {
    fn match_percentage(&self, a: &ScoreVector, b: &ScoreVector) -> u8 {
        let similarity = MAX_DISTANCE.saturating_sub(manhattan_distance(a, b));
        let percentage = rounded_div(similarity * 100, MAX_DISTANCE).unwrap_or_default();
        Self::sanitise(Score::saturating(percentage).value())
    }
}

/// Match percentage between two vectors using [`ManhattanMatcher`].
///
/// # Examples
/// ```
/// use citymatch_core::ScoreVector;
/// use citymatch_scorer::match_percentage;
///
/// let profile = ScoreVector::from_values([95, 10, 85, 80, 15, 90])?;
/// assert_eq!(match_percentage(&profile, &profile), 100);
/// # Ok::<(), citymatch_core::ScoreError>(())
/// ```
#[must_use]
pub fn match_percentage(a: &ScoreVector, b: &ScoreVector) -> u8 {
    ManhattanMatcher.match_percentage(a, b)
}
