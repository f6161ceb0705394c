//! Rank every destination against a user profile.

use citymatch_core::{Destination, Matcher, RankedResult, ScoreVector};

use crate::ManhattanMatcher;

/// Rank `destinations` by descending match percentage using
/// [`ManhattanMatcher`].
///
/// Every destination appears exactly once. Equal percentages keep catalog
/// order. An empty slice yields an empty ranking.
///
/// # Examples
/// ```
/// use citymatch_core::test_support::destination;
/// use citymatch_core::{Score, ScoreVector};
/// use citymatch_scorer::rank;
///
/// let destinations = vec![
///     destination("shanghai", [45, 100, 30, 55, 95, 25])?,
///     destination("dunhuang", [95, 10, 85, 80, 15, 90])?,
/// ];
/// let user = ScoreVector::from_values([100, 0, 100, 100, 0, 100])?;
/// let ranked = rank(&user, &destinations);
/// assert_eq!(ranked[0].destination.id.as_str(), "dunhuang");
/// assert_eq!(ranked.len(), 2);
/// # Ok::<(), citymatch_core::ScoreError>(())
/// ```
#[must_use]
pub fn rank<'a>(user: &ScoreVector, destinations: &'a [Destination]) -> Vec<RankedResult<'a>> {
    rank_with(&ManhattanMatcher, user, destinations)
}

/// Rank `destinations` with an arbitrary [`Matcher`].
#[must_use]
pub fn rank_with<'a, M>(
    matcher: &M,
    user: &ScoreVector,
    destinations: &'a [Destination],
) -> Vec<RankedResult<'a>>
where
    M: Matcher + ?Sized,
{
    let mut ranked: Vec<RankedResult<'a>> = destinations
        .iter()
        .map(|destination| RankedResult {
            destination,
            match_percentage: matcher.match_percentage(user, &destination.profile),
        })
        .collect();
    // `sort_by` is stable, so ties stay in catalog order.
    ranked.sort_by(|left, right| right.match_percentage.cmp(&left.match_percentage));
    ranked
}
