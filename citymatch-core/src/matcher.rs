//! Compare two score vectors.
//!
//! The `Matcher` trait turns a pair of [`ScoreVector`](crate::ScoreVector)s
//! into a similarity percentage. Ranking code is written against the trait so
//! alternative metrics can be swapped in.

use crate::ScoreVector;

/// Calculate how closely two profiles agree.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one matcher can
/// serve concurrent requests, and must:
/// - return a value in `0..=100`;
/// - return `100` for identical vectors;
/// - be symmetric in their arguments.
///
/// # Examples
///
/// ```rust
/// use citymatch_core::{Matcher, ScoreVector};
///
/// struct ExactMatcher;
///
/// impl Matcher for ExactMatcher {
///     fn match_percentage(&self, a: &ScoreVector, b: &ScoreVector) -> u8 {
///         if a == b { 100 } else { 0 }
///     }
/// }
///
/// let profile = ScoreVector::neutral();
/// assert_eq!(ExactMatcher.match_percentage(&profile, &profile), 100);
/// ```
pub trait Matcher: Send + Sync {
    /// Return the similarity of `a` and `b` as a percentage.
    fn match_percentage(&self, a: &ScoreVector, b: &ScoreVector) -> u8;

    /// Clamp a raw percentage into `0..=100`.
    fn sanitise(percentage: u8) -> u8
    where
        Self: Sized,
    {
        percentage.min(100)
    }
}
