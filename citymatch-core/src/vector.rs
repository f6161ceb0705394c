//! Six-dimensional score vectors shared by user and destination profiles.
//!
//! A [`ScoreVector`] always carries a value for every [`Dimension`]; there is
//! no way to build one with a missing axis. Absent data is represented by the
//! neutral value [`Score::NEUTRAL`].

use thiserror::Error;

use crate::{DIMENSION_COUNT, Dimension};

/// Largest permitted score.
pub const MAX_SCORE: u8 = 100;

/// An integer score in `0..=100`.
///
/// # Examples
/// ```
/// use citymatch_core::Score;
///
/// let score = Score::new(70)?;
/// assert_eq!(score.value(), 70);
/// assert!(Score::new(101).is_err());
/// # Ok::<(), citymatch_core::ScoreError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Score(u8);

/// Error returned when a score exceeds [`MAX_SCORE`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("score {value} exceeds the maximum of 100")]
pub struct ScoreError {
    /// The rejected value.
    pub value: u8,
}

impl Score {
    /// The lowest score.
    pub const MIN: Self = Self(0);
    /// The highest score.
    pub const MAX: Self = Self(MAX_SCORE);
    /// "No signal" value used when a dimension has no data.
    pub const NEUTRAL: Self = Self(50);

    /// Validate and construct a score.
    pub const fn new(value: u8) -> Result<Self, ScoreError> {
        if value > MAX_SCORE {
            return Err(ScoreError { value });
        }
        Ok(Self(value))
    }

    /// Construct a score, clamping values above [`MAX_SCORE`].
    ///
    /// # Examples
    /// ```
    /// use citymatch_core::Score;
    ///
    /// assert_eq!(Score::saturating(65).value(), 65);
    /// assert_eq!(Score::saturating(640), Score::MAX);
    /// ```
    #[must_use]
    pub fn saturating(value: u32) -> Self {
        u8::try_from(value)
            .ok()
            .and_then(|narrow| Self::new(narrow).ok())
            .unwrap_or(Self::MAX)
    }

    /// Return the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Return `100 - value`, the distance from the top of the scale.
    #[must_use]
    pub const fn complement(self) -> u8 {
        MAX_SCORE.saturating_sub(self.0)
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A score for each of the six dimensions.
///
/// # Examples
/// ```
/// use citymatch_core::{Dimension, Score, ScoreVector};
///
/// let vector = ScoreVector::neutral().with(Dimension::History, Score::MAX);
/// assert_eq!(vector.get(Dimension::History), Score::MAX);
/// assert_eq!(vector.get(Dimension::Adventure), Score::NEUTRAL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "ScoreVectorRepr", into = "ScoreVectorRepr")
)]
pub struct ScoreVector {
    scores: [Score; DIMENSION_COUNT],
}

impl ScoreVector {
    /// Build a vector with every dimension set to `score`.
    #[must_use]
    pub const fn uniform(score: Score) -> Self {
        Self {
            scores: [score; DIMENSION_COUNT],
        }
    }

    /// Build a vector with every dimension at [`Score::NEUTRAL`].
    #[must_use]
    pub const fn neutral() -> Self {
        Self::uniform(Score::NEUTRAL)
    }

    /// Build a vector by evaluating `f` once per dimension.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> Score) -> Self {
        Self {
            scores: Dimension::ALL.map(&mut f),
        }
    }

    /// Build a vector from raw values in [`Dimension::ALL`] order.
    ///
    /// # Errors
    /// Returns [`ScoreError`] when any value exceeds [`MAX_SCORE`].
    ///
    /// # Examples
    /// ```
    /// use citymatch_core::{Dimension, ScoreVector};
    ///
    /// let vector = ScoreVector::from_values([95, 10, 85, 80, 15, 90])?;
    /// assert_eq!(vector.get(Dimension::NatureUrban).value(), 10);
    /// # Ok::<(), citymatch_core::ScoreError>(())
    /// ```
    pub fn from_values(values: [u8; DIMENSION_COUNT]) -> Result<Self, ScoreError> {
        let mut scores = [Score::MIN; DIMENSION_COUNT];
        for (slot, value) in scores.iter_mut().zip(values) {
            *slot = Score::new(value)?;
        }
        Ok(Self { scores })
    }

    /// Return the score for `dimension`.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Score {
        self.scores
            .get(dimension.index())
            .copied()
            .unwrap_or(Score::NEUTRAL)
    }

    /// Replace the score for `dimension`.
    pub fn set(&mut self, dimension: Dimension, score: Score) {
        if let Some(slot) = self.scores.get_mut(dimension.index()) {
            *slot = score;
        }
    }

    /// Replace a score while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, dimension: Dimension, score: Score) -> Self {
        self.set(dimension, score);
        self
    }

    /// Iterate over `(dimension, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Score)> + '_ {
        Dimension::ALL.into_iter().zip(self.scores.iter().copied())
    }

    /// Return the raw values in [`Dimension::ALL`] order.
    #[must_use]
    pub fn values(&self) -> [u8; DIMENSION_COUNT] {
        self.scores.map(Score::value)
    }
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Serialised shape: one camelCase key per dimension, all required.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ScoreVectorRepr {
    history: Score,
    nature_urban: Score,
    cultural_comfort: Score,
    activity_level: Score,
    social_vibe: Score,
    adventure: Score,
}

#[cfg(feature = "serde")]
impl From<ScoreVectorRepr> for ScoreVector {
    fn from(repr: ScoreVectorRepr) -> Self {
        Self {
            scores: [
                repr.history,
                repr.nature_urban,
                repr.cultural_comfort,
                repr.activity_level,
                repr.social_vibe,
                repr.adventure,
            ],
        }
    }
}

#[cfg(feature = "serde")]
impl From<ScoreVector> for ScoreVectorRepr {
    fn from(vector: ScoreVector) -> Self {
        Self {
            history: vector.get(Dimension::History),
            nature_urban: vector.get(Dimension::NatureUrban),
            cultural_comfort: vector.get(Dimension::CulturalComfort),
            activity_level: vector.get(Dimension::ActivityLevel),
            social_vibe: vector.get(Dimension::SocialVibe),
            adventure: vector.get(Dimension::Adventure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(50)]
    #[case(100)]
    fn score_accepts_boundary_values(#[case] value: u8) {
        assert_eq!(Score::new(value).map(Score::value), Ok(value));
    }

    #[rstest]
    #[case(101)]
    #[case(255)]
    fn score_rejects_values_above_maximum(#[case] value: u8) {
        assert_eq!(Score::new(value), Err(ScoreError { value }));
    }

    #[test]
    fn complement_measures_distance_from_top() {
        assert_eq!(Score::MIN.complement(), 100);
        assert_eq!(Score::NEUTRAL.complement(), 50);
        assert_eq!(Score::MAX.complement(), 0);
    }

    #[test]
    fn neutral_vector_sets_every_dimension() {
        let vector = ScoreVector::neutral();
        assert!(vector.iter().all(|(_, score)| score == Score::NEUTRAL));
    }

    #[test]
    fn from_values_follows_dimension_order() {
        let vector = ScoreVector::from_values([1, 2, 3, 4, 5, 6]).expect("valid values");
        assert_eq!(vector.get(Dimension::History).value(), 1);
        assert_eq!(vector.get(Dimension::Adventure).value(), 6);
        assert_eq!(vector.values(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_values_rejects_out_of_range() {
        let result = ScoreVector::from_values([1, 2, 3, 4, 5, 101]);
        assert_eq!(result, Err(ScoreError { value: 101 }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_camel_case_keys() {
        let json = r#"{"history":95,"natureUrban":10,"culturalComfort":85,
            "activityLevel":80,"socialVibe":15,"adventure":90}"#;
        let vector: ScoreVector = serde_json::from_str(json).expect("valid vector");
        assert_eq!(vector.values(), [95, 10, 85, 80, 15, 90]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case::missing_key(r#"{"history":95,"natureUrban":10,"culturalComfort":85,"activityLevel":80,"socialVibe":15}"#)]
    #[case::out_of_range(r#"{"history":195,"natureUrban":10,"culturalComfort":85,"activityLevel":80,"socialVibe":15,"adventure":90}"#)]
    #[case::unknown_key(r#"{"history":95,"natureUrban":10,"culturalComfort":85,"activityLevel":80,"socialVibe":15,"adventure":90,"food":1}"#)]
    fn rejects_incomplete_or_invalid_vectors(#[case] json: &str) {
        assert!(serde_json::from_str::<ScoreVector>(json).is_err());
    }
}
