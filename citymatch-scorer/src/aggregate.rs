//! Turn quiz answers into a user preference profile.
//!
//! Each dimension's value is the rounded mean of the option scores selected
//! for that dimension's questions. A dimension without any answered question
//! carries no signal and takes the neutral value instead of zero.

use citymatch_core::{AnswerMap, DIMENSION_COUNT, QuestionCatalog, Score, ScoreVector};
use log::debug;

use crate::{ValidationError, rounded_div};

/// Averages answers for one question catalog.
///
/// # Examples
/// ```
/// use citymatch_core::{AnswerMap, Dimension, Score};
/// use citymatch_core::test_support::question_catalog;
/// use citymatch_scorer::ScoreAggregator;
///
/// let catalog = question_catalog(&[
///     (Dimension::History, [100, 60, 35, 0]),
///     (Dimension::History, [100, 60, 35, 0]),
///     (Dimension::History, [100, 60, 35, 0]),
/// ])?;
/// let mut answers = AnswerMap::for_catalog(&catalog);
/// answers.record(0, 0)?;
/// answers.record(1, 1)?;
/// answers.record(2, 2)?;
///
/// let profile = ScoreAggregator::new(&catalog).aggregate(&answers)?;
/// assert_eq!(profile.get(Dimension::History).value(), 65);
/// assert_eq!(profile.get(Dimension::Adventure), Score::NEUTRAL);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator<'a> {
    catalog: &'a QuestionCatalog,
    fallback: Score,
}

impl<'a> ScoreAggregator<'a> {
    /// Create an aggregator for `catalog` with the neutral fallback.
    #[must_use]
    pub const fn new(catalog: &'a QuestionCatalog) -> Self {
        Self {
            catalog,
            fallback: Score::NEUTRAL,
        }
    }

    /// Override the value used for dimensions without answers.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: Score) -> Self {
        self.fallback = fallback;
        self
    }

    /// Average the selected option scores per dimension.
    ///
    /// Partial answer maps are accepted; unanswered dimensions take the
    /// fallback value.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when the map was sized for another catalog.
    /// A map recorded against a different catalog of the same length is
    /// scored with this catalog's option scores.
    pub fn aggregate(&self, answers: &AnswerMap) -> Result<ScoreVector, ValidationError> {
        if answers.len() != self.catalog.len() {
            return Err(ValidationError::QuestionCountMismatch {
                expected: self.catalog.len(),
                found: answers.len(),
            });
        }

        let mut totals = [0_u32; DIMENSION_COUNT];
        let mut counts = [0_u32; DIMENSION_COUNT];
        for (index, option) in answers.iter() {
            let question = self.catalog.get(index).ok_or(
                ValidationError::QuestionCountMismatch {
                    expected: self.catalog.len(),
                    found: answers.len(),
                },
            )?;
            let Some(selected) = question.option(option) else {
                continue;
            };
            let slot = question.dimension.index();
            if let (Some(total), Some(count)) = (totals.get_mut(slot), counts.get_mut(slot)) {
                *total += u32::from(selected.score.value());
                *count += 1;
            }
        }

        let profile = ScoreVector::from_fn(|dimension| {
            let slot = dimension.index();
            let total = totals.get(slot).copied().unwrap_or_default();
            let count = counts.get(slot).copied().unwrap_or_default();
            rounded_div(total, count).map_or(self.fallback, Score::saturating)
        });
        debug!(
            "aggregated {} of {} answers into {:?}",
            answers.answered_count(),
            answers.len(),
            profile.values()
        );
        Ok(profile)
    }
}

/// Average `answers` against `catalog` with the neutral fallback.
///
/// # Errors
/// See [`ScoreAggregator::aggregate`].
pub fn aggregate(
    answers: &AnswerMap,
    catalog: &QuestionCatalog,
) -> Result<ScoreVector, ValidationError> {
    ScoreAggregator::new(catalog).aggregate(answers)
}
