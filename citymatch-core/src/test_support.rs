//! Builders for small catalogs used by unit and behaviour tests.

use crate::{
    AnswerOption, Destination, Dimension, Question, QuestionCatalog, QuestionCatalogError,
    ScoreError, ScoreVector,
};

/// Build a question whose four options carry `scores` in display order.
///
/// # Errors
/// Returns [`ScoreError`] when a score exceeds 100.
pub fn question(dimension: Dimension, scores: [u8; 4]) -> Result<Question, ScoreError> {
    let mut options = Vec::with_capacity(scores.len());
    for (position, value) in scores.into_iter().enumerate() {
        let score = crate::Score::new(value)?;
        options.push(AnswerOption::new(format!("option {position}"), score));
    }
    Ok(Question::new(
        dimension,
        format!("{dimension} question"),
        options,
    ))
}

/// Build a catalog with one question per `(dimension, scores)` pair.
///
/// # Errors
/// Returns [`TestCatalogError`] when a score or the catalog is invalid.
pub fn question_catalog(
    spec: &[(Dimension, [u8; 4])],
) -> Result<QuestionCatalog, TestCatalogError> {
    let questions = spec
        .iter()
        .map(|(dimension, scores)| question(*dimension, *scores))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionCatalog::new(questions)?)
}

/// Build a destination with `id` as its name and the given raw profile.
///
/// # Errors
/// Returns [`ScoreError`] when a value exceeds 100.
pub fn destination(id: &str, profile: [u8; 6]) -> Result<Destination, ScoreError> {
    Ok(Destination::new(
        id,
        id,
        format!("{id} label"),
        format!("{id} summary"),
        ScoreVector::from_values(profile)?,
    ))
}

/// Failure building a test catalog.
#[derive(Debug, thiserror::Error)]
pub enum TestCatalogError {
    /// A score was out of range.
    #[error(transparent)]
    Score(#[from] ScoreError),
    /// The catalog failed validation.
    #[error(transparent)]
    Catalog(#[from] QuestionCatalogError),
}
