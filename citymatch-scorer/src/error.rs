//! Error types for the scoring crate.

use thiserror::Error;

/// Answers that cannot be scored against the supplied catalog.
///
/// A well-formed front end never produces these; they indicate a caller
/// bug such as pairing an answer map with the wrong catalog. Option
/// positions need no check here: every catalog question offers
/// [`OPTIONS_PER_QUESTION`](citymatch_core::OPTIONS_PER_QUESTION) options and
/// [`AnswerMap::record`](citymatch_core::AnswerMap::record) refuses anything
/// beyond that.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The answer map was sized for a different number of questions.
    #[error("answer map covers {found} questions but the catalog has {expected}")]
    QuestionCountMismatch {
        /// Questions in the catalog.
        expected: usize,
        /// Slots in the answer map.
        found: usize,
    },
}
