//! Quiz questions and the catalog that orders them.

use thiserror::Error;

use crate::{Dimension, Score};

/// Number of options every question offers.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A selectable answer carrying the score it contributes to its dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerOption {
    /// Display text.
    pub text: String,
    /// Contribution to the question's dimension.
    pub score: Score,
}

impl AnswerOption {
    /// Construct an option.
    pub fn new(text: impl Into<String>, score: Score) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// A single quiz question scored against one dimension.
///
/// Options are stored in display order, which is not required to follow
/// score order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// Dimension the selected option contributes to.
    pub dimension: Dimension,
    /// Prompt shown to the user.
    pub prompt: String,
    /// Options in display order.
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Construct a question.
    pub fn new(
        dimension: Dimension,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            dimension,
            prompt: prompt.into(),
            options,
        }
    }

    /// Return the option at `index`, if any.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    /// Return the index of the highest-scoring option.
    ///
    /// The first option wins ties.
    #[must_use]
    pub fn max_option_index(&self) -> Option<usize> {
        self.options
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, option)| option.score)
            .map(|(index, _)| index)
    }
}

/// Position of a question within a [`QuestionCatalog`].
///
/// Handed out by a [`QuestionCatalog`] or by an
/// [`AnswerMap`](crate::AnswerMap) sized for one, so raw positions are
/// bounds-checked before they become indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionIndex(usize);

impl QuestionIndex {
    /// Return the zero-based position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    pub(crate) const fn new_unchecked(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors returned by [`QuestionCatalog::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionCatalogError {
    /// No questions were supplied.
    #[error("question catalog must contain at least one question")]
    Empty,
    /// A question does not offer exactly [`OPTIONS_PER_QUESTION`] options.
    #[error("question {index} has {found} options; expected 4")]
    OptionCount {
        /// Offending question position.
        index: usize,
        /// Number of options found.
        found: usize,
    },
}

/// An ordered, immutable list of questions.
///
/// # Examples
/// ```
/// use citymatch_core::{AnswerOption, Dimension, Question, QuestionCatalog, Score};
///
/// let options = [100, 60, 35, 0]
///     .map(|value| AnswerOption::new("choice", Score::new(value).expect("valid score")))
///     .to_vec();
/// let catalog = QuestionCatalog::new(vec![Question::new(
///     Dimension::History,
///     "Temples or towers?",
///     options,
/// )])?;
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), citymatch_core::QuestionCatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`QuestionCatalogError`] when the list is empty or a question
    /// has the wrong number of options.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionCatalogError> {
        if questions.is_empty() {
            return Err(QuestionCatalogError::Empty);
        }
        if let Some((index, question)) = questions
            .iter()
            .enumerate()
            .find(|(_, question)| question.options.len() != OPTIONS_PER_QUESTION)
        {
            return Err(QuestionCatalogError::OptionCount {
                index,
                found: question.options.len(),
            });
        }
        Ok(Self { questions })
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; catalogs are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validate a raw position.
    #[must_use]
    pub fn index(&self, position: usize) -> Option<QuestionIndex> {
        (position < self.questions.len()).then_some(QuestionIndex(position))
    }

    /// Return the question at `index`.
    #[must_use]
    pub fn get(&self, index: QuestionIndex) -> Option<&Question> {
        self.questions.get(index.0)
    }

    /// Iterate over questions paired with their index.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionIndex, &Question)> + '_ {
        self.questions
            .iter()
            .enumerate()
            .map(|(position, question)| (QuestionIndex(position), question))
    }

    /// Return the indices of questions scored against `dimension`.
    #[must_use]
    pub fn indices_for(&self, dimension: Dimension) -> Vec<QuestionIndex> {
        self.iter()
            .filter(|(_, question)| question.dimension == dimension)
            .map(|(index, _)| index)
            .collect()
    }

    /// Borrow the questions in order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
