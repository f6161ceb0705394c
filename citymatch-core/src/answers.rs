//! Quiz answers and their compact string encoding.
//!
//! An [`AnswerMap`] is sized for one [`QuestionCatalog`] and fills in one
//! selection at a time while a user works through the quiz. A completed map
//! encodes to one decimal digit per question, which is how results travel
//! between pages or requests:
//!
//! ```
//! use citymatch_core::AnswerMap;
//!
//! let mut answers = AnswerMap::new(3);
//! answers.record(0, 2)?;
//! answers.record(1, 0)?;
//! answers.record(2, 3)?;
//! assert_eq!(answers.encode()?, "203");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::debug;
use thiserror::Error;

use crate::{OPTIONS_PER_QUESTION, QuestionCatalog, QuestionIndex};

/// Errors returned by [`AnswerMap::record`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AnswerError {
    /// The question position is past the end of the quiz.
    #[error("question {question} is out of range for a quiz of {len} questions")]
    QuestionOutOfRange {
        /// Requested question position.
        question: usize,
        /// Number of questions in the quiz.
        len: usize,
    },
    /// The option position is past the last option.
    #[error("option {option} is out of range for question {question}")]
    OptionOutOfRange {
        /// Question being answered.
        question: usize,
        /// Requested option position.
        option: usize,
    },
}

/// Error returned by [`AnswerMap::encode`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EncodeAnswersError {
    /// A question has no selection yet.
    #[error("question {question} has not been answered")]
    Incomplete {
        /// First unanswered question.
        question: usize,
    },
}

/// Reasons an encoded answer string is rejected.
///
/// Callers treat every variant as "no result available" and send the user
/// back to the start of the quiz.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DecodeAnswersError {
    /// The string does not have one digit per question.
    #[error("encoded answers have {found} characters; expected {expected}")]
    WrongLength {
        /// Number of questions in the catalog.
        expected: usize,
        /// Number of characters supplied.
        found: usize,
    },
    /// A character is not a valid option digit for its question.
    #[error("invalid answer character {character:?} at position {position}")]
    InvalidCharacter {
        /// Position of the character.
        position: usize,
        /// The rejected character.
        character: char,
    },
}

/// The options a user selected, keyed by question position.
///
/// The map has a fixed number of slots, one per question. Slots start
/// empty and may be filled in any order; only a complete map can be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerMap {
    selections: Vec<Option<u8>>,
}

impl AnswerMap {
    /// Create an empty map for a quiz of `question_count` questions.
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            selections: vec![None; question_count],
        }
    }

    /// Create an empty map sized for `catalog`.
    #[must_use]
    pub fn for_catalog(catalog: &QuestionCatalog) -> Self {
        Self::new(catalog.len())
    }

    /// Number of question slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// `true` when the map has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Record the selected option for a question, replacing any earlier
    /// choice.
    ///
    /// # Errors
    /// Returns [`AnswerError`] when either position is out of range.
    pub fn record(&mut self, question: usize, option: usize) -> Result<(), AnswerError> {
        let len = self.selections.len();
        let slot = self
            .selections
            .get_mut(question)
            .ok_or(AnswerError::QuestionOutOfRange { question, len })?;
        let digit = u8::try_from(option)
            .ok()
            .filter(|_| option < OPTIONS_PER_QUESTION)
            .ok_or(AnswerError::OptionOutOfRange { question, option })?;
        *slot = Some(digit);
        Ok(())
    }

    /// Forget the selection for a question. Out-of-range positions are ignored.
    pub fn clear(&mut self, question: usize) {
        if let Some(slot) = self.selections.get_mut(question) {
            *slot = None;
        }
    }

    /// Return the selected option for a question.
    #[must_use]
    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections
            .get(question)
            .copied()
            .flatten()
            .map(usize::from)
    }

    /// Number of answered questions.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selections.iter().flatten().count()
    }

    /// `true` once every question has a selection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }

    /// Iterate over answered questions in order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionIndex, usize)> + '_ {
        self.selections
            .iter()
            .enumerate()
            .filter_map(|(position, selection)| {
                selection.map(|option| (QuestionIndex::new_unchecked(position), usize::from(option)))
            })
    }

    /// Encode a complete map as one digit per question.
    ///
    /// # Errors
    /// Returns [`EncodeAnswersError::Incomplete`] naming the first unanswered
    /// question.
    pub fn encode(&self) -> Result<String, EncodeAnswersError> {
        self.selections
            .iter()
            .enumerate()
            .map(|(question, selection)| {
                selection
                    .and_then(|option| char::from_digit(u32::from(option), 10))
                    .ok_or(EncodeAnswersError::Incomplete { question })
            })
            .collect()
    }

    /// Decode an encoded string for `catalog`.
    ///
    /// The string must hold exactly one digit per question and every digit
    /// must name an option the question offers. Nothing is salvaged from a
    /// malformed string.
    ///
    /// # Errors
    /// Returns [`DecodeAnswersError`] for a wrong length or invalid character.
    pub fn decode(encoded: &str, catalog: &QuestionCatalog) -> Result<Self, DecodeAnswersError> {
        let found = encoded.chars().count();
        if found != catalog.len() {
            debug!(
                "rejecting encoded answers: {found} characters for {} questions",
                catalog.len()
            );
            return Err(DecodeAnswersError::WrongLength {
                expected: catalog.len(),
                found,
            });
        }

        let mut answers = Self::for_catalog(catalog);
        for ((position, character), (_, question)) in encoded.chars().enumerate().zip(catalog.iter())
        {
            let option = character
                .to_digit(10)
                .and_then(|digit| usize::try_from(digit).ok())
                .filter(|option| *option < question.options.len())
                .ok_or(DecodeAnswersError::InvalidCharacter {
                    position,
                    character,
                })
                .inspect_err(|err| debug!("rejecting encoded answers: {err}"))?;
            answers
                .record(position, option)
                .map_err(|_| DecodeAnswersError::InvalidCharacter {
                    position,
                    character,
                })?;
        }
        Ok(answers)
    }
}
