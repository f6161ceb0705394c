//! Facade crate for the citymatch preference engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline, and
//! exposes the embedded reference catalogs behind the `reference-data`
//! feature.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "reference-data")]
//! # {
//! use citymatch::{AnswerMap, recommend, reference_destinations, reference_questions};
//!
//! let questions = reference_questions()?;
//! let destinations = reference_destinations()?;
//! let answers = AnswerMap::decode("000333333000000333", &questions)?;
//! let result = recommend(&answers, &questions, &destinations, 4)?;
//! assert!(result.best.is_some());
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use citymatch_core::{
    AnswerError, AnswerMap, AnswerOption, DecodeAnswersError, Destination, DestinationCatalog,
    DestinationCatalogError, DestinationId, Dimension, EncodeAnswersError, Matcher, Question,
    QuestionCatalog, QuestionCatalogError, QuestionIndex, RankedResult, Score, ScoreError,
    ScoreVector, Tag,
};
pub use citymatch_scorer::{
    HighlightedMatch, ManhattanMatcher, Recommendation, ValidationError, aggregate,
    destination_tags, match_percentage, personality_tags, rank, recommend,
};

#[cfg(feature = "reference-data")]
pub use citymatch_data::{
    CatalogError, load_destinations, load_questions, reference_destinations, reference_questions,
};
