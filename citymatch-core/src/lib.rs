//! Core domain types for the citymatch preference engine.
//!
//! The crate models a short travel-preference quiz and the destinations it
//! recommends: six fixed [`Dimension`]s, [`ScoreVector`]s over them, the
//! [`QuestionCatalog`] and [`DestinationCatalog`] loaded once at start-up,
//! and the per-session [`AnswerMap`]. Constructors return `Result` so invalid
//! catalogs and answers surface early.
//!
//! Catalogs are immutable after construction and can be shared freely
//! between threads; each quiz session owns its own `AnswerMap`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod answers;
mod destination;
mod dimension;
mod matcher;
mod question;
mod tag;
mod vector;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use answers::{AnswerError, AnswerMap, DecodeAnswersError, EncodeAnswersError};
pub use destination::{
    Destination, DestinationCatalog, DestinationCatalogError, DestinationId, RankedResult,
};
pub use dimension::{DIMENSION_COUNT, Dimension, ParseDimensionError};
pub use matcher::Matcher;
pub use question::{
    AnswerOption, OPTIONS_PER_QUESTION, Question, QuestionCatalog, QuestionCatalogError,
    QuestionIndex,
};
pub use tag::Tag;
pub use vector::{MAX_SCORE, Score, ScoreError, ScoreVector};
