//! Scoring and matching for the citymatch preference engine.
//!
//! The crate implements the engine's pure functions over the core types:
//! - **Aggregation** averages quiz answers into a user [`ScoreVector`]
//!   ([`aggregate`], [`ScoreAggregator`]).
//! - **Matching** compares two vectors with a normalised Manhattan distance
//!   ([`match_percentage`], [`ManhattanMatcher`]).
//! - **Ranking** orders a destination catalog by match ([`rank`]).
//! - **Tagging** picks up to three descriptive tags from threshold tables
//!   ([`destination_tags`], [`personality_tags`], [`TagTable`]).
//! - **Recommendation** combines all of the above into a result card
//!   ([`recommend`]).
//!
//! Nothing here performs I/O or holds mutable state; catalogs are borrowed
//! and every call can run concurrently.
//!
//! # Examples
//!
//! ```
//! use citymatch_core::{AnswerMap, Dimension, DestinationCatalog};
//! use citymatch_core::test_support::{destination, question_catalog};
//! use citymatch_scorer::recommend;
//!
//! let questions = question_catalog(&Dimension::ALL.map(|d| (d, [100, 65, 35, 0])))?;
//! let destinations = DestinationCatalog::new(vec![
//!     destination("dunhuang", [95, 10, 85, 80, 15, 90])?,
//!     destination("shanghai", [45, 100, 30, 55, 95, 25])?,
//! ])?;
//! let answers = AnswerMap::decode("030030", &questions)?;
//!
//! let result = recommend(&answers, &questions, &destinations, 4)?;
//! let best = result.best.expect("catalog is not empty");
//! assert_eq!(best.ranked.destination.id.as_str(), "dunhuang");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`ScoreVector`]: citymatch_core::ScoreVector

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod error;
mod matcher;
mod rank;
mod recommend;
pub mod tags;

pub use aggregate::{ScoreAggregator, aggregate};
pub use error::ValidationError;
pub use matcher::{MAX_DISTANCE, ManhattanMatcher, manhattan_distance, match_percentage};
pub use rank::{rank, rank_with};
pub use recommend::{DEFAULT_RUNNERS_UP, HighlightedMatch, Recommendation, recommend};
pub use tags::{TagTable, destination_tags, personality_tags};

/// Divide rounding halves up; `None` when `denominator` is zero.
pub(crate) fn rounded_div(numerator: u32, denominator: u32) -> Option<u32> {
    numerator
        .saturating_mul(2)
        .saturating_add(denominator)
        .checked_div(denominator.saturating_mul(2))
}
