//! Assemble the result card shown at the end of the quiz.

use citymatch_core::{AnswerMap, DestinationCatalog, QuestionCatalog, RankedResult, ScoreVector, Tag};
use log::debug;

use crate::{ValidationError, aggregate, destination_tags, personality_tags, rank};

/// Runner-up count shown beside the best match by default.
pub const DEFAULT_RUNNERS_UP: usize = 4;

/// A ranked destination together with its highlight tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedMatch<'a> {
    /// Destination and match percentage.
    pub ranked: RankedResult<'a>,
    /// Highlight tags derived from the destination profile.
    pub highlights: Vec<Tag>,
}

impl<'a> HighlightedMatch<'a> {
    fn new(ranked: RankedResult<'a>) -> Self {
        Self {
            highlights: destination_tags(&ranked.destination.profile),
            ranked,
        }
    }
}

/// Everything needed to render a quiz result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation<'a> {
    /// The user's aggregated preference profile.
    pub profile: ScoreVector,
    /// Tags describing the user.
    pub personality: Vec<Tag>,
    /// Highest-ranked destination, absent only for an empty catalog.
    pub best: Option<HighlightedMatch<'a>>,
    /// Following destinations in rank order.
    pub runners_up: Vec<HighlightedMatch<'a>>,
}

/// Score `answers`, rank `destinations` and tag the top results.
///
/// # Errors
/// Returns [`ValidationError`] when `answers` do not fit `questions`.
pub fn recommend<'a>(
    answers: &AnswerMap,
    questions: &QuestionCatalog,
    destinations: &'a DestinationCatalog,
    runners_up: usize,
) -> Result<Recommendation<'a>, ValidationError> {
    let profile = aggregate(answers, questions)?;
    let mut ranked = rank(&profile, destinations.destinations())
        .into_iter()
        .take(runners_up.saturating_add(1))
        .map(HighlightedMatch::new);
    let best = ranked.next();
    if let Some(top) = &best {
        debug!(
            "best match {} at {}%",
            top.ranked.destination.id, top.ranked.match_percentage
        );
    }
    Ok(Recommendation {
        personality: personality_tags(&profile),
        profile,
        best,
        runners_up: ranked.collect(),
    })
}
