//! Threshold-driven tag selection.
//!
//! A [`TagTable`] is a declarative list of [`TagRule`]s. Deriving tags for a
//! profile runs in up to three passes:
//!
//! 1. every strict rule is evaluated and each satisfied rule yields a
//!    candidate weighted by how far the score sits past the threshold side;
//! 2. when fewer than [`TagTable::minimum`] candidates exist, the rules are
//!    re-evaluated with the table's [`Relaxation`] thresholds and the heaviest
//!    new tags are added until the minimum is met;
//! 3. when there are still no candidates, the table's [`Fallback`] tag is
//!    used.
//!
//! Candidates are then ordered by weight (table order breaks ties) and capped
//! at [`TagTable::limit`].

mod tables;

use citymatch_core::{Dimension, ScoreVector, Tag};
use log::debug;

pub use tables::{
    DESTINATION_RELAXATION, DESTINATION_RULES, DESTINATION_TAGS, FALLBACK_WEIGHT, MAX_TAGS,
    MIN_TAGS, PERSONALITY_FALLBACK, PERSONALITY_RELAXATION, PERSONALITY_RULES, PERSONALITY_TAGS,
    destination_tags, personality_tags,
};

/// Which side of a threshold satisfies a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Satisfied when the score is at least the threshold; weight is the score.
    AtLeast(u8),
    /// Satisfied when the score is at most the threshold; weight is
    /// `100 - score`.
    AtMost(u8),
}

/// One row of a tag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    /// Dimension the rule inspects.
    pub dimension: Dimension,
    /// Threshold test.
    pub comparison: Comparison,
    /// Tag produced when the rule fires.
    pub tag: Tag,
}

impl TagRule {
    /// Rule firing when `dimension >= threshold`.
    #[must_use]
    pub const fn at_least(dimension: Dimension, threshold: u8, tag: Tag) -> Self {
        Self {
            dimension,
            comparison: Comparison::AtLeast(threshold),
            tag,
        }
    }

    /// Rule firing when `dimension <= threshold`.
    #[must_use]
    pub const fn at_most(dimension: Dimension, threshold: u8, tag: Tag) -> Self {
        Self {
            dimension,
            comparison: Comparison::AtMost(threshold),
            tag,
        }
    }

    /// Return the derivation weight when the rule fires for `profile`.
    #[must_use]
    pub fn weight(&self, profile: &ScoreVector) -> Option<u8> {
        let score = profile.get(self.dimension);
        match self.comparison {
            Comparison::AtLeast(threshold) => (score.value() >= threshold).then_some(score.value()),
            Comparison::AtMost(threshold) => {
                (score.value() <= threshold).then_some(score.complement())
            }
        }
    }

    /// The same rule with its threshold swapped for the relaxed one.
    #[must_use]
    pub const fn relaxed(self, relaxation: Relaxation) -> Self {
        let comparison = match self.comparison {
            Comparison::AtLeast(_) => Comparison::AtLeast(relaxation.at_least),
            Comparison::AtMost(_) => Comparison::AtMost(relaxation.at_most),
        };
        Self { comparison, ..self }
    }
}

/// Thresholds used by the second, looser pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxation {
    /// Replacement threshold for [`Comparison::AtLeast`] rules.
    pub at_least: u8,
    /// Replacement threshold for [`Comparison::AtMost`] rules.
    pub at_most: u8,
}

/// Tag used when no rule fires in either pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    /// The default tag.
    pub tag: Tag,
    /// Weight assigned to it.
    pub weight: u8,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    tag: Tag,
    weight: u8,
}

/// A declarative rule table plus the policy for topping up sparse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagTable<'r> {
    rules: &'r [TagRule],
    relaxation: Relaxation,
    fallback: Option<Fallback>,
    minimum: usize,
    limit: usize,
}

impl<'r> TagTable<'r> {
    /// Build a table with the default minimum ([`MIN_TAGS`]) and cap
    /// ([`MAX_TAGS`]) and no fallback tag.
    #[must_use]
    pub const fn new(rules: &'r [TagRule], relaxation: Relaxation) -> Self {
        Self {
            rules,
            relaxation,
            fallback: None,
            minimum: MIN_TAGS,
            limit: MAX_TAGS,
        }
    }

    /// Use `fallback` when neither pass produces a candidate.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Change how many candidates the relaxed pass tops up to.
    #[must_use]
    pub const fn with_minimum(mut self, minimum: usize) -> Self {
        self.minimum = minimum;
        self
    }

    /// Change the maximum number of tags returned.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Borrow the strict rules.
    #[must_use]
    pub const fn rules(&self) -> &'r [TagRule] {
        self.rules
    }

    /// Candidate count below which the relaxed pass runs.
    #[must_use]
    pub const fn minimum(&self) -> usize {
        self.minimum
    }

    /// Maximum number of tags returned.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Select up to [`TagTable::limit`] distinct tags for `profile`, heaviest
    /// first.
    #[must_use]
    pub fn derive(&self, profile: &ScoreVector) -> Vec<Tag> {
        let mut candidates = Vec::new();
        for rule in self.rules {
            if let Some(weight) = rule.weight(profile) {
                push_unique(&mut candidates, Candidate {
                    tag: rule.tag,
                    weight,
                });
            }
        }

        if candidates.len() < self.minimum {
            self.top_up(profile, &mut candidates);
        }

        if candidates.is_empty() {
            if let Some(fallback) = self.fallback {
                debug!("no tag rule fired; using fallback tag {}", fallback.tag);
                candidates.push(Candidate {
                    tag: fallback.tag,
                    weight: fallback.weight,
                });
            }
        }

        candidates.sort_by(|left, right| right.weight.cmp(&left.weight));
        candidates
            .into_iter()
            .take(self.limit)
            .map(|candidate| candidate.tag)
            .collect()
    }

    fn top_up(&self, profile: &ScoreVector, candidates: &mut Vec<Candidate>) {
        let mut relaxed: Vec<Candidate> = self
            .rules
            .iter()
            .map(|rule| rule.relaxed(self.relaxation))
            .filter_map(|rule| {
                rule.weight(profile).map(|weight| Candidate {
                    tag: rule.tag,
                    weight,
                })
            })
            .collect();
        relaxed.sort_by(|left, right| right.weight.cmp(&left.weight));

        let before = candidates.len();
        for candidate in relaxed {
            if candidates.len() >= self.minimum {
                break;
            }
            push_unique(candidates, candidate);
        }
        debug!(
            "relaxed tag pass added {} candidate(s)",
            candidates.len().saturating_sub(before)
        );
    }
}

fn push_unique(candidates: &mut Vec<Candidate>, candidate: Candidate) {
    if candidates.iter().all(|existing| existing.tag != candidate.tag) {
        candidates.push(candidate);
    }
}
