//! The destination and personality tag tables.
//!
//! Destination and personality tags use separate vocabularies over the same
//! dimensions. The relaxed thresholds are tunable.

use citymatch_core::{Dimension, ScoreVector, Tag};

use super::{Fallback, Relaxation, TagRule, TagTable};

/// Candidate count the relaxed pass tops up to.
pub const MIN_TAGS: usize = 2;

/// Maximum tags returned by one derivation.
pub const MAX_TAGS: usize = 3;

/// Weight assigned to the personality fallback tag.
pub const FALLBACK_WEIGHT: u8 = 50;

/// Relaxed destination thresholds. Every score satisfies one side, so the
/// relaxed pass always finds candidates.
pub const DESTINATION_RELAXATION: Relaxation = Relaxation {
    at_least: 50,
    at_most: 49,
};

/// Relaxed personality thresholds. Only a score of exactly 50 satisfies
/// neither side; `history` has no low-side rule.
pub const PERSONALITY_RELAXATION: Relaxation = Relaxation {
    at_least: 51,
    at_most: 49,
};

/// Personality tag used when nothing else fires.
pub const PERSONALITY_FALLBACK: Fallback = Fallback {
    tag: Tag::new("curiousTraveler"),
    weight: FALLBACK_WEIGHT,
};

/// Strict rules describing a destination's highlights.
pub const DESTINATION_RULES: [TagRule; 10] = [
    TagRule::at_least(Dimension::History, 70, Tag::new("ancientHistory")),
    TagRule::at_most(Dimension::NatureUrban, 20, Tag::new("naturalWonders")),
    TagRule::at_least(Dimension::NatureUrban, 80, Tag::new("urbanEnergy")),
    TagRule::at_least(Dimension::CulturalComfort, 75, Tag::new("culturalImmersion")),
    TagRule::at_most(Dimension::CulturalComfort, 25, Tag::new("easyGoing")),
    TagRule::at_least(Dimension::ActivityLevel, 75, Tag::new("activeAdventures")),
    TagRule::at_most(Dimension::ActivityLevel, 25, Tag::new("slowTravel")),
    TagRule::at_least(Dimension::SocialVibe, 75, Tag::new("livelyNightlife")),
    TagRule::at_most(Dimension::SocialVibe, 25, Tag::new("quietEscape")),
    TagRule::at_least(Dimension::Adventure, 75, Tag::new("offTheBeatenPath")),
];

/// Strict rules describing the user's travel personality.
pub const PERSONALITY_RULES: [TagRule; 11] = [
    TagRule::at_least(Dimension::History, 70, Tag::new("historyBuff")),
    TagRule::at_most(Dimension::NatureUrban, 30, Tag::new("natureLover")),
    TagRule::at_least(Dimension::NatureUrban, 70, Tag::new("cityExplorer")),
    TagRule::at_least(Dimension::CulturalComfort, 70, Tag::new("cultureSeeker")),
    TagRule::at_most(Dimension::CulturalComfort, 30, Tag::new("comfortSeeker")),
    TagRule::at_least(Dimension::ActivityLevel, 70, Tag::new("energeticExplorer")),
    TagRule::at_most(Dimension::ActivityLevel, 30, Tag::new("leisurelyWanderer")),
    TagRule::at_least(Dimension::SocialVibe, 70, Tag::new("socialButterfly")),
    TagRule::at_most(Dimension::SocialVibe, 30, Tag::new("soloWanderer")),
    TagRule::at_least(Dimension::Adventure, 70, Tag::new("boldAdventurer")),
    TagRule::at_most(Dimension::Adventure, 30, Tag::new("carefulPlanner")),
];

/// Highlight table for destinations.
pub const DESTINATION_TAGS: TagTable<'static> =
    TagTable::new(&DESTINATION_RULES, DESTINATION_RELAXATION);

/// Personality table for users.
pub const PERSONALITY_TAGS: TagTable<'static> =
    TagTable::new(&PERSONALITY_RULES, PERSONALITY_RELAXATION).with_fallback(PERSONALITY_FALLBACK);

/// Up to three highlight tags for a destination profile.
///
/// # Examples
/// ```
/// use citymatch_core::ScoreVector;
/// use citymatch_scorer::destination_tags;
///
/// let dunhuang = ScoreVector::from_values([95, 10, 85, 80, 15, 90])?;
/// let tags: Vec<&str> = destination_tags(&dunhuang).iter().map(|t| t.as_str()).collect();
/// assert_eq!(tags, ["ancientHistory", "naturalWonders", "offTheBeatenPath"]);
/// # Ok::<(), citymatch_core::ScoreError>(())
/// ```
#[must_use]
pub fn destination_tags(profile: &ScoreVector) -> Vec<Tag> {
    DESTINATION_TAGS.derive(profile)
}

/// Up to three personality tags for a user profile.
#[must_use]
pub fn personality_tags(profile: &ScoreVector) -> Vec<Tag> {
    PERSONALITY_TAGS.derive(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn keys(tags: &[Tag]) -> Vec<&'static str> {
        tags.iter().map(|tag| tag.as_str()).collect()
    }

    fn vector(values: [u8; 6]) -> ScoreVector {
        ScoreVector::from_values(values).expect("valid vector")
    }

    #[rstest]
    #[case::dunhuang([95, 10, 85, 80, 15, 90], &["ancientHistory", "naturalWonders", "offTheBeatenPath"])]
    #[case::shanghai([45, 100, 30, 55, 95, 25], &["urbanEnergy", "livelyNightlife"])]
    #[case::kunming_relaxed([40, 40, 50, 40, 45, 40], &["naturalWonders", "slowTravel"])]
    #[case::sanya([5, 35, 10, 25, 60, 20], &["easyGoing", "slowTravel"])]
    #[case::neutral([50, 50, 50, 50, 50, 50], &["ancientHistory", "urbanEnergy"])]
    fn destination_highlights(#[case] profile: [u8; 6], #[case] expected: &[&str]) {
        assert_eq!(keys(&destination_tags(&vector(profile))), expected);
    }

    #[rstest]
    #[case::extremes([100, 0, 100, 100, 0, 100], &["historyBuff", "natureLover", "cultureSeeker"])]
    #[case::city_social([30, 90, 50, 50, 80, 50], &["cityExplorer", "socialButterfly"])]
    #[case::one_strict_one_relaxed([50, 50, 50, 85, 62, 50], &["energeticExplorer", "socialButterfly"])]
    #[case::single_axis_off_neutral([50, 50, 50, 85, 50, 50], &["energeticExplorer"])]
    #[case::neutral([50, 50, 50, 50, 50, 50], &["curiousTraveler"])]
    #[case::near_neutral([55, 45, 59, 41, 50, 50], &["cultureSeeker", "leisurelyWanderer"])]
    #[case::lopsided_mild([59, 41, 59, 41, 59, 41], &["historyBuff", "natureLover"])]
    #[case::two_axes_one_point_off([51, 50, 50, 50, 50, 49], &["historyBuff", "carefulPlanner"])]
    fn personality_tags_follow_table(#[case] profile: [u8; 6], #[case] expected: &[&str]) {
        assert_eq!(keys(&personality_tags(&vector(profile))), expected);
    }

    #[rstest]
    fn destination_relaxed_pass_always_finds_two() {
        for value in [0_u8, 25, 49, 50, 51, 75, 100] {
            let tags = destination_tags(&ScoreVector::from_values([value; 6]).expect("valid"));
            assert!(tags.len() >= MIN_TAGS, "only {tags:?} for uniform {value}");
        }
    }

    #[rstest]
    fn tables_do_not_repeat_tags() {
        for rules in [&DESTINATION_RULES[..], &PERSONALITY_RULES[..]] {
            let unique: HashSet<Tag> = rules.iter().map(|rule| rule.tag).collect();
            assert_eq!(unique.len(), rules.len());
        }
    }

    #[rstest]
    fn tables_use_distinct_vocabularies() {
        let destination: HashSet<Tag> = DESTINATION_RULES.iter().map(|rule| rule.tag).collect();
        assert!(
            PERSONALITY_RULES
                .iter()
                .all(|rule| !destination.contains(&rule.tag))
        );
    }

    #[rstest]
    fn relaxed_thresholds_are_pinned() {
        assert_eq!(DESTINATION_RELAXATION, Relaxation { at_least: 50, at_most: 49 });
        assert_eq!(PERSONALITY_RELAXATION, Relaxation { at_least: 51, at_most: 49 });
        assert_eq!(PERSONALITY_FALLBACK.weight, 50);
    }

    #[rstest]
    #[case::destination(DESTINATION_TAGS, DESTINATION_RULES.len())]
    #[case::personality(PERSONALITY_TAGS, PERSONALITY_RULES.len())]
    fn tables_use_default_policy(#[case] table: TagTable<'static>, #[case] rule_count: usize) {
        assert_eq!(table.rules().len(), rule_count);
        assert_eq!(table.minimum(), MIN_TAGS);
        assert_eq!(table.limit(), MAX_TAGS);
    }
}
