//! Unit coverage for the reference catalogs and file loaders.
#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::fs;

use camino::Utf8PathBuf;
use citymatch_core::{AnswerMap, Dimension, Score};
use citymatch_scorer::{aggregate, destination_tags, rank, recommend};
use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::*;

#[fixture]
fn questions() -> QuestionCatalog {
    reference_questions().expect("embedded questions")
}

#[fixture]
fn destinations() -> DestinationCatalog {
    reference_destinations().expect("embedded destinations")
}

fn write_catalog(contents: &str) -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
    let path = root.join("catalog.json");
    fs::write(&path, contents).expect("write catalog");
    (dir, path)
}

#[rstest]
fn reference_quiz_interleaves_dimensions(questions: QuestionCatalog) {
    assert_eq!(questions.len(), EXPECTED_QUESTIONS);
    let order: Vec<Dimension> = questions
        .questions()
        .iter()
        .map(|question| question.dimension)
        .collect();
    let expected: Vec<Dimension> = Dimension::ALL.into_iter().cycle().take(18).collect();
    assert_eq!(order, expected);
}

#[rstest]
fn every_reference_question_can_reach_the_maximum(questions: QuestionCatalog) {
    for question in questions.questions() {
        assert!(
            question.options.iter().any(|option| option.score == Score::MAX),
            "no maximum option for {:?}",
            question.prompt
        );
    }
}

#[rstest]
fn picking_every_maximum_option_scores_one_hundred(questions: QuestionCatalog) {
    let mut answers = AnswerMap::for_catalog(&questions);
    for (index, question) in questions.iter() {
        let option = question.max_option_index().expect("question has options");
        answers.record(index.get(), option).expect("valid answer");
    }
    assert_eq!(answers.encode().expect("complete"), "030303303030030303");
    let profile = aggregate(&answers, &questions).expect("aggregate");
    assert_eq!(profile.values(), [100; 6]);
}

#[rstest]
fn three_history_answers_leave_other_dimensions_neutral(questions: QuestionCatalog) {
    let mut answers = AnswerMap::for_catalog(&questions);
    for index in questions.indices_for(Dimension::History) {
        let option = questions
            .get(index)
            .and_then(citymatch_core::Question::max_option_index)
            .expect("question has options");
        answers.record(index.get(), option).expect("valid answer");
    }
    let profile = aggregate(&answers, &questions).expect("aggregate");
    assert_eq!(profile.values(), [100, 50, 50, 50, 50, 50]);
}

#[rstest]
fn reference_destinations_are_unique(destinations: DestinationCatalog) {
    assert_eq!(destinations.len(), EXPECTED_DESTINATIONS);
    let names: HashSet<&str> = destinations
        .destinations()
        .iter()
        .map(|destination| destination.name.as_str())
        .collect();
    assert_eq!(names.len(), EXPECTED_DESTINATIONS);
}

#[rstest]
fn every_reference_destination_has_two_highlights(destinations: DestinationCatalog) {
    for destination in destinations.destinations() {
        let tags = destination_tags(&destination.profile);
        assert!(
            (2..=3).contains(&tags.len()),
            "{} has {tags:?}",
            destination.id
        );
    }
}

#[rstest]
#[case::desert_explorer("000333333000000333", "dunhuang", 88)]
#[case::city_socialite("232101101132232101", "shanghai", 93)]
#[case::all_maximum("030303303030030303", "beijing", 70)]
fn reference_answers_pick_expected_city(
    questions: QuestionCatalog,
    destinations: DestinationCatalog,
    #[case] encoded: &str,
    #[case] expected: &str,
    #[case] percentage: u8,
) {
    let answers = AnswerMap::decode(encoded, &questions).expect("valid answers");
    let profile = aggregate(&answers, &questions).expect("aggregate");
    let ranked = rank(&profile, destinations.destinations());
    let top = ranked.first().expect("non-empty ranking");
    assert_eq!(top.destination.id.as_str(), expected);
    assert_eq!(top.match_percentage, percentage);
}

#[rstest]
fn reference_recommendation_lists_four_runners_up(
    questions: QuestionCatalog,
    destinations: DestinationCatalog,
) {
    let answers = AnswerMap::decode("000333333000000333", &questions).expect("valid answers");
    let result = recommend(&answers, &questions, &destinations, 4).expect("recommend");
    let ids: Vec<&str> = result
        .runners_up
        .iter()
        .map(|entry| entry.ranked.destination.id.as_str())
        .collect();
    assert_eq!(ids.len(), 4);
    assert_eq!(ids.first().copied(), Some("lhasa"));
}

#[rstest]
fn loads_questions_from_file() {
    let (_dir, path) = write_catalog(REFERENCE_QUESTIONS);
    let catalog = load_questions(&path).expect("load questions");
    assert_eq!(catalog.len(), EXPECTED_QUESTIONS);
}

#[rstest]
fn loads_small_destination_catalog() {
    let (_dir, path) = write_catalog(
        r#"[{"id":"kunming","name":"Kunming","label":"City of Eternal Spring",
            "summary":"Mild.","profile":{"history":40,"natureUrban":40,
            "culturalComfort":50,"activityLevel":40,"socialVibe":45,"adventure":40}}]"#,
    );
    let catalog = load_destinations(&path).expect("load destinations");
    assert_eq!(catalog.len(), 1);
}

#[rstest]
fn rejects_empty_destination_catalog() {
    let (_dir, path) = write_catalog("[]");
    let err = load_destinations(&path).expect_err("empty catalog");
    assert!(matches!(err, CatalogError::EmptyDestinations { .. }));
}

#[rstest]
fn rejects_empty_question_catalog() {
    let (_dir, path) = write_catalog("[]");
    let err = load_questions(&path).expect_err("empty catalog");
    assert!(matches!(
        err,
        CatalogError::Questions {
            source: QuestionCatalogError::Empty,
            ..
        }
    ));
}

#[rstest]
fn rejects_malformed_json() {
    let (_dir, path) = write_catalog("[{\"dimension\":");
    let err = load_questions(&path).expect_err("malformed catalog");
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[rstest]
fn rejects_destination_with_out_of_range_score() {
    let (_dir, path) = write_catalog(
        r#"[{"id":"x","name":"X","label":"X","summary":"X","profile":{"history":140,
            "natureUrban":40,"culturalComfort":50,"activityLevel":40,"socialVibe":45,
            "adventure":40}}]"#,
    );
    let err = load_destinations(&path).expect_err("invalid score");
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[rstest]
fn reports_missing_file() {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
    let err = load_destinations(&root.join("missing.json")).expect_err("missing file");
    match err {
        CatalogError::Read { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Read, found {other:?}"),
    }
}
