//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{TWO_DESTINATIONS, Workspace};
use super::*;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

struct RecommendWorld {
    workspace: Workspace,
    answers: RefCell<Option<String>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            answers: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["citymatch".to_owned(), "recommend".to_owned()];
        argv.extend(self.answers.borrow().iter().cloned());
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }

    fn best_match(&self) -> Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        assert!(result.is_ok(), "expected success, found {result:?}");
        let output: Value =
            serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON");
        output["bestMatch"]["id"].clone()
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("the reference catalogs")]
fn reference_catalogs(#[from(world)] world: &RecommendWorld) {
    world.cli_args.borrow_mut().clear();
}

#[given("a destination catalog file with two cities")]
fn destination_override(#[from(world)] world: &RecommendWorld) {
    let path = world.workspace.write("cities.json", TWO_DESTINATIONS);
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_DESTINATIONS}"), path.into_string()]);
}

#[given("a destination catalog path that does not exist")]
fn missing_destination_override(#[from(world)] world: &RecommendWorld) {
    let path = world.workspace.path("absent.json");
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_DESTINATIONS}"), path.into_string()]);
}

#[given("answers favouring remote history")]
fn remote_history_answers(#[from(world)] world: &RecommendWorld) {
    world.answers.replace(Some("000333333000000333".to_owned()));
}

#[given("answers favouring busy cities")]
fn busy_city_answers(#[from(world)] world: &RecommendWorld) {
    world.answers.replace(Some("232101101132232101".to_owned()));
}

#[given("a truncated answer string")]
fn truncated_answers(#[from(world)] world: &RecommendWorld) {
    world.answers.replace(Some("00033".to_owned()));
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| {
        let mut buffer = world.stdout.borrow_mut();
        dispatch(cli.command, &mut *buffer)
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and recommends dunhuang")]
fn recommends_dunhuang(#[from(world)] world: &RecommendWorld) {
    assert_eq!(world.best_match(), "dunhuang");
}

#[then("the command succeeds and recommends shanghai")]
fn recommends_shanghai(#[from(world)] world: &RecommendWorld) {
    assert_eq!(world.best_match(), "shanghai");
}

#[then("the command fails and asks for a retake")]
fn asks_for_retake(#[from(world)] world: &RecommendWorld) {
    assert!(world.error().starts_with("InvalidAnswers"));
    assert!(world.stdout.borrow().is_empty());
}

#[then("the command fails because the destination catalog is missing")]
fn destination_catalog_missing(#[from(world)] world: &RecommendWorld) {
    assert!(world.error().starts_with("MissingSourceFile"));
}

#[then("the command fails because the answers are missing")]
fn answers_missing(#[from(world)] world: &RecommendWorld) {
    assert!(world.error().starts_with("MissingArgument"));
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_reference, "recommending from the reference catalogs");
register_recommend_scenario!(recommend_override, "recommending from a destination override");
register_recommend_scenario!(recommend_malformed, "rejecting a malformed answer string");
register_recommend_scenario!(recommend_missing_catalog, "rejecting a missing destination catalog");
register_recommend_scenario!(recommend_missing_answers, "rejecting a missing answer string");
