//! `recommend` command: score an answer string and print the result card.

use std::io::Write;

use camino::Utf8PathBuf;
use citymatch_core::{AnswerMap, QuestionCatalog, ScoreVector, Tag};
use citymatch_scorer::{DEFAULT_RUNNERS_UP, HighlightedMatch, Recommendation, recommend};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ANSWERS, ARG_DESTINATIONS, ARG_QUESTIONS, ARG_RUNNERS_UP, CliError, ENV_ANSWERS,
    load_destinations, load_questions, require_existing, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score an encoded answer string (one digit per question, \
                 0-3) against the destination catalog and print the best \
                 match, runners-up, and personality tags as JSON.",
    about = "Recommend destinations for quiz answers"
)]
#[ortho_config(prefix = "CITYMATCH")]
pub(crate) struct RecommendArgs {
    /// Encoded answers, e.g. `000333333000000333`.
    #[arg(value_name = "answers")]
    #[serde(default)]
    pub(crate) answers: Option<String>,
    /// Path to a JSON question catalog replacing the reference quiz.
    #[arg(long = ARG_QUESTIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) questions: Option<Utf8PathBuf>,
    /// Path to a JSON destination catalog replacing the reference set.
    #[arg(long = ARG_DESTINATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) destinations: Option<Utf8PathBuf>,
    /// Number of runners-up listed after the best match (default 4).
    #[arg(long = ARG_RUNNERS_UP, value_name = "count")]
    #[serde(default)]
    pub(crate) runners_up: Option<usize>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) answers: String,
    pub(crate) questions: Option<Utf8PathBuf>,
    pub(crate) destinations: Option<Utf8PathBuf>,
    pub(crate) runners_up: usize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if let Some(path) = &self.questions {
            require_existing(path, ARG_QUESTIONS)?;
        }
        if let Some(path) = &self.destinations {
            require_existing(path, ARG_DESTINATIONS)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let answers = args.answers.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_ANSWERS,
        })?;
        Ok(Self {
            answers,
            questions: args.questions,
            destinations: args.destinations,
            runners_up: args.runners_up.unwrap_or(DEFAULT_RUNNERS_UP),
        })
    }
}

/// JSON shape of one ranked destination.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchReport<'a> {
    id: &'a str,
    name: &'a str,
    label: &'a str,
    summary: &'a str,
    match_percentage: u8,
    highlights: &'a [Tag],
}

impl<'a> From<&'a HighlightedMatch<'a>> for MatchReport<'a> {
    fn from(entry: &'a HighlightedMatch<'a>) -> Self {
        let destination = entry.ranked.destination;
        Self {
            id: destination.id.as_str(),
            name: &destination.name,
            label: &destination.label,
            summary: &destination.summary,
            match_percentage: entry.ranked.match_percentage,
            highlights: &entry.highlights,
        }
    }
}

/// JSON shape printed by `recommend`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationReport<'a> {
    answers: &'a str,
    profile: ScoreVector,
    personality: &'a [Tag],
    best_match: Option<MatchReport<'a>>,
    runners_up: Vec<MatchReport<'a>>,
}

impl<'a> RecommendationReport<'a> {
    fn new(answers: &'a str, recommendation: &'a Recommendation<'a>) -> Self {
        Self {
            answers,
            profile: recommendation.profile,
            personality: &recommendation.personality,
            best_match: recommendation.best.as_ref().map(MatchReport::from),
            runners_up: recommendation
                .runners_up
                .iter()
                .map(MatchReport::from)
                .collect(),
        }
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, writer)
}

fn execute_recommend(config: &RecommendConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let questions = load_questions(config.questions.as_deref())?;
    let destinations = load_destinations(config.destinations.as_deref())?;
    let answers = decode_answers(&config.answers, &questions)?;
    let recommendation = recommend(&answers, &questions, &destinations, config.runners_up)?;
    write_json(
        writer,
        &RecommendationReport::new(&config.answers, &recommendation),
    )
}

fn decode_answers(
    encoded: &str,
    questions: &QuestionCatalog,
) -> Result<AnswerMap, CliError> {
    AnswerMap::decode(encoded, questions).map_err(|source| {
        debug!("rejected answer string {encoded:?}: {source}");
        CliError::InvalidAnswers {
            answers: encoded.to_owned(),
            source,
        }
    })
}

