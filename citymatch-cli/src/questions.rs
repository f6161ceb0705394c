//! `questions` command: print the quiz as JSON.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_QUESTIONS, CliError, load_questions, require_existing, write_json};

/// CLI arguments for the `questions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the quiz questions in display order. The embedded \
                 reference quiz is used unless a JSON catalog is supplied.",
    about = "Print the quiz questions"
)]
#[ortho_config(prefix = "CITYMATCH")]
pub(crate) struct QuestionsArgs {
    /// Path to a JSON question catalog replacing the reference quiz.
    #[arg(long = ARG_QUESTIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) questions: Option<Utf8PathBuf>,
}

pub(crate) fn run_questions_with(
    args: QuestionsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    if let Some(path) = &merged.questions {
        require_existing(path, ARG_QUESTIONS)?;
    }
    let catalog = load_questions(merged.questions.as_deref())?;
    write_json(writer, catalog.questions())
}
