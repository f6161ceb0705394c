//! Command-line interface for the citymatch preference engine.
//!
//! `recommend` turns an encoded answer string into a ranked recommendation;
//! `questions` prints the quiz so front ends can render it. Both commands
//! write pretty JSON to stdout and read optional catalog overrides from
//! flags, `CITYMATCH_*` environment variables, or configuration files.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use citymatch_core::{DestinationCatalog, QuestionCatalog};
use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod questions;
mod recommend;

pub use error::CliError;

use questions::{QuestionsArgs, run_questions_with};
use recommend::{RecommendArgs, run_recommend_with};

const ARG_ANSWERS: &str = "answers";
const ARG_QUESTIONS: &str = "questions";
const ARG_DESTINATIONS: &str = "destinations";
const ARG_RUNNERS_UP: &str = "runners-up";
const ENV_ANSWERS: &str = "CITYMATCH_CMDS_RECOMMEND_ANSWERS";

/// Run the citymatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when parsing, configuration, loading, or scoring
/// fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Questions(args) => run_questions_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "citymatch",
    about = "Match quiz answers to travel destinations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend destinations for an encoded answer string.
    Recommend(RecommendArgs),
    /// Print the quiz questions.
    Questions(QuestionsArgs),
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match citymatch_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn load_questions(path: Option<&Utf8Path>) -> Result<QuestionCatalog, CliError> {
    let catalog = match path {
        Some(path) => citymatch_data::load_questions(path)?,
        None => citymatch_data::reference_questions()?,
    };
    Ok(catalog)
}

fn load_destinations(path: Option<&Utf8Path>) -> Result<DestinationCatalog, CliError> {
    let catalog = match path {
        Some(path) => citymatch_data::load_destinations(path)?,
        None => citymatch_data::reference_destinations()?,
    };
    Ok(catalog)
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
