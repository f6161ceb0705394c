//! Question and destination catalogs for the citymatch engine.
//!
//! Responsibilities:
//! - Embed the reference quiz (18 questions) and destination set (24 cities).
//! - Load replacement catalogs from JSON files supplied at runtime.
//! - Reject catalogs the engine cannot use before any scoring happens.
//!
//! Boundaries:
//! - No scoring or tagging logic (lives in `citymatch-scorer`).
//! - Catalogs are returned by value; callers decide how to share them.

#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use citymatch_core::{
    Destination, DestinationCatalog, DestinationCatalogError, Question, QuestionCatalog,
    QuestionCatalogError,
};
use log::{debug, info, warn};
use thiserror::Error;

/// Number of destinations in the reference catalog.
pub const EXPECTED_DESTINATIONS: usize = 24;

/// Number of questions in the reference quiz.
pub const EXPECTED_QUESTIONS: usize = 18;

const REFERENCE_QUESTIONS: &str = include_str!("../data/questions.json");
const REFERENCE_DESTINATIONS: &str = include_str!("../data/destinations.json");
const EMBEDDED: &str = "embedded";

/// Errors raised while reading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// File that failed to open or read.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog is not valid JSON for the expected shape.
    #[error("failed to parse {origin} catalog: {source}")]
    Parse {
        /// Path of the catalog, or `embedded`.
        origin: String,
        /// Decoder error with line and column.
        #[source]
        source: serde_json::Error,
    },
    /// The question list violates a catalog rule.
    #[error("invalid question catalog {origin}: {source}")]
    Questions {
        /// Path of the catalog, or `embedded`.
        origin: String,
        /// The violated rule.
        #[source]
        source: QuestionCatalogError,
    },
    /// The destination list violates a catalog rule.
    #[error("invalid destination catalog {origin}: {source}")]
    Destinations {
        /// Path of the catalog, or `embedded`.
        origin: String,
        /// The violated rule.
        #[source]
        source: DestinationCatalogError,
    },
    /// A destination catalog without entries cannot produce a recommendation.
    #[error("destination catalog {origin} is empty")]
    EmptyDestinations {
        /// Path of the catalog, or `embedded`.
        origin: String,
    },
}

/// Parse the embedded reference quiz.
///
/// # Errors
/// Returns [`CatalogError`] only if the embedded data is corrupt.
///
/// # Examples
/// ```
/// let questions = citymatch_data::reference_questions()?;
/// assert_eq!(questions.len(), 18);
/// # Ok::<(), citymatch_data::CatalogError>(())
/// ```
pub fn reference_questions() -> Result<QuestionCatalog, CatalogError> {
    parse_questions(REFERENCE_QUESTIONS, EMBEDDED)
}

/// Parse the embedded reference destinations.
///
/// # Errors
/// Returns [`CatalogError`] only if the embedded data is corrupt.
pub fn reference_destinations() -> Result<DestinationCatalog, CatalogError> {
    parse_destinations(REFERENCE_DESTINATIONS, EMBEDDED)
}

/// Load a question catalog from a JSON array of questions.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be read, parsed, or
/// validated.
pub fn load_questions(path: &Utf8Path) -> Result<QuestionCatalog, CatalogError> {
    info!("loading questions from {path}");
    let contents = read(path)?;
    parse_questions(&contents, path.as_str())
}

/// Load a destination catalog from a JSON array of destinations.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be read, parsed, or
/// validated, or when it holds no destinations.
pub fn load_destinations(path: &Utf8Path) -> Result<DestinationCatalog, CatalogError> {
    info!("loading destinations from {path}");
    let contents = read(path)?;
    parse_destinations(&contents, path.as_str())
}

fn read(path: &Utf8Path) -> Result<String, CatalogError> {
    citymatch_fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_questions(json: &str, origin: &str) -> Result<QuestionCatalog, CatalogError> {
    let questions: Vec<Question> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
    let catalog = QuestionCatalog::new(questions).map_err(|source| CatalogError::Questions {
        origin: origin.to_owned(),
        source,
    })?;
    debug!("{origin} question catalog holds {} questions", catalog.len());
    Ok(catalog)
}

fn parse_destinations(json: &str, origin: &str) -> Result<DestinationCatalog, CatalogError> {
    let destinations: Vec<Destination> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
    if destinations.is_empty() {
        return Err(CatalogError::EmptyDestinations {
            origin: origin.to_owned(),
        });
    }
    let catalog =
        DestinationCatalog::new(destinations).map_err(|source| CatalogError::Destinations {
            origin: origin.to_owned(),
            source,
        })?;
    if catalog.len() != EXPECTED_DESTINATIONS {
        warn!(
            "{origin} destination catalog holds {} entries, expected {EXPECTED_DESTINATIONS}",
            catalog.len()
        );
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests;
