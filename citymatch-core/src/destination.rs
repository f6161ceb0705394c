//! Destinations, the catalog that holds them, and ranked match results.

use std::collections::HashSet;

use thiserror::Error;

use crate::ScoreVector;

/// Stable identifier for a destination, e.g. `"dunhuang"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DestinationId(String);

impl DestinationId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A place the engine can recommend.
///
/// # Examples
/// ```
/// use citymatch_core::{Destination, ScoreVector};
///
/// let destination = Destination::new("kunming", "Kunming", "City of Eternal Spring",
///     "Mild weather all year.", ScoreVector::neutral());
/// assert_eq!(destination.id.as_str(), "kunming");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    /// Unique identifier.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Short tagline.
    pub label: String,
    /// One or two sentences of descriptive copy.
    pub summary: String,
    /// Position of the destination on every dimension.
    pub profile: ScoreVector,
}

impl Destination {
    /// Construct a destination.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        label: impl Into<String>,
        summary: impl Into<String>,
        profile: ScoreVector,
    ) -> Self {
        Self {
            id: DestinationId::new(id),
            name: name.into(),
            label: label.into(),
            summary: summary.into(),
            profile,
        }
    }
}

/// Errors returned by [`DestinationCatalog::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DestinationCatalogError {
    /// Two destinations share an identifier.
    #[error("duplicate destination id '{id}'")]
    DuplicateId {
        /// The repeated identifier.
        id: DestinationId,
    },
}

/// An immutable set of destinations in a fixed order.
///
/// An empty catalog is representable so ranking can degrade to an empty
/// result; loaders decide whether an empty catalog is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`DestinationCatalogError::DuplicateId`] when identifiers repeat.
    pub fn new(destinations: Vec<Destination>) -> Result<Self, DestinationCatalogError> {
        let mut seen = HashSet::with_capacity(destinations.len());
        if let Some(duplicate) = destinations
            .iter()
            .find(|destination| !seen.insert(&destination.id))
        {
            return Err(DestinationCatalogError::DuplicateId {
                id: duplicate.id.clone(),
            });
        }
        Ok(Self { destinations })
    }

    /// Number of destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// `true` when the catalog holds no destinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Look up a destination by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|destination| destination.id.as_str() == id)
    }

    /// Borrow the destinations in catalog order.
    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }
}

/// A destination paired with its match percentage for one user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedResult<'a> {
    /// The ranked destination.
    pub destination: &'a Destination,
    /// Similarity to the user profile in `0..=100`.
    pub match_percentage: u8,
}
