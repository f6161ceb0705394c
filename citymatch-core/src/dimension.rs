//! Dimensions describing the six axes of travel preference.
//!
//! The enum offers compile-time safety for score lookups and fixes the axis
//! set shared by user profiles and destination profiles.
//!
//! # Examples
//! ```
//! use citymatch_core::Dimension;
//!
//! assert_eq!(Dimension::History.as_str(), "history");
//! assert_eq!(Dimension::NatureUrban.to_string(), "natureUrban");
//! ```
use thiserror::Error;

/// Number of preference dimensions.
pub const DIMENSION_COUNT: usize = 6;

/// A preference axis scored in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Dimension {
    /// Interest in heritage sites and ancient history.
    History,
    /// Preference for cities (high) over natural scenery (low).
    NatureUrban,
    /// Appetite for unfamiliar, immersive culture (high) over familiar comfort (low).
    CulturalComfort,
    /// Preferred physical intensity.
    ActivityLevel,
    /// Preference for lively, social places (high) over quiet ones (low).
    SocialVibe,
    /// Willingness to go off the beaten path.
    Adventure,
}

/// Error returned when parsing an unknown dimension name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown dimension '{name}'")]
pub struct ParseDimensionError {
    /// The rejected input.
    pub name: String,
}

impl Dimension {
    /// Every dimension in canonical order.
    pub const ALL: [Self; DIMENSION_COUNT] = [
        Self::History,
        Self::NatureUrban,
        Self::CulturalComfort,
        Self::ActivityLevel,
        Self::SocialVibe,
        Self::Adventure,
    ];

    /// Return the dimension's position in [`Dimension::ALL`].
    ///
    /// # Examples
    /// ```
    /// use citymatch_core::Dimension;
    ///
    /// assert_eq!(Dimension::Adventure.index(), 5);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::History => 0,
            Self::NatureUrban => 1,
            Self::CulturalComfort => 2,
            Self::ActivityLevel => 3,
            Self::SocialVibe => 4,
            Self::Adventure => 5,
        }
    }

    /// Return the camelCase identifier used in catalogs and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::NatureUrban => "natureUrban",
            Self::CulturalComfort => "culturalComfort",
            Self::ActivityLevel => "activityLevel",
            Self::SocialVibe => "socialVibe",
            Self::Adventure => "adventure",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDimensionError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Dimension::SocialVibe.to_string(), Dimension::SocialVibe.as_str());
    }

    #[test]
    fn indices_follow_canonical_order() {
        for (position, dimension) in Dimension::ALL.into_iter().enumerate() {
            assert_eq!(dimension.index(), position);
        }
    }

    #[rstest]
    #[case("history", Dimension::History)]
    #[case("natureUrban", Dimension::NatureUrban)]
    #[case("CULTURALCOMFORT", Dimension::CulturalComfort)]
    #[case("adventure", Dimension::Adventure)]
    fn parses_known_names(#[case] input: &str, #[case] expected: Dimension) {
        assert_eq!(Dimension::from_str(input), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Dimension::from_str("nightlife").expect_err("unknown name");
        assert!(err.to_string().contains("unknown dimension"));
    }
}
