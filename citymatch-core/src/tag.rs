//! Descriptive tags chosen for destinations and user profiles.
//!
//! A [`Tag`] is an opaque label key. Front ends map keys to localized copy;
//! the engine only selects and orders them.

/// A label key such as `"ancientHistory"`.
///
/// # Examples
/// ```
/// use citymatch_core::Tag;
///
/// const QUIET: Tag = Tag::new("quietEscape");
/// assert_eq!(QUIET.as_str(), "quietEscape");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tag(&'static str);

impl Tag {
    /// Wrap a static label key.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Return the label key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
