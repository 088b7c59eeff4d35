use super::{Slug, ValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for IDs with phantom types
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

// Manual impl so `T` need not be `Clone`.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_normalized(self.value.clone())
    }
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaxonomyMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaMarker;

/// Type aliases for specific ID types
pub type ArticleId = Id<ArticleMarker>;
pub type AuthorId = Id<AuthorMarker>;
pub type TaxonomyId = Id<TaxonomyMarker>;
pub type MediaId = Id<MediaMarker>;

impl<T> Id<T> {
    /// Parse a caller-supplied identifier.
    ///
    /// Identifiers are opaque but must be non-empty and free of whitespace,
    /// since they appear verbatim in lookup paths.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidId(
                "identifier cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidId(format!(
                "identifier contains whitespace: {:?}",
                trimmed
            )));
        }
        Ok(Self::from_normalized(trimmed.to_string()))
    }

    /// Use a slug as identifier. Empty slugs yield no identifier.
    pub fn from_slug(slug: &Slug) -> Option<Self> {
        if slug.is_empty() {
            None
        } else {
            Some(Self::from_normalized(slug.as_str().to_string()))
        }
    }

    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Hashes and compares like the inner string, so maps keyed by `Id` can be
// queried with a plain `&str`.
impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
