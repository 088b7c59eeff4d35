// src/types/slug.rs
//! URL-safe identifiers derived from free text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-z0-9\s-]").expect("Failed to compile slug charset regex - this is a bug")
});
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex - this is a bug"));
static HYPHEN_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("Failed to compile hyphen regex - this is a bug"));

/// Turns free text into a lowercase, hyphenated identifier.
///
/// Characters outside `[a-z0-9-]` are dropped after lowercasing, whitespace
/// runs become a single hyphen, hyphen runs collapse, and leading/trailing
/// hyphens are trimmed. Total over any input; `slugify("")` is `""`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// A URL-facing identifier.
///
/// Slugs derived with [`Slug::from_text`] are always in `slugify` form.
/// Slugs supplied by a caller through [`Slug::new`] or the wire are kept
/// exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from arbitrary text.
    pub fn from_text(text: &str) -> Self {
        Self(slugify(text))
    }

    /// Wrap a caller-supplied slug verbatim.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
