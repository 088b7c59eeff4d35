use super::ValidationError;
use crate::constants::{COLUMN_GRID_UNITS, HEADING_LEVEL_MAX, HEADING_LEVEL_MIN};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Bounded integer type with compile-time constraints.
///
/// The field name is carried into the error so callers can tell which bound
/// was violated without wrapping the error themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedU8<const MIN: u8, const MAX: u8>(u8);

impl<const MIN: u8, const MAX: u8> BoundedU8<MIN, MAX> {
    /// Create a new bounded integer, naming the field for error reporting.
    pub fn new_for(field: &'static str, value: u32) -> Result<Self, ValidationError> {
        if value < MIN as u32 || value > MAX as u32 {
            return Err(ValidationError::OutOfBounds {
                field,
                value,
                min: MIN as u32,
                max: MAX as u32,
            });
        }
        Ok(Self(value as u8))
    }

    /// Get the inner value
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl<const MIN: u8, const MAX: u8> Default for BoundedU8<MIN, MAX> {
    fn default() -> Self {
        Self(MIN)
    }
}

impl<const MIN: u8, const MAX: u8> fmt::Display for BoundedU8<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const MIN: u8, const MAX: u8> Serialize for BoundedU8<MIN, MAX> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, const MIN: u8, const MAX: u8> Deserialize<'de> for BoundedU8<MIN, MAX> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Self::new_for("value", value).map_err(serde::de::Error::custom)
    }
}

/// Semantic heading level, h1 through h6.
pub type HeadingLevel = BoundedU8<{ HEADING_LEVEL_MIN }, { HEADING_LEVEL_MAX }>;

/// Width of a column in grid units.
pub type ColumnSpan = BoundedU8<1, { COLUMN_GRID_UNITS }>;

impl HeadingLevel {
    pub fn heading(value: u32) -> Result<Self, ValidationError> {
        Self::new_for("heading level", value)
    }
}

impl ColumnSpan {
    pub fn span(value: u32) -> Result<Self, ValidationError> {
        Self::new_for("column span", value)
    }

    /// A column that fills the whole grid.
    pub fn full() -> Self {
        Self(COLUMN_GRID_UNITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_bounds() {
        assert_eq!(HeadingLevel::heading(1).unwrap().get(), 1);
        assert_eq!(HeadingLevel::heading(6).unwrap().get(), 6);
        assert!(HeadingLevel::heading(0).is_err());
        assert_eq!(
            HeadingLevel::heading(7),
            Err(ValidationError::OutOfBounds {
                field: "heading level",
                value: 7,
                min: 1,
                max: 6,
            })
        );
    }

    #[test]
    fn test_column_span_bounds() {
        assert_eq!(ColumnSpan::full().get(), 12);
        assert!(ColumnSpan::span(13).is_err());
        assert!(ColumnSpan::span(0).is_err());
    }

    #[test]
    fn test_bounded_deserialize_rejects_out_of_range() {
        let ok: HeadingLevel = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<HeadingLevel>("9").is_err());
        assert!(serde_json::from_str::<ColumnSpan>("0").is_err());
    }
}
