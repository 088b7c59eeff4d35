use thiserror::Error;

mod collections;
mod domain_types;
mod ids;
mod slug;

pub use collections::*;
pub use domain_types::*;
pub use ids::*;
pub use slug::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Invalid format span: start {start} must be before end {end}")]
    InvalidSpan { start: usize, end: usize },

    #[error("{field} out of bounds: {value}, expected {min}..={max}")]
    OutOfBounds {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Image media requires alt text ({src})")]
    MissingAltText { src: String },

    #[error("Invalid highlight range: lines {start_line}..={end_line}")]
    InvalidHighlight { start_line: u32, end_line: u32 },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Table row {row} has {actual} cells, expected {expected}")]
    TableShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Column spans total {total}, grid allows {max}")]
    ColumnSpanOverflow { total: u32, max: u32 },
}
