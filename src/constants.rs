// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Content algebra boundaries
// ---------------------------------------------------------------------------

/// Shallowest heading level (`h1`).
pub const HEADING_LEVEL_MIN: u8 = 1;

/// Deepest heading level (`h6`).
pub const HEADING_LEVEL_MAX: u8 = 6;

/// Width of the layout grid that column spans are measured against.
pub const COLUMN_GRID_UNITS: u8 = 12;

// ---------------------------------------------------------------------------
// Article defaults
// ---------------------------------------------------------------------------

/// Version assigned to a freshly built article.
pub const INITIAL_VERSION: u32 = 1;

/// Locale assumed when none is given.
pub const DEFAULT_LOCALE: &str = "en";

/// How editors wrote display dates in the flat article format,
/// e.g. "February 5, 2026".
pub const LEGACY_DATE_FORMAT: &str = "%B %d, %Y";

// ---------------------------------------------------------------------------
// Reading and previews
// ---------------------------------------------------------------------------

/// Average adult reading speed used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Appended to a preview that was cut short.
pub const PREVIEW_ELLIPSIS: char = '…';

/// Characters shown by the `list` command's preview column.
pub const LIST_PREVIEW_CHARS: usize = 80;

/// Blank line between blocks in full-text output.
pub const RENDERED_BLOCK_SEPARATOR: &str = "\n\n";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Fixtures file used when `--fixtures` is not given.
pub const FIXTURES_ENV_VAR: &str = "ARTICLE_FIXTURES";

/// Log file written alongside console output.
pub const LOG_FILE_NAME: &str = "article_blocks.log";
