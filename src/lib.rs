// src/lib.rs
//! article-blocks library: articles as trees of typed content blocks.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `AppConfig`, `ValidationPolicy`
//! - **Content algebra**: `Content`, `ContentKind`, `ContentVisitor` and the block types
//! - **Aggregates**: `Article`, `ArticleV2`, `ArticleDraft` and their metadata records
//! - **Domain types**: `ArticleId`, `Slug`, `HeadingLevel`, `ColumnSpan`, `ValidatedUrl`
//! - **Rendering**: `render`, `render_all`, `preview`
//! - **Analytics**: `measure_body`, `table_of_contents`, `reading_time`
//! - **Storage**: `ArticleRepository`, `InMemoryArticleStore`

pub mod analytics;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod model;
pub mod store;
pub mod types;
pub mod validation;

// --- Error Handling ---
pub use crate::error::{AppError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{AppConfig, Command, CommandLineInput, FixtureSource};
pub use crate::validation::{validate_article, validate_body, PolicyAction, ValidationPolicy};

// --- Content Algebra ---
pub use crate::model::{
    Accordion, Alignment, Callout, CalloutKind, CodeBlock, Column, Columns, Content, ContentKind,
    ContentList, ContentVisitor, Dimensions, Embed, EmbedKind, FootnoteRef, FormatKind, Heading,
    HighlightRange, InlineFormat, ListItem, ListKind, Media, MediaKind, Quote, RichText, Table,
};

// --- Aggregates ---
pub use crate::model::{
    Article, ArticleDraft, ArticleMedia, ArticleV2, Author, Metadata, PublishingInfo,
    TableOfContents, Taxonomy, Timestamps, TocEntry,
};

// --- Domain Types ---
pub use crate::types::{
    slugify, ArticleId, ColumnSpan, HeadingLevel, Slug, ValidatedUrl, Warning, WarningLevel,
};

// --- Rendering & Analytics ---
pub use crate::analytics::{measure_body, reading_time, table_of_contents, BodyMeasurement};
pub use crate::formatting::{preview, render, render_all};

// --- Storage ---
pub use crate::store::{ArticleRepository, InMemoryArticleStore};
