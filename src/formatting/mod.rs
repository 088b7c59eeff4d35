// src/formatting/mod.rs
//! Renders article content into plain text for previews, search and
//! accessibility fallbacks.

mod plain_text;
mod preview;

pub use self::plain_text::render;
pub use self::preview::{preview, render_all};
