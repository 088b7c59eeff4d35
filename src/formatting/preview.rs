// src/formatting/preview.rs
//! Document-level text built on top of per-block rendering.

use super::plain_text::render;
use crate::constants::{PREVIEW_ELLIPSIS, RENDERED_BLOCK_SEPARATOR};
use crate::model::Content;

/// Rendered text of every block that produces any, in order.
fn rendered_blocks(blocks: &[Content]) -> impl Iterator<Item = String> + '_ {
    blocks
        .iter()
        .map(render)
        .filter(|text| !text.trim().is_empty())
}

/// Whole body as plain text, one paragraph per block.
pub fn render_all(blocks: &[Content]) -> String {
    rendered_blocks(blocks)
        .collect::<Vec<_>>()
        .join(RENDERED_BLOCK_SEPARATOR)
}

/// Single-line snippet of at most `max_chars` characters plus an ellipsis.
///
/// Truncation counts characters, not bytes, so multi-byte text is never
/// split inside a code point.
pub fn preview(blocks: &[Content], max_chars: usize) -> String {
    let flat = rendered_blocks(blocks)
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(" ");

    if flat.chars().count() <= max_chars {
        return flat;
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut cut: String = flat.chars().take(max_chars).collect();
    let trimmed_len = cut.trim_end().len();
    cut.truncate(trimmed_len);
    cut.push(PREVIEW_ELLIPSIS);
    cut
}
