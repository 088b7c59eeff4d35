// src/analytics/mod.rs
//! Content measurement and statistics for article bodies.

use crate::constants::WORDS_PER_MINUTE;
use crate::formatting::render;
use crate::model::{Content, ContentKind, TableOfContents, TocEntry};
use std::collections::BTreeMap;

/// Quick statistics for one-line summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentSummary {
    pub total_blocks: usize,
    pub deepest_nesting: usize,
}

/// Detailed breakdown of a body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyMeasurement {
    /// Every block, nested ones included.
    pub total_blocks: usize,
    /// 1 for a flat body, 0 for an empty one.
    pub deepest_nesting: usize,
    /// Words in the rendered plain text of the top-level blocks.
    pub word_count: usize,
    pub per_kind: BTreeMap<ContentKind, usize>,
}

impl BodyMeasurement {
    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            total_blocks: self.total_blocks,
            deepest_nesting: self.deepest_nesting,
        }
    }

    pub fn count_of(&self, kind: ContentKind) -> usize {
        self.per_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn reading_time_minutes(&self) -> u32 {
        reading_time(self.word_count)
    }
}

/// Every block in document order, paired with its depth (top level = 1).
///
/// Walks with an explicit stack so arbitrarily deep trees are safe.
pub fn walk_body(body: &[Content]) -> Vec<(&Content, usize)> {
    let mut visited = Vec::new();
    let mut pending: Vec<(&Content, usize)> = body.iter().rev().map(|b| (b, 1)).collect();

    while let Some((block, depth)) = pending.pop() {
        visited.push((block, depth));
        pending.extend(block.children().into_iter().rev().map(|c| (c, depth + 1)));
    }

    visited
}

pub fn measure_body(body: &[Content]) -> BodyMeasurement {
    let mut measurement = BodyMeasurement::default();

    for (block, depth) in walk_body(body) {
        measurement.total_blocks += 1;
        measurement.deepest_nesting = measurement.deepest_nesting.max(depth);
        *measurement.per_kind.entry(block.kind()).or_insert(0) += 1;
    }

    measurement.word_count = body.iter().map(|b| count_words(&render(b))).sum();
    measurement
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes to read `words`, rounded up; at least one when there is any text.
pub fn reading_time(words: usize) -> u32 {
    if words == 0 {
        return 0;
    }
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Outline built from every heading in the body.
///
/// A heading nests under the closest earlier heading with a smaller level.
pub fn table_of_contents(body: &[Content]) -> TableOfContents {
    let mut roots: Vec<TocEntry> = Vec::new();
    let mut open: Vec<TocEntry> = Vec::new();

    fn close(entry: TocEntry, open: &mut [TocEntry], roots: &mut Vec<TocEntry>) {
        match open.last_mut() {
            Some(parent) => parent.children.push(entry),
            None => roots.push(entry),
        }
    }

    for (block, _) in walk_body(body) {
        let Content::Heading(heading) = block else {
            continue;
        };
        let level = heading.level().get();

        while open.last().is_some_and(|top| top.level >= level) {
            if let Some(done) = open.pop() {
                close(done, &mut open, &mut roots);
            }
        }

        open.push(TocEntry {
            text: heading.text().to_string(),
            anchor_id: heading.anchor_id().to_string(),
            level,
            children: Vec::new(),
        });
    }

    while let Some(done) = open.pop() {
        close(done, &mut open, &mut roots);
    }

    TableOfContents { entries: roots }
}
