// src/commands.rs
//! Command implementations behind the CLI. Output goes to any writer so the
//! commands can be exercised without a terminal.

use crate::analytics::{measure_body, table_of_contents};
use crate::config::Command;
use crate::constants::LIST_PREVIEW_CHARS;
use crate::error::Result;
use crate::formatting::{preview, render_all};
use crate::model::{ArticleV2, TocEntry};
use crate::store::ArticleRepository;
use log::debug;
use std::io::Write;

pub fn run<R, W>(command: &Command, store: &R, out: &mut W) -> Result<()>
where
    R: ArticleRepository + ?Sized,
    W: Write,
{
    debug!("Running {:?}", command);
    match command {
        Command::List => {
            for article in store.find_all() {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    article.id(),
                    article.category,
                    article.title,
                    preview(article.sections(), LIST_PREVIEW_CHARS)
                )?;
            }
        }
        Command::Show { id } => {
            let article = store.require(id)?;
            writeln!(out, "{}", serde_json::to_string_pretty(article.as_ref())?)?;
        }
        Command::Text { id, preview: None } => {
            let article = store.require(id)?;
            writeln!(out, "{}\n", article.title)?;
            writeln!(out, "{}", render_all(article.sections()))?;
        }
        Command::Text {
            id,
            preview: Some(max_chars),
        } => {
            let article = store.require(id)?;
            writeln!(out, "{}", preview(article.sections(), *max_chars))?;
        }
        Command::Outline { id } => {
            let article = store.require(id)?;
            for entry in &table_of_contents(article.sections()).entries {
                write_toc_entry(out, entry, 0)?;
            }
        }
        Command::Stats { id } => {
            let article = store.require(id)?;
            let stats = measure_body(article.sections());
            writeln!(out, "blocks: {}", stats.total_blocks)?;
            writeln!(out, "deepest nesting: {}", stats.deepest_nesting)?;
            writeln!(out, "words: {}", stats.word_count)?;
            writeln!(out, "reading time: {} min", stats.reading_time_minutes())?;
            for (kind, count) in &stats.per_kind {
                writeln!(out, "  {}: {}", kind, count)?;
            }
        }
        Command::Migrate { id } => {
            let article = store.require(id)?;
            let migrated = ArticleV2::from_legacy(&article);
            writeln!(out, "{}", serde_json::to_string_pretty(&migrated)?)?;
        }
    }
    Ok(())
}

fn write_toc_entry<W: Write>(out: &mut W, entry: &TocEntry, depth: usize) -> Result<()> {
    writeln!(
        out,
        "{}- {} (#{})",
        "  ".repeat(depth),
        entry.text,
        entry.anchor_id
    )?;
    for child in &entry.children {
        write_toc_entry(out, child, depth + 1)?;
    }
    Ok(())
}
