// src/formatting/plain_text.rs
//! Plain-text extraction over the content algebra.
//!
//! Each variant is described by a [`Fragment`]: either finished text or a
//! list of nested blocks to render and join. The fragments are evaluated
//! with an explicit work stack, so nesting depth is bounded by memory rather
//! than by the call stack.

use crate::model::*;
use std::borrow::Cow;

/// How a single block contributes to plain text.
#[derive(Debug, Clone, PartialEq)]
enum Fragment<'a> {
    /// Final text for the block.
    Text(Cow<'a, str>),
    /// Render each part in order and join the results with `separator`.
    Join {
        parts: Vec<&'a Content>,
        separator: &'static str,
    },
}

impl<'a> Fragment<'a> {
    fn borrowed(text: &'a str) -> Self {
        Fragment::Text(Cow::Borrowed(text))
    }

    fn empty() -> Self {
        Fragment::Text(Cow::Borrowed(""))
    }
}

const LIST_SEPARATOR: &str = ", ";
const SPACE_SEPARATOR: &str = " ";
const TABLE_HEADER_SEPARATOR: &str = " | ";

/// Maps every variant to its extraction rule. No variant falls through.
struct PlainTextPlan;

impl<'a> ContentVisitor<'a> for PlainTextPlan {
    type Output = Fragment<'a>;

    fn visit_rich_text(&mut self, text: &'a RichText) -> Fragment<'a> {
        // Spans are formatting only
        Fragment::borrowed(&text.text)
    }

    fn visit_heading(&mut self, heading: &'a Heading) -> Fragment<'a> {
        Fragment::borrowed(heading.text())
    }

    fn visit_list(&mut self, list: &'a ContentList) -> Fragment<'a> {
        Fragment::Join {
            parts: list
                .items
                .iter()
                .flat_map(|item| item.content.iter())
                .collect(),
            separator: LIST_SEPARATOR,
        }
    }

    fn visit_media(&mut self, media: &'a Media) -> Fragment<'a> {
        media.alt().map_or_else(Fragment::empty, Fragment::borrowed)
    }

    fn visit_code_block(&mut self, code: &'a CodeBlock) -> Fragment<'a> {
        Fragment::borrowed(&code.code)
    }

    fn visit_quote(&mut self, quote: &'a Quote) -> Fragment<'a> {
        Fragment::Join {
            parts: quote.content.iter().collect(),
            separator: SPACE_SEPARATOR,
        }
    }

    fn visit_callout(&mut self, callout: &'a Callout) -> Fragment<'a> {
        // Title is presentation, not body text
        Fragment::Join {
            parts: callout.content.iter().collect(),
            separator: SPACE_SEPARATOR,
        }
    }

    fn visit_table(&mut self, table: &'a Table) -> Fragment<'a> {
        Fragment::Text(Cow::Owned(table.headers.join(TABLE_HEADER_SEPARATOR)))
    }

    fn visit_accordion(&mut self, accordion: &'a Accordion) -> Fragment<'a> {
        Fragment::borrowed(&accordion.summary)
    }

    fn visit_divider(&mut self) -> Fragment<'a> {
        Fragment::empty()
    }

    fn visit_embed(&mut self, embed: &'a Embed) -> Fragment<'a> {
        embed
            .url
            .as_deref()
            .map_or_else(Fragment::empty, Fragment::borrowed)
    }

    fn visit_columns(&mut self, columns: &'a Columns) -> Fragment<'a> {
        Fragment::Join {
            parts: columns
                .columns
                .iter()
                .flat_map(|column| column.content.iter())
                .collect(),
            separator: SPACE_SEPARATOR,
        }
    }

    fn visit_footnote_ref(&mut self, footnote: &'a FootnoteRef) -> Fragment<'a> {
        Fragment::Join {
            parts: footnote.content.iter().collect(),
            separator: SPACE_SEPARATOR,
        }
    }
}

/// Extraction rule for one block, without descending into it.
fn fragment(block: &Content) -> Fragment<'_> {
    block.accept(&mut PlainTextPlan)
}

enum Work<'a> {
    Render(&'a Content),
    Assemble {
        count: usize,
        separator: &'static str,
    },
}

/// Plain-text summary of a block and everything nested inside it.
///
/// Total and pure. Nested results are joined as-is, so an empty child
/// (a divider, media without alt) still contributes its separator.
pub fn render(block: &Content) -> String {
    let mut work = vec![Work::Render(block)];
    let mut finished: Vec<String> = Vec::new();

    while let Some(step) = work.pop() {
        match step {
            Work::Render(current) => match fragment(current) {
                Fragment::Text(text) => finished.push(text.into_owned()),
                Fragment::Join { parts, separator } => {
                    work.push(Work::Assemble {
                        count: parts.len(),
                        separator,
                    });
                    work.extend(parts.into_iter().rev().map(Work::Render));
                }
            },
            Work::Assemble { count, separator } => {
                let start = finished.len().saturating_sub(count);
                let joined = finished.split_off(start).join(separator);
                finished.push(joined);
            }
        }
    }

    finished.pop().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnSpan;

    fn text(s: &str) -> Content {
        RichText::plain(s).into()
    }

    #[test]
    fn test_rich_text_ignores_spans() {
        let formats = vec![
            InlineFormat::new(0, 4, FormatKind::Bold, None).unwrap(),
            InlineFormat::link(2, 8, "https://example.com").unwrap(),
        ];
        let block = Content::RichText(RichText::new("Safe AI systems", formats));
        assert_eq!(render(&block), "Safe AI systems");
    }

    #[test]
    fn test_divider_is_empty() {
        assert_eq!(render(&Content::Divider), "");
    }

    #[test]
    fn test_list_joins_with_comma() {
        let list = Content::from(ContentList::ordered(["one", "two", "three"]));
        assert_eq!(render(&list), "one, two, three");
    }

    #[test]
    fn test_callout_drops_title() {
        let callout = Content::from(Callout::warning("Heads up", "Rate limits apply"));
        assert_eq!(render(&callout), "Rate limits apply");
    }

    #[test]
    fn test_table_renders_headers_only() {
        let table = Content::Table(Table {
            headers: vec!["Model".into(), "Context".into(), "Price".into()],
            rows: vec![vec![text("Opus"), text("200k"), text("$15")]],
            alignments: vec![],
            caption: Some("Pricing".into()),
        });
        assert_eq!(render(&table), "Model | Context | Price");
    }

    #[test]
    fn test_media_and_embed_fall_back_to_empty() {
        let video = Content::from(Media::new(MediaKind::Video, "/clip.mp4", None).unwrap());
        assert_eq!(render(&video), "");

        let image = Content::from(Media::image("/a.png", "A chart").unwrap());
        assert_eq!(render(&image), "A chart");

        assert_eq!(render(&Embed::youtube("abc").into()), "");
    }

    #[test]
    fn test_empty_children_keep_separators() {
        let quote = Content::Quote(Quote {
            content: vec![text("a"), Content::Divider, text("b")],
            citation: None,
            citation_url: None,
        });
        assert_eq!(render(&quote), "a  b");
    }

    #[test]
    fn test_columns_flatten_with_space() {
        let columns = Content::Columns(Columns {
            columns: vec![
                Column {
                    content: vec![text("left"), text("more")],
                    span: ColumnSpan::span(8).unwrap(),
                },
                Column {
                    content: vec![Heading::h3("right").into()],
                    span: ColumnSpan::span(4).unwrap(),
                },
            ],
        });
        assert_eq!(render(&columns), "left more right");
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut block = text("core");
        for _ in 0..50_000 {
            block = Content::Quote(Quote {
                content: vec![block],
                citation: None,
                citation_url: None,
            });
        }
        assert_eq!(render(&block), "core");
        block.dismantle();
    }
}
