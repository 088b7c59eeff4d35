use super::blocks::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One node of an article body.
///
/// The set of variants is closed: every consumer matches exhaustively, so a
/// new variant fails to compile until each consumer handles it. On the wire
/// a block is an object whose `type` field names the variant.
///
/// Dropping a block recurses once per nesting level. Trees nested tens of
/// thousands of levels deep should be released with [`Content::dismantle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    RichText(RichText),
    Heading(Heading),
    ContentList(ContentList),
    Media(Media),
    CodeBlock(CodeBlock),
    Quote(Quote),
    Callout(Callout),
    Table(Table),
    Accordion(Accordion),
    Divider,
    Embed(Embed),
    Columns(Columns),
    FootnoteRef(FootnoteRef),
}

/// Discriminator of a [`Content`] block, mirroring the wire `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    RichText,
    Heading,
    ContentList,
    Media,
    CodeBlock,
    Quote,
    Callout,
    Table,
    Accordion,
    Divider,
    Embed,
    Columns,
    FootnoteRef,
}

impl ContentKind {
    /// Every kind, in declaration order.
    pub const ALL: [ContentKind; 13] = [
        ContentKind::RichText,
        ContentKind::Heading,
        ContentKind::ContentList,
        ContentKind::Media,
        ContentKind::CodeBlock,
        ContentKind::Quote,
        ContentKind::Callout,
        ContentKind::Table,
        ContentKind::Accordion,
        ContentKind::Divider,
        ContentKind::Embed,
        ContentKind::Columns,
        ContentKind::FootnoteRef,
    ];

    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::RichText => "rich_text",
            ContentKind::Heading => "heading",
            ContentKind::ContentList => "content_list",
            ContentKind::Media => "media",
            ContentKind::CodeBlock => "code_block",
            ContentKind::Quote => "quote",
            ContentKind::Callout => "callout",
            ContentKind::Table => "table",
            ContentKind::Accordion => "accordion",
            ContentKind::Divider => "divider",
            ContentKind::Embed => "embed",
            ContentKind::Columns => "columns",
            ContentKind::FootnoteRef => "footnote_ref",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::RichText(_) => ContentKind::RichText,
            Content::Heading(_) => ContentKind::Heading,
            Content::ContentList(_) => ContentKind::ContentList,
            Content::Media(_) => ContentKind::Media,
            Content::CodeBlock(_) => ContentKind::CodeBlock,
            Content::Quote(_) => ContentKind::Quote,
            Content::Callout(_) => ContentKind::Callout,
            Content::Table(_) => ContentKind::Table,
            Content::Accordion(_) => ContentKind::Accordion,
            Content::Divider => ContentKind::Divider,
            Content::Embed(_) => ContentKind::Embed,
            Content::Columns(_) => ContentKind::Columns,
            Content::FootnoteRef(_) => ContentKind::FootnoteRef,
        }
    }

    /// Blocks nested directly inside this one, in document order.
    pub fn children(&self) -> Vec<&Content> {
        match self {
            Content::RichText(_)
            | Content::Heading(_)
            | Content::Media(_)
            | Content::CodeBlock(_)
            | Content::Divider
            | Content::Embed(_) => Vec::new(),
            Content::ContentList(list) => list
                .items
                .iter()
                .flat_map(|item| item.content.iter())
                .collect(),
            Content::Quote(quote) => quote.content.iter().collect(),
            Content::Callout(callout) => callout.content.iter().collect(),
            Content::Table(table) => table.rows.iter().flatten().collect(),
            Content::Accordion(accordion) => accordion.content.iter().collect(),
            Content::Columns(columns) => columns
                .columns
                .iter()
                .flat_map(|column| column.content.iter())
                .collect(),
            Content::FootnoteRef(footnote) => footnote.content.iter().collect(),
        }
    }

    /// Releases a tree of any depth without recursing on the call stack.
    pub fn dismantle(self) {
        let mut pending = vec![self];
        while let Some(block) = pending.pop() {
            // `block` drops here with its children already moved out
            pending.extend(block.into_children());
        }
    }

    fn into_children(self) -> Vec<Content> {
        match self {
            Content::RichText(_)
            | Content::Heading(_)
            | Content::Media(_)
            | Content::CodeBlock(_)
            | Content::Divider
            | Content::Embed(_) => Vec::new(),
            Content::ContentList(list) => list
                .items
                .into_iter()
                .flat_map(|item| item.content)
                .collect(),
            Content::Quote(quote) => quote.content,
            Content::Callout(callout) => callout.content,
            Content::Table(table) => table.rows.into_iter().flatten().collect(),
            Content::Accordion(accordion) => accordion.content,
            Content::Columns(columns) => columns
                .columns
                .into_iter()
                .flat_map(|column| column.content)
                .collect(),
            Content::FootnoteRef(footnote) => footnote.content,
        }
    }

    /// Accept a visitor
    pub fn accept<'a, V: ContentVisitor<'a>>(&'a self, visitor: &mut V) -> V::Output {
        match self {
            Content::RichText(b) => visitor.visit_rich_text(b),
            Content::Heading(b) => visitor.visit_heading(b),
            Content::ContentList(b) => visitor.visit_list(b),
            Content::Media(b) => visitor.visit_media(b),
            Content::CodeBlock(b) => visitor.visit_code_block(b),
            Content::Quote(b) => visitor.visit_quote(b),
            Content::Callout(b) => visitor.visit_callout(b),
            Content::Table(b) => visitor.visit_table(b),
            Content::Accordion(b) => visitor.visit_accordion(b),
            Content::Divider => visitor.visit_divider(),
            Content::Embed(b) => visitor.visit_embed(b),
            Content::Columns(b) => visitor.visit_columns(b),
            Content::FootnoteRef(b) => visitor.visit_footnote_ref(b),
        }
    }
}

/// Visitor over the content algebra.
///
/// Every method is required: implementors decide what each variant means to
/// them, and a new variant is a compile error in every implementation.
pub trait ContentVisitor<'a> {
    type Output;

    fn visit_rich_text(&mut self, text: &'a RichText) -> Self::Output;
    fn visit_heading(&mut self, heading: &'a Heading) -> Self::Output;
    fn visit_list(&mut self, list: &'a ContentList) -> Self::Output;
    fn visit_media(&mut self, media: &'a Media) -> Self::Output;
    fn visit_code_block(&mut self, code: &'a CodeBlock) -> Self::Output;
    fn visit_quote(&mut self, quote: &'a Quote) -> Self::Output;
    fn visit_callout(&mut self, callout: &'a Callout) -> Self::Output;
    fn visit_table(&mut self, table: &'a Table) -> Self::Output;
    fn visit_accordion(&mut self, accordion: &'a Accordion) -> Self::Output;
    fn visit_divider(&mut self) -> Self::Output;
    fn visit_embed(&mut self, embed: &'a Embed) -> Self::Output;
    fn visit_columns(&mut self, columns: &'a Columns) -> Self::Output;
    fn visit_footnote_ref(&mut self, footnote: &'a FootnoteRef) -> Self::Output;
}

impl From<RichText> for Content {
    fn from(block: RichText) -> Self {
        Content::RichText(block)
    }
}

impl From<Heading> for Content {
    fn from(block: Heading) -> Self {
        Content::Heading(block)
    }
}

impl From<ContentList> for Content {
    fn from(block: ContentList) -> Self {
        Content::ContentList(block)
    }
}

impl From<Media> for Content {
    fn from(block: Media) -> Self {
        Content::Media(block)
    }
}

impl From<CodeBlock> for Content {
    fn from(block: CodeBlock) -> Self {
        Content::CodeBlock(block)
    }
}

impl From<Quote> for Content {
    fn from(block: Quote) -> Self {
        Content::Quote(block)
    }
}

impl From<Callout> for Content {
    fn from(block: Callout) -> Self {
        Content::Callout(block)
    }
}

impl From<Table> for Content {
    fn from(block: Table) -> Self {
        Content::Table(block)
    }
}

impl From<Accordion> for Content {
    fn from(block: Accordion) -> Self {
        Content::Accordion(block)
    }
}

impl From<Embed> for Content {
    fn from(block: Embed) -> Self {
        Content::Embed(block)
    }
}

impl From<Columns> for Content {
    fn from(block: Columns) -> Self {
        Content::Columns(block)
    }
}

impl From<FootnoteRef> for Content {
    fn from(block: FootnoteRef) -> Self {
        Content::FootnoteRef(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kind_tags_are_unique() {
        let tags: HashSet<&str> = ContentKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(tags.len(), ContentKind::ALL.len());
    }

    #[test]
    fn test_kind_tag_matches_serde_tag() {
        for kind in ContentKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn test_divider_wire_form() {
        let json = serde_json::to_value(Content::Divider).unwrap();
        assert_eq!(json, serde_json::json!({"type": "divider"}));
        let back: Content = serde_json::from_value(json).unwrap();
        assert_eq!(back, Content::Divider);
    }

    #[test]
    fn test_children_of_columns_flatten_in_order() {
        let columns = Content::Columns(Columns {
            columns: vec![
                Column {
                    content: vec![RichText::plain("left").into()],
                    span: crate::types::ColumnSpan::span(6).unwrap(),
                },
                Column {
                    content: vec![RichText::plain("right").into(), Content::Divider],
                    span: crate::types::ColumnSpan::span(6).unwrap(),
                },
            ],
        });
        let kinds: Vec<ContentKind> = columns.children().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![ContentKind::RichText, ContentKind::RichText, ContentKind::Divider]
        );
    }

    #[test]
    fn test_dismantle_releases_deep_trees() {
        let mut block = Content::from(RichText::plain("core"));
        for depth in 0..100_000 {
            block = if depth % 2 == 0 {
                Content::Quote(Quote {
                    content: vec![block],
                    citation: None,
                    citation_url: None,
                })
            } else {
                Content::ContentList(ContentList {
                    kind: ListKind::Unordered,
                    items: vec![ListItem {
                        content: vec![block],
                        checked: None,
                    }],
                })
            };
        }
        block.dismantle();
    }

    #[test]
    fn test_into_children_matches_children() {
        let columns = Content::Columns(Columns {
            columns: vec![Column {
                content: vec![RichText::plain("left").into(), Content::Divider],
                span: crate::types::ColumnSpan::span(6).unwrap(),
            }],
        });
        let borrowed: Vec<Content> = columns.children().into_iter().cloned().collect();
        assert_eq!(columns.into_children(), borrowed);
    }

    #[test]
    fn test_leaf_blocks_have_no_children() {
        assert!(Content::Divider.children().is_empty());
        assert!(Content::from(Heading::h1("Top")).children().is_empty());
    }
}
