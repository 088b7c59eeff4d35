use super::content::Content;
use crate::types::{slugify, ColumnSpan, HeadingLevel, ValidationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// --- Rich text ---

/// Inline formatting kinds applied to a span of rich text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Bold,
    Italic,
    Code,
    Link,
    Strikethrough,
    Highlight,
}

/// A formatted character range `[start, end)` within a rich text block.
///
/// Spans may overlap. `value` carries the URL for links and similar payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InlineFormatFields", rename_all = "camelCase")]
pub struct InlineFormat {
    start: usize,
    end: usize,
    kind: FormatKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineFormatFields {
    start: usize,
    end: usize,
    kind: FormatKind,
    #[serde(default)]
    value: Option<String>,
}

impl TryFrom<InlineFormatFields> for InlineFormat {
    type Error = ValidationError;

    fn try_from(fields: InlineFormatFields) -> Result<Self, Self::Error> {
        InlineFormat::new(fields.start, fields.end, fields.kind, fields.value)
    }
}

impl InlineFormat {
    pub fn new(
        start: usize,
        end: usize,
        kind: FormatKind,
        value: Option<String>,
    ) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidSpan { start, end });
        }
        Ok(Self {
            start,
            end,
            kind,
            value,
        })
    }

    pub fn link(start: usize, end: usize, url: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(start, end, FormatKind::Link, Some(url.into()))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Text with inline formatting spans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichText {
    pub text: String,
    #[serde(default)]
    pub formats: Vec<InlineFormat>,
}

impl RichText {
    pub fn new(text: impl Into<String>, formats: Vec<InlineFormat>) -> Self {
        Self {
            text: text.into(),
            formats,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }
}

// --- Heading ---

/// Heading with semantic level and anchor id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HeadingFields", rename_all = "camelCase")]
pub struct Heading {
    text: String,
    level: HeadingLevel,
    anchor_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeadingFields {
    text: String,
    level: u32,
    #[serde(default)]
    anchor_id: Option<String>,
}

impl TryFrom<HeadingFields> for Heading {
    type Error = ValidationError;

    fn try_from(fields: HeadingFields) -> Result<Self, Self::Error> {
        Heading::new(fields.text, fields.level, fields.anchor_id)
    }
}

impl Heading {
    /// Build a heading; a missing or blank anchor is derived from the text.
    pub fn new(
        text: impl Into<String>,
        level: u32,
        anchor_id: Option<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        let level = HeadingLevel::heading(level)?;
        let anchor_id = match anchor_id {
            Some(anchor) if !anchor.trim().is_empty() => anchor,
            _ => slugify(&text),
        };
        Ok(Self {
            text,
            level,
            anchor_id,
        })
    }

    fn at_level(text: impl Into<String>, level: u8) -> Self {
        let text = text.into();
        Self {
            anchor_id: slugify(&text),
            text,
            level: HeadingLevel::heading(level as u32).unwrap_or_default(),
        }
    }

    pub fn h1(text: impl Into<String>) -> Self {
        Self::at_level(text, 1)
    }

    pub fn h2(text: impl Into<String>) -> Self {
        Self::at_level(text, 2)
    }

    pub fn h3(text: impl Into<String>) -> Self {
        Self::at_level(text, 3)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    pub fn anchor_id(&self) -> &str {
        &self.anchor_id
    }
}

// --- Lists ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Ordered,
    Unordered,
    Checklist,
}

/// One list entry. `checked` is only meaningful in checklists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub content: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl ListItem {
    pub fn of(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::RichText(RichText::plain(text))],
            checked: None,
        }
    }

    pub fn checked(text: impl Into<String>, checked: bool) -> Self {
        Self {
            content: vec![Content::RichText(RichText::plain(text))],
            checked: Some(checked),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentList {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

impl ContentList {
    fn of_strings<I, S>(kind: ListKind, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            items: items.into_iter().map(ListItem::of).collect(),
        }
    }

    pub fn ordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::of_strings(ListKind::Ordered, items)
    }

    pub fn unordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::of_strings(ListKind::Unordered, items)
    }

    pub fn checklist(items: Vec<ListItem>) -> Self {
        Self {
            kind: ListKind::Checklist,
            items,
        }
    }
}

// --- Media ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Embed,
}

/// Pixel dimensions of a media asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; `None` for a zero height.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0 {
            None
        } else {
            Some(self.width as f64 / self.height as f64)
        }
    }
}

/// Inline media. Images must carry alt text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MediaFields", rename_all = "camelCase")]
pub struct Media {
    kind: MediaKind,
    src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    variants: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribution: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaFields {
    kind: MediaKind,
    src: String,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    variants: IndexMap<String, String>,
    #[serde(default)]
    dimensions: Option<Dimensions>,
    #[serde(default)]
    attribution: Option<String>,
}

impl TryFrom<MediaFields> for Media {
    type Error = ValidationError;

    fn try_from(fields: MediaFields) -> Result<Self, Self::Error> {
        let media = Media::new(fields.kind, fields.src, fields.alt)?;
        Ok(Self {
            caption: fields.caption,
            variants: fields.variants,
            dimensions: fields.dimensions,
            attribution: fields.attribution,
            ..media
        })
    }
}

impl Media {
    pub fn new(
        kind: MediaKind,
        src: impl Into<String>,
        alt: Option<String>,
    ) -> Result<Self, ValidationError> {
        let src = src.into();
        if src.trim().is_empty() {
            return Err(ValidationError::EmptyField("media src"));
        }
        let has_alt = alt.as_deref().is_some_and(|a| !a.trim().is_empty());
        if kind == MediaKind::Image && !has_alt {
            return Err(ValidationError::MissingAltText { src });
        }
        Ok(Self {
            kind,
            src,
            alt,
            caption: None,
            variants: IndexMap::new(),
            dimensions: None,
            attribution: None,
        })
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(MediaKind::Image, src, Some(alt.into()))
    }

    pub fn image_with_caption(
        src: impl Into<String>,
        alt: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::image(src, alt)?.with_caption(caption))
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Add a responsive variant, e.g. `("2x", "/img@2x.png")`.
    pub fn with_variant(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.variants.insert(label.into(), url.into());
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some(Dimensions::new(width, height));
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn variants(&self) -> &IndexMap<String, String> {
        &self.variants
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }
}

// --- Code ---

/// Highlighted line range (1-based, inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HighlightRangeFields", rename_all = "camelCase")]
pub struct HighlightRange {
    start_line: u32,
    end_line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HighlightRangeFields {
    start_line: u32,
    end_line: u32,
    #[serde(default)]
    annotation: Option<String>,
}

impl TryFrom<HighlightRangeFields> for HighlightRange {
    type Error = ValidationError;

    fn try_from(fields: HighlightRangeFields) -> Result<Self, Self::Error> {
        HighlightRange::new(fields.start_line, fields.end_line, fields.annotation)
    }
}

impl HighlightRange {
    pub fn new(
        start_line: u32,
        end_line: u32,
        annotation: Option<String>,
    ) -> Result<Self, ValidationError> {
        if start_line == 0 || start_line > end_line {
            return Err(ValidationError::InvalidHighlight {
                start_line,
                end_line,
            });
        }
        Ok(Self {
            start_line,
            end_line,
            annotation,
        })
    }

    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }
}

/// Code block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    pub code: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<HighlightRange>,
    #[serde(default)]
    pub show_line_numbers: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl CodeBlock {
    pub fn of(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
            filename: None,
            highlights: Vec::new(),
            show_line_numbers: true,
            caption: None,
        }
    }

    pub fn with_file(
        language: impl Into<String>,
        code: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::of(language, code)
        }
    }
}

// --- Quote / callout ---

/// Blockquote with optional citation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub content: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_url: Option<String>,
}

impl Quote {
    pub fn of(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::RichText(RichText::plain(text))],
            citation: None,
            citation_url: None,
        }
    }

    pub fn with_citation(text: impl Into<String>, citation: impl Into<String>) -> Self {
        Self {
            citation: Some(citation.into()),
            ..Self::of(text)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    Note,
    Tip,
    Warning,
    Danger,
    Info,
}

/// Admonition block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callout {
    pub kind: CalloutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: Vec<Content>,
}

impl Callout {
    pub fn note(text: impl Into<String>) -> Self {
        Self {
            kind: CalloutKind::Note,
            title: None,
            content: vec![Content::RichText(RichText::plain(text))],
        }
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: CalloutKind::Warning,
            title: Some(title.into()),
            content: vec![Content::RichText(RichText::plain(text))],
        }
    }
}

// --- Table ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Table with headers and one content block per cell.
///
/// Row width is not checked here; see `validation::ValidationPolicy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Content>>,
    #[serde(default)]
    pub alignments: Vec<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

// --- Accordion ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accordion {
    pub summary: String,
    pub content: Vec<Content>,
    #[serde(default)]
    pub default_open: bool,
}

// --- Embed ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedKind {
    Youtube,
    Twitter,
    Gist,
    Codepen,
    Figma,
    Custom,
}

/// Third-party embed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Embed {
    pub kind: EmbedKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_id: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, String>,
}

impl Embed {
    pub fn youtube(video_id: impl Into<String>) -> Self {
        Self {
            kind: EmbedKind::Youtube,
            url: None,
            embed_id: Some(video_id.into()),
            metadata: IndexMap::new(),
        }
    }
}

// --- Columns ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub content: Vec<Content>,
    pub span: ColumnSpan,
}

/// Side-by-side layout on a 12-unit grid.
///
/// The sum of spans is not checked here; see `validation::ValidationPolicy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Columns {
    pub columns: Vec<Column>,
}

// --- Footnotes ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootnoteRef {
    pub id: String,
    pub content: Vec<Content>,
}
