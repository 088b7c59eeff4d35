// src/model/legacy.rs
//! Flat section encoding used by the first article service.
//!
//! Only an input adapter: legacy sections are converted into canonical
//! [`Content`] blocks as they are read, and output is always canonical.

use super::blocks::{CodeBlock, ContentList, Heading, Media, MediaKind, Quote, RichText};
use super::content::Content;
use crate::types::ValidationError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Level assigned to legacy headings, which carried no level of their own.
const LEGACY_HEADING_LEVEL: u32 = 2;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LegacySection {
    #[serde(rename_all = "camelCase")]
    Paragraph { content: String },
    #[serde(rename_all = "camelCase")]
    Heading { heading: String },
    #[serde(rename_all = "camelCase")]
    List { items: Vec<String> },
    #[serde(rename_all = "camelCase")]
    Image {
        image_url: String,
        #[serde(default)]
        image_alt: Option<String>,
        #[serde(default)]
        image_caption: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Code {
        #[serde(default)]
        code_language: Option<String>,
        code_snippet: String,
    },
    #[serde(rename_all = "camelCase")]
    Quote {
        content: String,
        #[serde(default)]
        attribution: Option<String>,
    },
}

impl TryFrom<LegacySection> for Content {
    type Error = ValidationError;

    fn try_from(section: LegacySection) -> Result<Self, Self::Error> {
        Ok(match section {
            LegacySection::Paragraph { content } => RichText::plain(content).into(),
            LegacySection::Heading { heading } => {
                Heading::new(heading, LEGACY_HEADING_LEVEL, None)?.into()
            }
            LegacySection::List { items } => ContentList::unordered(items).into(),
            LegacySection::Image {
                image_url,
                image_alt,
                image_caption,
            } => {
                let media = Media::new(MediaKind::Image, image_url, image_alt)?;
                match image_caption {
                    Some(caption) => media.with_caption(caption).into(),
                    None => media.into(),
                }
            }
            LegacySection::Code {
                code_language,
                code_snippet,
            } => CodeBlock::of(code_language.unwrap_or_default(), code_snippet).into(),
            LegacySection::Quote {
                content,
                attribution,
            } => {
                let mut quote = Quote::of(content);
                quote.citation = attribution;
                quote.into()
            }
        })
    }
}

/// Whether a raw section object uses the flat legacy shape.
///
/// `heading` and `quote` share their tag with canonical blocks, so the
/// payload shape decides: a `heading` field, or string `content`.
fn is_legacy_shape(value: &Value) -> bool {
    match value.get("type").and_then(Value::as_str) {
        Some("paragraph" | "list" | "image" | "code") => true,
        Some("heading") => value.get("heading").is_some() && value.get("text").is_none(),
        Some("quote") => value.get("content").is_some_and(Value::is_string),
        _ => false,
    }
}

/// Convert one raw section, canonical or legacy, into a block.
pub fn section_from_value(value: Value) -> Result<Content, String> {
    if is_legacy_shape(&value) {
        let section: LegacySection =
            serde_json::from_value(value).map_err(|e| format!("legacy section: {}", e))?;
        Content::try_from(section).map_err(|e| format!("legacy section: {}", e))
    } else {
        serde_json::from_value(value).map_err(|e| e.to_string())
    }
}

/// `deserialize_with` helper for section arrays that may mix encodings.
pub fn deserialize_sections<'de, D>(deserializer: D) -> Result<Vec<Content>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            section_from_value(value)
                .map_err(|e| serde::de::Error::custom(format!("section {}: {}", index, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blocks::ListKind;
    use serde_json::json;

    #[test]
    fn test_paragraph_becomes_rich_text() {
        let block = section_from_value(json!({"type": "paragraph", "content": "Hello"})).unwrap();
        assert_eq!(block, Content::RichText(RichText::plain("Hello")));
    }

    #[test]
    fn test_legacy_heading_gets_level_and_anchor() {
        let block =
            section_from_value(json!({"type": "heading", "heading": "Safety & Alignment"}))
                .unwrap();
        match block {
            Content::Heading(h) => {
                assert_eq!(h.level().get(), 2);
                assert_eq!(h.anchor_id(), "safety-alignment");
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_canonical_heading_is_not_mistaken_for_legacy() {
        let block = section_from_value(
            json!({"type": "heading", "text": "Intro", "level": 1, "anchorId": "intro"}),
        )
        .unwrap();
        assert_eq!(block, Content::Heading(Heading::h1("Intro")));
    }

    #[test]
    fn test_list_and_quote() {
        let list = section_from_value(json!({"type": "list", "items": ["a", "b"]})).unwrap();
        match list {
            Content::ContentList(l) => {
                assert_eq!(l.kind, ListKind::Unordered);
                assert_eq!(l.items.len(), 2);
            }
            other => panic!("expected list, got {:?}", other),
        }

        let quote = section_from_value(
            json!({"type": "quote", "content": "Keep it simple", "attribution": "Team"}),
        )
        .unwrap();
        assert_eq!(
            quote,
            Content::Quote(Quote::with_citation("Keep it simple", "Team"))
        );
    }

    #[test]
    fn test_image_and_code() {
        let image = section_from_value(json!({
            "type": "image",
            "imageUrl": "/images/a.png",
            "imageAlt": "Architecture diagram",
            "imageCaption": "Figure 1"
        }))
        .unwrap();
        match image {
            Content::Media(m) => {
                assert_eq!(m.src(), "/images/a.png");
                assert_eq!(m.caption(), Some("Figure 1"));
            }
            other => panic!("expected media, got {:?}", other),
        }

        let code = section_from_value(
            json!({"type": "code", "codeLanguage": "rust", "codeSnippet": "fn main() {}"}),
        )
        .unwrap();
        assert_eq!(code, Content::CodeBlock(CodeBlock::of("rust", "fn main() {}")));
    }

    #[test]
    fn test_legacy_image_without_alt_is_rejected() {
        let err = section_from_value(json!({"type": "image", "imageUrl": "/x.png"})).unwrap_err();
        assert!(err.contains("alt text"), "unexpected error: {}", err);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(section_from_value(json!({"type": "marquee", "content": "x"})).is_err());
    }
}
