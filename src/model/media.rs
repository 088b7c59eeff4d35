use super::blocks::Dimensions;
use crate::types::MediaId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaAssetKind {
    Image,
    Video,
    Audio,
    Document,
    Interactive,
}

/// A rendition of an asset at a specific size/format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaVariant {
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// webp, avif, jpg, ...
    pub format: String,
}

/// Point of interest for smart cropping, in unit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
}

impl FocalPoint {
    pub const CENTER: FocalPoint = FocalPoint { x: 0.5, y: 0.5 };
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Media asset attached to an article (hero, social cards, gallery).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MediaId>,
    pub kind: MediaAssetKind,
    pub primary_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, MediaVariant>,
    #[serde(default)]
    pub focal_point: FocalPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_hash: Option<String>,
}

impl ArticleMedia {
    pub fn builder(primary_url: impl Into<String>) -> ArticleMediaBuilder {
        ArticleMediaBuilder {
            media: ArticleMedia {
                id: None,
                kind: MediaAssetKind::Image,
                primary_url: primary_url.into(),
                alt: None,
                caption: None,
                attribution: None,
                dimensions: None,
                variants: IndexMap::new(),
                focal_point: FocalPoint::CENTER,
                blur_hash: None,
            },
        }
    }

    pub fn simple_image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::builder(url).alt(alt).build()
    }

    /// Smallest variant at least `min_width` wide, if any.
    pub fn variant_for_width(&self, min_width: u32) -> Option<&MediaVariant> {
        self.variants
            .values()
            .filter(|v| v.width >= min_width)
            .min_by_key(|v| v.width)
    }
}

/// Consuming builder for [`ArticleMedia`].
#[derive(Debug, Clone)]
pub struct ArticleMediaBuilder {
    media: ArticleMedia,
}

impl ArticleMediaBuilder {
    pub fn id(mut self, id: MediaId) -> Self {
        self.media.id = Some(id);
        self
    }

    pub fn kind(mut self, kind: MediaAssetKind) -> Self {
        self.media.kind = kind;
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.media.alt = Some(alt.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.media.caption = Some(caption.into());
        self
    }

    pub fn attribution(mut self, attribution: impl Into<String>) -> Self {
        self.media.attribution = Some(attribution.into());
        self
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.media.dimensions = Some(Dimensions::new(width, height));
        self
    }

    pub fn variant(mut self, label: impl Into<String>, variant: MediaVariant) -> Self {
        self.media.variants.insert(label.into(), variant);
        self
    }

    pub fn focal_point(mut self, x: f64, y: f64) -> Self {
        self.media.focal_point = FocalPoint { x, y };
        self
    }

    pub fn blur_hash(mut self, blur_hash: impl Into<String>) -> Self {
        self.media.blur_hash = Some(blur_hash.into());
        self
    }

    pub fn build(self) -> ArticleMedia {
        self.media
    }
}
