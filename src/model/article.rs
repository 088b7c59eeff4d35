use super::content::Content;
use super::legacy::deserialize_sections;
use crate::types::ArticleId;
use serde::{Deserialize, Serialize};

/// A published article in the flat, first-generation shape.
///
/// Body blocks are canonical [`Content`]; the flat section encoding is
/// accepted on input only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Display date as written by editors, e.g. "February 5, 2026".
    #[serde(default)]
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_alt: Option<String>,
    #[serde(default)]
    pub reading_time_minutes: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_sections")]
    pub sections: Vec<Content>,
}

impl Article {
    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    /// Body blocks in document order.
    pub fn sections(&self) -> &[Content] {
        &self.sections
    }
}
