use crate::types::{Slug, TaxonomyId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyKind {
    /// Primary classification (Research, Product, Engineering)
    Category,
    /// Secondary labels
    Tag,
    /// Multi-part content series
    Series,
    /// Broad topic areas
    Topic,
}

/// A node in the classification hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaxonomyId>,
    pub name: String,
    pub slug: Slug,
    pub kind: TaxonomyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TaxonomyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Taxonomy {
    /// A taxonomy entry whose id and slug derive from its name.
    pub fn named(kind: TaxonomyKind, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = Slug::from_text(&name);
        Self {
            id: TaxonomyId::from_slug(&slug),
            name,
            slug,
            kind,
            parent_id: None,
            description: None,
            color: None,
            icon_url: None,
        }
    }

    pub fn category(name: impl Into<String>) -> Self {
        Self::named(TaxonomyKind::Category, name)
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::named(TaxonomyKind::Tag, name)
    }

    pub fn topic(name: impl Into<String>) -> Self {
        Self::named(TaxonomyKind::Topic, name)
    }

    pub fn series(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::named(TaxonomyKind::Series, name).with_description(description)
    }

    pub fn with_parent(mut self, parent: &Taxonomy) -> Self {
        self.parent_id = parent.id.clone();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_derives_id_and_slug() {
        let category = Taxonomy::category("Machine Learning");
        assert_eq!(category.slug.as_str(), "machine-learning");
        assert_eq!(
            category.id.as_ref().map(|id| id.as_str()),
            Some("machine-learning")
        );
        assert_eq!(category.kind, TaxonomyKind::Category);
        assert!(category.is_root());
    }

    #[test]
    fn test_parent_link() {
        let research = Taxonomy::category("Research");
        let econ = Taxonomy::topic("Economics").with_parent(&research);
        assert_eq!(econ.parent_id, research.id);
        assert!(!econ.is_root());
    }

    #[test]
    fn test_unsluggable_name_has_no_id() {
        let odd = Taxonomy::tag("???");
        assert!(odd.id.is_none());
        assert!(odd.slug.is_empty());
    }
}
