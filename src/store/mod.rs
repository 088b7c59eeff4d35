// src/store/mod.rs
//! Keyed lookup over fully built articles.
//!
//! Articles are wrapped in `Arc` before they are inserted, so a reader can
//! only ever observe a finished aggregate and never needs a lock to use it.

use crate::error::{AppError, Result};
use crate::model::Article;
use crate::types::{ArticleId, Warning};
use crate::validation::{validate_article, ValidationPolicy};
use dashmap::DashMap;
use log::debug;
use std::path::Path;
use std::sync::Arc;

/// The three articles the service has always shipped with, in the flat
/// section format.
const SEED_FIXTURES: &str = include_str!("../../fixtures/articles.json");

/// Read access to stored articles.
pub trait ArticleRepository {
    fn find_by_id(&self, id: &str) -> Option<Arc<Article>>;

    /// Every article, ordered by id.
    fn find_all(&self) -> Vec<Arc<Article>>;

    /// Like [`find_by_id`](Self::find_by_id), but absence is an error.
    fn require(&self, id: &str) -> Result<Arc<Article>> {
        self.find_by_id(id)
            .ok_or_else(|| AppError::ArticleNotFound(id.to_string()))
    }
}

/// Concurrent in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    articles: DashMap<ArticleId, Arc<Article>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the bundled fixture articles.
    pub fn seeded() -> Result<Self> {
        Self::from_json_str("bundled fixtures", SEED_FIXTURES)
    }

    /// Loads a JSON array of articles from disk.
    pub fn from_json(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let articles: Vec<Article> =
            serde_json::from_str(&raw).map_err(|source| AppError::JsonParseError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_articles(articles, &path.display().to_string())
    }

    pub fn from_json_str(source_name: &str, json: &str) -> Result<Self> {
        let articles: Vec<Article> =
            serde_json::from_str(json).map_err(|e| AppError::MalformedFixture {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        Self::from_articles(articles, source_name)
    }

    /// Builds a store, refusing duplicate ids.
    pub fn from_articles(
        articles: impl IntoIterator<Item = Article>,
        source_name: &str,
    ) -> Result<Self> {
        let store = Self::new();
        for article in articles {
            let id = article.id().clone();
            if store.articles.contains_key(&id) {
                return Err(AppError::MalformedFixture {
                    source_name: source_name.to_string(),
                    message: format!("duplicate article id '{}'", id),
                });
            }
            store.articles.insert(id, Arc::new(article));
        }
        debug!("Loaded {} articles from {}", store.len(), source_name);
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Runs the structural checks over every stored article.
    pub fn validate(&self, policy: &ValidationPolicy) -> Result<Vec<Warning>> {
        let mut warnings = Vec::new();
        for article in self.find_all() {
            warnings.extend(validate_article(&article, policy)?);
        }
        Ok(warnings)
    }
}

impl ArticleRepository for InMemoryArticleStore {
    /// Exact match on the stored id; no trimming or normalisation.
    fn find_by_id(&self, id: &str) -> Option<Arc<Article>> {
        self.articles.get(id).map(|entry| Arc::clone(entry.value()))
    }

    fn find_all(&self) -> Vec<Arc<Article>> {
        let mut all: Vec<Arc<Article>> = self
            .articles
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Content, ContentKind};

    #[test]
    fn test_seeded_store_has_three_articles() {
        let store = InMemoryArticleStore::seeded().unwrap();
        let ids: Vec<String> = store
            .find_all()
            .iter()
            .map(|a| a.id().to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["building-effective-agents", "claude-opus-4-6", "economic-index"]
        );
    }

    #[test]
    fn test_seeded_sections_are_canonical() {
        let store = InMemoryArticleStore::seeded().unwrap();
        let article = store.require("economic-index").unwrap();
        assert_eq!(article.sections()[0].kind(), ContentKind::RichText);
        assert_eq!(article.sections()[1].kind(), ContentKind::Heading);
        assert!(article
            .sections()
            .iter()
            .any(|s| matches!(s, Content::ContentList(_))));
    }

    #[test]
    fn test_require_maps_absence_to_not_found() {
        let store = InMemoryArticleStore::seeded().unwrap();
        let err = store.require("nonexistent").unwrap_err();
        assert!(err.is_not_found());
        assert!(store.find_by_id("not a valid id").is_none());
    }

    #[test]
    fn test_lookup_matches_id_exactly() {
        let store = InMemoryArticleStore::seeded().unwrap();
        assert!(store.find_by_id("claude-opus-4-6").is_some());
        assert!(store.find_by_id(" claude-opus-4-6 ").is_none());
        assert!(store.find_by_id("claude-opus-4-6\n").is_none());
        assert!(store.find_by_id("Claude-Opus-4-6").is_none());
        assert!(store.require(" economic-index").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "a", "title": "A", "category": "X", "sections": []},
            {"id": "a", "title": "B", "category": "Y", "sections": []}
        ]"#;
        let err = InMemoryArticleStore::from_json_str("inline", json).unwrap_err();
        assert!(err.to_string().contains("duplicate article id 'a'"), "{}", err);
    }

    #[test]
    fn test_malformed_json_names_its_source() {
        let err = InMemoryArticleStore::from_json_str("inline", "[{").unwrap_err();
        assert!(matches!(err, AppError::MalformedFixture { .. }));
        assert!(err.to_string().starts_with("Malformed fixture inline"));
    }

    #[test]
    fn test_concurrent_readers() {
        let store = InMemoryArticleStore::seeded().unwrap();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert!(store.find_by_id("claude-opus-4-6").is_some());
                        assert_eq!(store.find_all().len(), 3);
                    }
                });
            }
        });
    }

    #[test]
    fn test_seeded_articles_pass_strict_validation() {
        let store = InMemoryArticleStore::seeded().unwrap();
        assert!(store.validate(&ValidationPolicy::strict()).unwrap().is_empty());
    }
}
