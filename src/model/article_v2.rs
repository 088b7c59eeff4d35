// src/model/article_v2.rs
//! The richer article aggregate: structured body plus editorial metadata.
//!
//! An [`ArticleV2`] is produced once by [`ArticleDraft::build`] and is
//! immutable afterwards. The draft is a plain value threaded through
//! consuming setters, so building never touches a previous result.

use super::article::Article;
use super::author::Author;
use super::content::Content;
use super::media::ArticleMedia;
use super::taxonomy::Taxonomy;
use crate::analytics::{measure_body, reading_time, table_of_contents};
use crate::constants::{DEFAULT_LOCALE, INITIAL_VERSION, LEGACY_DATE_FORMAT};
use crate::types::{ArticleId, Slug, ValidatedUrl};
use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

// --- Metadata ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Display and organisation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub excerpt: String,
    /// SEO meta description
    pub description: String,
    pub reading_time_minutes: u32,
    pub word_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc: Option<TableOfContents>,
}

impl Metadata {
    pub fn simple(excerpt: impl Into<String>, reading_time_minutes: u32) -> Self {
        let excerpt = excerpt.into();
        Self {
            description: excerpt.clone(),
            excerpt,
            reading_time_minutes,
            word_count: 0,
            difficulty: None,
            keywords: Vec::new(),
            toc: None,
        }
    }

    /// Metadata computed from the body: word count, reading time and outline.
    pub fn derive(excerpt: impl Into<String>, body: &[Content]) -> Self {
        let stats = measure_body(body);
        let toc = table_of_contents(body);
        Self {
            word_count: stats.word_count,
            toc: (!toc.is_empty()).then_some(toc),
            ..Self::simple(excerpt, reading_time(stats.word_count))
        }
    }
}

/// Outline of an article, nested by heading level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    pub entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    pub text: String,
    pub anchor_id: String,
    pub level: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

// --- Timestamps ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_date: NaiveDate,
    /// Date shown to readers
    pub display_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_major_update: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_publish_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        Self {
            created_at: now,
            updated_at: now,
            published_date: today,
            display_date: today,
            last_major_update: None,
            scheduled_publish_at: None,
        }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Timestamps for content first published on `date`.
    pub fn published_on(date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            published_date: date,
            display_date: date,
            ..Self::at(now)
        }
    }
}

// --- Publishing ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    Draft,
    Review,
    Scheduled,
    Published,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
    MembersOnly,
}

/// Status and visibility. Carried, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishingInfo {
    pub status: PublishStatus,
    pub visibility: Visibility,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
    /// Accepted on input, never written out.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl PublishingInfo {
    fn with(status: PublishStatus, visibility: Visibility, featured: bool) -> Self {
        Self {
            status,
            visibility,
            featured,
            pinned: false,
            expires_at: None,
            password: None,
        }
    }

    pub fn draft() -> Self {
        Self::with(PublishStatus::Draft, Visibility::Private, false)
    }

    pub fn published() -> Self {
        Self::with(PublishStatus::Published, Visibility::Public, false)
    }

    pub fn featured_post() -> Self {
        Self::with(PublishStatus::Published, Visibility::Public, true)
    }
}

impl Default for PublishingInfo {
    fn default() -> Self {
        Self::draft()
    }
}

// --- Links ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Suggested,
    NextInSeries,
    PrevInSeries,
    SeeAlso,
    Prerequisite,
    FollowUp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArticle {
    pub article_id: ArticleId,
    pub kind: RelationKind,
    /// Overrides the linked article's title when displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Paper,
    CodeRepo,
    Demo,
    Documentation,
    Dataset,
    Video,
    Podcast,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    pub url: ValidatedUrl,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: LinkKind,
}

impl ExternalLink {
    pub fn new(
        url: &str,
        title: impl Into<String>,
        kind: LinkKind,
    ) -> Result<Self, crate::types::ValidationError> {
        Ok(Self {
            url: ValidatedUrl::parse(url)?,
            title: title.into(),
            description: None,
            kind,
        })
    }
}

// --- Engagement ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementData {
    pub views: u64,
    pub unique_visitors: u64,
    pub shares: u32,
    pub bookmarks: u32,
    /// Seconds
    pub avg_read_time: f64,
    /// Average scroll depth in 0..=1
    pub scroll_depth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_viewed: Option<DateTime<Utc>>,
}

impl EngagementData {
    pub fn empty() -> Self {
        Self::default()
    }
}

// --- Aggregate ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleV2 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ArticleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<Slug>,
    version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(default)]
    body: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Taxonomy>,
    #[serde(default)]
    tags: Vec<Taxonomy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    series: Option<Taxonomy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    series_order: Option<u32>,

    #[serde(default)]
    authors: Vec<Author>,
    #[serde(default)]
    contributors: Vec<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    hero_image: Option<ArticleMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    og_image: Option<ArticleMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    twitter_image: Option<ArticleMedia>,
    #[serde(default)]
    gallery: Vec<ArticleMedia>,

    timestamps: Timestamps,
    #[serde(default)]
    publishing: PublishingInfo,

    #[serde(default)]
    related_articles: Vec<RelatedArticle>,
    #[serde(default)]
    external_links: Vec<ExternalLink>,

    locale: String,
    /// locale -> article id
    #[serde(default)]
    translations: IndexMap<String, ArticleId>,

    #[serde(default)]
    engagement: EngagementData,
}

impl ArticleV2 {
    pub fn draft() -> ArticleDraft {
        ArticleDraft::default()
    }

    /// Map a flat first-generation article into the richer shape.
    pub fn from_legacy(article: &Article) -> Self {
        Self::from_legacy_at(article, Utc::now())
    }

    pub fn from_legacy_at(article: &Article, now: DateTime<Utc>) -> Self {
        let mut metadata = Metadata::derive(article.excerpt.clone(), article.sections());
        if article.reading_time_minutes > 0 {
            metadata.reading_time_minutes = article.reading_time_minutes;
        }

        let timestamps = match parse_display_date(&article.date) {
            Some(date) => Timestamps::published_on(date, now),
            None => {
                debug!(
                    "Article '{}' has unparseable date '{}', using build date",
                    article.id, article.date
                );
                Timestamps::at(now)
            }
        };

        let mut draft = Self::draft()
            .id(article.id.clone())
            .slug(article.id.as_str())
            .title(article.title.clone())
            .body(article.sections.clone())
            .metadata(metadata)
            .category(Taxonomy::category(article.category.clone()))
            .tags(article.tags.iter().map(Taxonomy::tag).collect())
            .publishing(PublishingInfo::published())
            .timestamps(timestamps);

        if !article.subtitle.is_empty() {
            draft = draft.subtitle(article.subtitle.clone());
        }
        if !article.author.is_empty() {
            draft = draft.author(Author::simple(
                article.author.clone(),
                article.author_role.clone(),
            ));
        }
        if let Some(src) = &article.hero_image {
            let alt = article.hero_image_alt.clone().unwrap_or_default();
            draft = draft.hero_image(ArticleMedia::simple_image(src.clone(), alt));
        }

        draft.build_at(now)
    }

    pub fn id(&self) -> Option<&ArticleId> {
        self.id.as_ref()
    }

    pub fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn body(&self) -> &[Content] {
        &self.body
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn category(&self) -> Option<&Taxonomy> {
        self.category.as_ref()
    }

    pub fn tags(&self) -> &[Taxonomy] {
        &self.tags
    }

    pub fn series(&self) -> Option<(&Taxonomy, Option<u32>)> {
        self.series.as_ref().map(|s| (s, self.series_order))
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn contributors(&self) -> &[Author] {
        &self.contributors
    }

    pub fn primary_author(&self) -> Option<&Author> {
        self.authors.first()
    }

    pub fn hero_image(&self) -> Option<&ArticleMedia> {
        self.hero_image.as_ref()
    }

    pub fn og_image(&self) -> Option<&ArticleMedia> {
        self.og_image.as_ref()
    }

    pub fn twitter_image(&self) -> Option<&ArticleMedia> {
        self.twitter_image.as_ref()
    }

    pub fn gallery(&self) -> &[ArticleMedia] {
        &self.gallery
    }

    pub fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    pub fn publishing(&self) -> &PublishingInfo {
        &self.publishing
    }

    pub fn related_articles(&self) -> &[RelatedArticle] {
        &self.related_articles
    }

    pub fn external_links(&self) -> &[ExternalLink] {
        &self.external_links
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn translations(&self) -> &IndexMap<String, ArticleId> {
        &self.translations
    }

    pub fn engagement(&self) -> &EngagementData {
        &self.engagement
    }

    pub fn is_published(&self) -> bool {
        self.publishing.status == PublishStatus::Published
    }

    pub fn is_featured(&self) -> bool {
        self.publishing.featured
    }
}

/// Parses editor-written dates such as "February 5, 2026".
fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), LEGACY_DATE_FORMAT).ok()
}

/// Partially filled article. Every setter consumes and returns the draft.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    id: Option<ArticleId>,
    slug: Option<Slug>,
    version: Option<u32>,
    title: Option<String>,
    subtitle: Option<String>,
    body: Vec<Content>,
    metadata: Option<Metadata>,
    category: Option<Taxonomy>,
    tags: Vec<Taxonomy>,
    series: Option<(Taxonomy, u32)>,
    authors: Vec<Author>,
    contributors: Vec<Author>,
    hero_image: Option<ArticleMedia>,
    og_image: Option<ArticleMedia>,
    twitter_image: Option<ArticleMedia>,
    gallery: Vec<ArticleMedia>,
    timestamps: Option<Timestamps>,
    publishing: Option<PublishingInfo>,
    related_articles: Vec<RelatedArticle>,
    external_links: Vec<ExternalLink>,
    locale: Option<String>,
    translations: IndexMap<String, ArticleId>,
    engagement: Option<EngagementData>,
}

impl ArticleDraft {
    pub fn id(mut self, id: ArticleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the slug exactly as given.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(Slug::new(slug));
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn body(mut self, body: Vec<Content>) -> Self {
        self.body = body;
        self
    }

    pub fn block(mut self, block: impl Into<Content>) -> Self {
        self.body.push(block.into());
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn category(mut self, category: Taxonomy) -> Self {
        self.category = Some(category);
        self
    }

    pub fn tags(mut self, tags: Vec<Taxonomy>) -> Self {
        self.tags = tags;
        self
    }

    pub fn series(mut self, series: Taxonomy, order: u32) -> Self {
        self.series = Some((series, order));
        self
    }

    pub fn authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }

    /// Replaces the author list with a single author.
    pub fn author(mut self, author: Author) -> Self {
        self.authors = vec![author];
        self
    }

    pub fn contributors(mut self, contributors: Vec<Author>) -> Self {
        self.contributors = contributors;
        self
    }

    pub fn hero_image(mut self, media: ArticleMedia) -> Self {
        self.hero_image = Some(media);
        self
    }

    pub fn og_image(mut self, media: ArticleMedia) -> Self {
        self.og_image = Some(media);
        self
    }

    pub fn twitter_image(mut self, media: ArticleMedia) -> Self {
        self.twitter_image = Some(media);
        self
    }

    pub fn gallery(mut self, gallery: Vec<ArticleMedia>) -> Self {
        self.gallery = gallery;
        self
    }

    pub fn timestamps(mut self, timestamps: Timestamps) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    pub fn publishing(mut self, publishing: PublishingInfo) -> Self {
        self.publishing = Some(publishing);
        self
    }

    pub fn related_articles(mut self, related: Vec<RelatedArticle>) -> Self {
        self.related_articles = related;
        self
    }

    pub fn external_links(mut self, links: Vec<ExternalLink>) -> Self {
        self.external_links = links;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn translation(mut self, locale: impl Into<String>, article_id: ArticleId) -> Self {
        self.translations.insert(locale.into(), article_id);
        self
    }

    pub fn engagement(mut self, engagement: EngagementData) -> Self {
        self.engagement = Some(engagement);
        self
    }

    pub fn build(self) -> ArticleV2 {
        self.build_at(Utc::now())
    }

    /// Applies the defaulting rules, taking `now` as the construction time.
    ///
    /// An unset slug becomes the slugified title, even when that is empty.
    /// An unset id becomes the slug, value for value. Both stay absent when
    /// neither a slug nor a title was set.
    pub fn build_at(self, now: DateTime<Utc>) -> ArticleV2 {
        let slug = self
            .slug
            .or_else(|| self.title.as_deref().map(Slug::from_text));
        let id = self.id.or_else(|| {
            slug.as_ref()
                .map(|slug| ArticleId::from_normalized(slug.as_str().to_string()))
        });

        let (series, series_order) = match self.series {
            Some((series, order)) => (Some(series), Some(order)),
            None => (None, None),
        };

        ArticleV2 {
            id,
            slug,
            version: self.version.unwrap_or(INITIAL_VERSION),
            title: self.title,
            subtitle: self.subtitle,
            body: self.body,
            metadata: self.metadata,
            category: self.category,
            tags: self.tags,
            series,
            series_order,
            authors: self.authors,
            contributors: self.contributors,
            hero_image: self.hero_image,
            og_image: self.og_image,
            twitter_image: self.twitter_image,
            gallery: self.gallery,
            timestamps: self.timestamps.unwrap_or_else(|| Timestamps::at(now)),
            publishing: self.publishing.unwrap_or_default(),
            related_articles: self.related_articles,
            external_links: self.external_links,
            locale: self
                .locale
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            translations: self.translations,
            engagement: self.engagement.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blocks::{Heading, RichText};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_title_only_derives_slug_and_id() {
        let article = ArticleV2::draft().title("Hello World").build_at(fixed_now());
        assert_eq!(article.slug().map(Slug::as_str), Some("hello-world"));
        assert_eq!(article.id().map(ArticleId::as_str), Some("hello-world"));
    }

    #[test]
    fn test_nothing_set_leaves_identity_absent() {
        let article = ArticleV2::draft().build_at(fixed_now());
        assert!(article.id().is_none());
        assert!(article.slug().is_none());
        assert!(article.title().is_none());
    }

    #[test]
    fn test_slug_wins_over_title_for_id() {
        let article = ArticleV2::draft()
            .title("Hello World")
            .slug("greeting")
            .build_at(fixed_now());
        assert_eq!(article.id().map(ArticleId::as_str), Some("greeting"));
        assert_eq!(article.slug().map(Slug::as_str), Some("greeting"));
    }

    #[test]
    fn test_explicit_id_is_kept() {
        let id = ArticleId::parse("a-123").unwrap();
        let article = ArticleV2::draft()
            .id(id.clone())
            .title("Hello World")
            .build_at(fixed_now());
        assert_eq!(article.id(), Some(&id));
        assert_eq!(article.slug().map(Slug::as_str), Some("hello-world"));
    }

    #[test]
    fn test_explicit_slug_is_kept_verbatim() {
        let article = ArticleV2::draft().slug("My Post").build_at(fixed_now());
        assert_eq!(article.slug().map(Slug::as_str), Some("My Post"));
        assert_eq!(article.id().map(ArticleId::as_str), Some("My Post"));
    }

    #[test]
    fn test_explicit_slug_is_never_replaced_by_title() {
        let article = ArticleV2::draft()
            .slug("!!!")
            .title("Hello World")
            .build_at(fixed_now());
        assert_eq!(article.slug().map(Slug::as_str), Some("!!!"));
        assert_eq!(article.id().map(ArticleId::as_str), Some("!!!"));

        let empty = ArticleV2::draft()
            .slug("")
            .title("Hello World")
            .build_at(fixed_now());
        assert_eq!(empty.slug().map(Slug::as_str), Some(""));
        assert_eq!(empty.id().map(ArticleId::as_str), Some(""));
    }

    #[test]
    fn test_title_slugifying_to_empty_still_sets_slug() {
        let article = ArticleV2::draft().title("!!!").build_at(fixed_now());
        assert_eq!(article.slug().map(Slug::as_str), Some(""));
        assert_eq!(article.id().map(ArticleId::as_str), Some(""));
    }

    #[test]
    fn test_defaults() {
        let now = fixed_now();
        let article = ArticleV2::draft().title("x").build_at(now);
        assert_eq!(article.version(), 1);
        assert_eq!(article.locale(), "en");
        assert_eq!(article.publishing(), &PublishingInfo::draft());
        assert_eq!(article.publishing().visibility, Visibility::Private);
        assert!(!article.is_published());
        assert_eq!(article.timestamps().created_at, now);
        assert_eq!(article.timestamps().updated_at, now);
        assert_eq!(
            article.timestamps().published_date,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert_eq!(article.engagement(), &EngagementData::empty());
        assert!(article.primary_author().is_none());
    }

    #[test]
    fn test_builds_are_independent() {
        let draft = ArticleV2::draft().title("Shared");
        let first = draft.clone().block(RichText::plain("one")).build_at(fixed_now());
        let second = draft.build_at(fixed_now());
        assert_eq!(first.body().len(), 1);
        assert!(second.body().is_empty());
    }

    #[test]
    fn test_password_is_never_serialized() {
        let mut publishing = PublishingInfo::featured_post();
        publishing.password = Some("hunter2".to_string());
        let article = ArticleV2::draft()
            .title("Secret")
            .publishing(publishing)
            .build_at(fixed_now());

        let json = serde_json::to_string(&article).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("password"));
        assert!(article.is_featured());
    }

    #[test]
    fn test_metadata_derive() {
        let body = vec![
            Content::Heading(Heading::h2("Intro")),
            Content::RichText(RichText::plain("one two three four")),
        ];
        let metadata = Metadata::derive("Short", &body);
        assert_eq!(metadata.word_count, 5);
        assert_eq!(metadata.reading_time_minutes, 1);
        assert_eq!(metadata.description, "Short");
        assert_eq!(metadata.toc.map(|t| t.entries.len()), Some(1));
    }

    #[test]
    fn test_display_date_parsing() {
        assert_eq!(
            parse_display_date("February 5, 2026"),
            NaiveDate::from_ymd_opt(2026, 2, 5)
        );
        assert_eq!(
            parse_display_date("December 19, 2024"),
            NaiveDate::from_ymd_opt(2024, 12, 19)
        );
        assert!(parse_display_date("sometime soon").is_none());
    }

    #[test]
    fn test_series_carries_order() {
        let article = ArticleV2::draft()
            .title("Part 2")
            .series(Taxonomy::series("Agents", "Building agents"), 2)
            .build_at(fixed_now());
        let (series, order) = article.series().unwrap();
        assert_eq!(series.name, "Agents");
        assert_eq!(order, Some(2));
    }
}
