pub mod article;
pub mod article_v2;
pub mod author;
pub mod blocks;
mod content;
pub mod legacy;
pub mod media;
pub mod taxonomy;

pub use article::Article;
pub use article_v2::{
    ArticleDraft, ArticleV2, Difficulty, EngagementData, ExternalLink, LinkKind, Metadata,
    PublishStatus, PublishingInfo, RelatedArticle, RelationKind, TableOfContents, Timestamps,
    TocEntry, Visibility,
};
pub use author::{Author, SocialPlatform};
pub use blocks::*;
pub use content::{Content, ContentKind, ContentVisitor};
pub use media::{ArticleMedia, ArticleMediaBuilder, FocalPoint, MediaAssetKind, MediaVariant};
pub use taxonomy::{Taxonomy, TaxonomyKind};
