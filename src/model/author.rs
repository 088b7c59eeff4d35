use crate::types::{AuthorId, Slug};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Twitter,
    Linkedin,
    Github,
    Website,
    Email,
}

/// Author or contributor of an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AuthorId>,
    pub name: String,
    pub slug: Slug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub social_links: IndexMap<SocialPlatform, String>,
}

impl Author {
    pub fn simple(name: impl Into<String>, role: impl Into<String>) -> Self {
        let name = name.into();
        let slug = Slug::from_text(&name);
        let role = role.into();
        Self {
            id: AuthorId::from_slug(&slug),
            name,
            slug,
            role: (!role.is_empty()).then_some(role),
            team: None,
            avatar_url: None,
            bio: None,
            social_links: IndexMap::new(),
        }
    }

    pub fn with_team(
        name: impl Into<String>,
        role: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            team: Some(team.into()),
            ..Self::simple(name, role)
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn with_social_link(mut self, platform: SocialPlatform, url: impl Into<String>) -> Self {
        self.social_links.insert(platform, url.into());
        self
    }
}
