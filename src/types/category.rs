use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media-buy type of a proposal. Selects the applicable criteria and the
/// weight table that governs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PortalBlog,
    PortalSocial,
    TvBundle,
    YoutubeBundle,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::PortalBlog,
        Category::PortalSocial,
        Category::TvBundle,
        Category::YoutubeBundle,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::PortalBlog => "portal_blog",
            Category::PortalSocial => "portal_social",
            Category::TvBundle => "tv_bundle",
            Category::YoutubeBundle => "youtube_bundle",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::PortalBlog => "Portal/Blog",
            Category::PortalSocial => "Social media + Portal/Blog",
            Category::TvBundle => "Television + Portal/Blog + Social media",
            Category::YoutubeBundle => "YouTube channel + Portal/Blog + Social media",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ScoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| ScoreError::UnknownCategory(value.to_string()))
    }
}
