use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Table holding article list entries.
pub const ARTICLES_TABLE: &str = "articles";

/// Table holding article bodies.
pub const CONTENT_TABLE: &str = "article_content";

/// A stored article list entry, keyed by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub url: String,
    pub match_keyword: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A stored article body, keyed by URL.
///
/// The URL logically refers to an [`Article`] but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub url: String,
    pub content: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Values written by an article upsert.
///
/// Every field may be absent; the store decides what it accepts. `url` is the
/// primary key, so writing without one is a constraint violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleEntry {
    pub title: Option<String>,
    pub url: Option<String>,
    pub match_keyword: Option<String>,
}

impl ArticleEntry {
    /// Creates an entry with every field present.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        match_keyword: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            match_keyword: Some(match_keyword.into()),
        }
    }
}

/// Values written by a content upsert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentEntry {
    pub url: Option<String>,
    pub content: Option<String>,
}

impl ContentEntry {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            content: Some(content.into()),
        }
    }
}

/// One row of an article listing. `updated_at` is deliberately not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: Option<String>,
    pub url: String,
    pub match_keyword: Option<String>,
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            url: article.url.clone(),
            match_keyword: article.match_keyword.clone(),
        }
    }
}

/// Result of a content point lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRow {
    pub content: Option<String>,
}
