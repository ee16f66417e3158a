use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    Article, ArticleContent, ArticleEntry, ArticleSummary, ContentEntry, ContentRow, ListQuery,
    Result, StoreError,
    article::{ARTICLES_TABLE, CONTENT_TABLE},
    store::ArticleStore,
};

#[derive(Default)]
struct Tables {
    // Articles tagged with their write sequence, which orders listings.
    articles: HashMap<String, (u64, Article)>,
    contents: HashMap<String, ArticleContent>,
    writes: u64,
}

/// In-memory article store implementation for testing.
///
/// This implementation keeps both tables in memory and provides
/// the same interface as the PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryArticleStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryArticleStore {
    /// Creates a new empty in-memory article store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored articles.
    pub async fn article_count(&self) -> usize {
        self.tables.read().await.articles.len()
    }

    /// Returns the full stored article for a URL, including its timestamp.
    pub async fn get_article(&self, url: &str) -> Option<Article> {
        self.tables
            .read()
            .await
            .articles
            .get(url)
            .map(|(_, article)| article.clone())
    }

    /// Clears both tables.
    pub async fn clear(&self) {
        let mut tables = self.tables.write().await;
        tables.articles.clear();
        tables.contents.clear();
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn save_article(&self, entry: ArticleEntry) -> Result<()> {
        let url = entry.url.ok_or(StoreError::ConstraintViolation {
            table: ARTICLES_TABLE,
            column: "url",
        })?;

        let mut tables = self.tables.write().await;
        tables.writes += 1;
        let seq = tables.writes;
        let article = Article {
            title: entry.title,
            url: url.clone(),
            match_keyword: entry.match_keyword,
            updated_at: Utc::now(),
        };
        tables.articles.insert(url, (seq, article));

        Ok(())
    }

    async fn save_content(&self, entry: ContentEntry) -> Result<()> {
        let url = entry.url.ok_or(StoreError::ConstraintViolation {
            table: CONTENT_TABLE,
            column: "url",
        })?;

        let mut tables = self.tables.write().await;
        let content = ArticleContent {
            url: url.clone(),
            content: entry.content,
            updated_at: Utc::now(),
        };
        tables.contents.insert(url, content);

        Ok(())
    }

    async fn list_articles(&self, query: ListQuery) -> Result<Vec<ArticleSummary>> {
        let tables = self.tables.read().await;
        let mut articles: Vec<_> = tables
            .articles
            .values()
            .filter(|(_, article)| match query.match_keyword {
                Some(ref keyword) => article.match_keyword.as_ref() == Some(keyword),
                None => true,
            })
            .collect();

        // Latest write first; the sequence does not depend on the wall clock.
        articles.sort_by(|(seq_a, _), (seq_b, _)| seq_b.cmp(seq_a));

        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);

        Ok(articles
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(_, article)| ArticleSummary::from(article))
            .collect())
    }

    async fn get_content(&self, url: &str) -> Result<Option<ContentRow>> {
        let tables = self.tables.read().await;
        Ok(tables.contents.get(url).map(|row| ContentRow {
            content: row.content.clone(),
        }))
    }
}
