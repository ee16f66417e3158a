use async_trait::async_trait;
use common::{PER_PAGE, Page};

use crate::{ArticleEntry, ArticleSummary, ContentEntry, ContentRow, ListQuery, Result};

/// Core trait for article store implementations.
///
/// Every operation is a single round trip. Writes are upserts keyed by URL:
/// the row is replaced wholesale and `updated_at` is set by the store.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Inserts or replaces the article with the entry's URL.
    async fn save_article(&self, entry: ArticleEntry) -> Result<()>;

    /// Inserts or replaces the content with the entry's URL.
    async fn save_content(&self, entry: ContentEntry) -> Result<()>;

    /// Lists articles, most recently updated first.
    async fn list_articles(&self, query: ListQuery) -> Result<Vec<ArticleSummary>>;

    /// Looks up content by exact URL.
    ///
    /// Returns None if no content was saved for the URL.
    async fn get_content(&self, url: &str) -> Result<Option<ContentRow>>;
}

/// Extension trait providing convenience methods for article stores.
#[async_trait]
pub trait ArticleStoreExt: ArticleStore {
    /// Lists one page of articles at the default page size.
    async fn list_page(&self, page: Page) -> Result<Vec<ArticleSummary>> {
        self.list_articles(ListQuery::page(page, PER_PAGE)).await
    }
}

// Blanket implementation for all ArticleStore implementations
impl<T: ArticleStore + ?Sized> ArticleStoreExt for T {}
