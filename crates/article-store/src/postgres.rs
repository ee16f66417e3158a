use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    ArticleEntry, ArticleSummary, ContentEntry, ContentRow, ListQuery, Result, StoreError,
    article::{ARTICLES_TABLE, CONTENT_TABLE},
    store::ArticleStore,
};

/// PostgreSQL-backed article store implementation.
///
/// Expects the tables from `schema/articles.sql` to exist.
#[derive(Clone)]
pub struct PostgresArticleStore {
    pool: PgPool,
}

impl PostgresArticleStore {
    /// Creates a new PostgreSQL article store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_summary(row: PgRow) -> Result<ArticleSummary> {
        Ok(ArticleSummary {
            title: row.try_get("title")?,
            url: row.try_get("url")?,
            match_keyword: row.try_get("match_keyword")?,
        })
    }

    // A NULL primary key surfaces as a not-null violation.
    fn map_write_error(e: sqlx::Error, table: &'static str) -> StoreError {
        if let sqlx::Error::Database(ref db_err) = e
            && matches!(db_err.kind(), ErrorKind::NotNullViolation)
        {
            return StoreError::ConstraintViolation {
                table,
                column: "url",
            };
        }
        StoreError::Database(e)
    }
}

#[async_trait]
impl ArticleStore for PostgresArticleStore {
    #[tracing::instrument(skip(self, entry), fields(url = ?entry.url), level = "debug")]
    async fn save_article(&self, entry: ArticleEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO articles (title, url, match_keyword, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (url) DO UPDATE SET
                title = EXCLUDED.title,
                match_keyword = EXCLUDED.match_keyword,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(entry.title)
        .bind(entry.url)
        .bind(entry.match_keyword)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, ARTICLES_TABLE))?;

        Ok(())
    }

    #[tracing::instrument(skip(self, entry), fields(url = ?entry.url), level = "debug")]
    async fn save_content(&self, entry: ContentEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO article_content (url, content, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (url) DO UPDATE SET
                content = EXCLUDED.content,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(entry.url)
        .bind(entry.content)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, CONTENT_TABLE))?;

        Ok(())
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn list_articles(&self, query: ListQuery) -> Result<Vec<ArticleSummary>> {
        let offset = i64::try_from(query.offset).unwrap_or(i64::MAX);

        let rows = sqlx::query(
            r#"
            SELECT title, url, match_keyword
            FROM articles
            WHERE $3::TEXT IS NULL OR match_keyword = $3
            ORDER BY updated_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(query.limit))
        .bind(offset)
        .bind(query.match_keyword)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_summary).collect()
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn get_content(&self, url: &str) -> Result<Option<ContentRow>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT content
            FROM article_content
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(ContentRow {
                content: row.try_get("content")?,
            })),
            None => Ok(None),
        }
    }
}
