pub mod article;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod query;
pub mod store;

pub use article::{Article, ArticleContent, ArticleEntry, ArticleSummary, ContentEntry, ContentRow};
pub use common::{PER_PAGE, Page};
pub use error::{Result, StoreError};
pub use memory::InMemoryArticleStore;
pub use postgres::PostgresArticleStore;
pub use query::ListQuery;
pub use store::{ArticleStore, ArticleStoreExt};
