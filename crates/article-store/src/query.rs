use common::{PER_PAGE, Page};

/// Builder for article listing queries.
///
/// Listings are always ordered by `updated_at`, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Maximum number of articles to return.
    pub limit: u32,

    /// Number of articles to skip.
    pub offset: u64,

    /// Only list articles whose `match_keyword` equals this value.
    pub match_keyword: Option<String>,
}

impl ListQuery {
    /// Creates a query for the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for a given page.
    pub fn page(page: Page, per_page: u32) -> Self {
        Self {
            limit: per_page,
            offset: page.offset(per_page),
            match_keyword: None,
        }
    }

    /// Sets the maximum number of articles.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the number of articles to skip.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Filters by keyword.
    pub fn match_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.match_keyword = Some(keyword.into());
        self
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::page(Page::first(), PER_PAGE)
    }
}
