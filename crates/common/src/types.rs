use serde::Serialize;

/// Number of articles returned per listing page.
pub const PER_PAGE: u32 = 20;

/// A 1-based page number for article listings.
///
/// Page numbers arrive as raw query-string values and are read as decimal
/// numbers; anything below 1 or not a finite number resolves to the first
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Page(u32);

impl Page {
    /// The first page.
    pub const fn first() -> Self {
        Self(1)
    }

    /// Creates a page, clamping zero to the first page.
    pub fn new(number: u32) -> Self {
        Self(number.max(1))
    }

    /// Parses a raw `page` parameter.
    ///
    /// Any decimal or exponent notation is accepted and truncated, so `2.5`
    /// and `1e1` reach pages 2 and 10. Absent, empty, non-numeric, non-finite,
    /// zero and negative values yield the first page. Numbers past `u32::MAX`
    /// saturate.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|n| n.is_finite() && *n >= 1.0)
            .map(|n| Self(n.trunc() as u32))
            .unwrap_or_default()
    }

    /// Returns the page number.
    pub fn number(&self) -> u32 {
        self.0
    }

    /// Number of rows to skip to reach this page.
    pub fn offset(&self, per_page: u32) -> u64 {
        u64::from(self.0 - 1).saturating_mul(u64::from(per_page))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Page {
    fn from(number: u32) -> Self {
        Self::new(number)
    }
}
