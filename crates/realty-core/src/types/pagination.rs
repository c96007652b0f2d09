//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page number.
pub const DEFAULT_PAGE: u64 = 1;
/// Default page size.
pub const DEFAULT_LIMIT: u64 = 10;
/// Maximum page size.
pub const MAX_LIMIT: u64 = 100;

/// Request parameters for paginated queries.
///
/// Always satisfies `page >= 1` and `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PaginationParams {
    /// Create pagination parameters, clamping into the valid range.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Parse raw query values.
    ///
    /// Missing, non-numeric, zero or negative values fall back to the
    /// defaults independently; a limit above [`MAX_LIMIT`] is capped.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .and_then(|l| l.trim().parse::<u64>().ok())
            .filter(|l| *l >= 1)
            .map(|l| l.min(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    /// The storage window (`LIMIT`/`OFFSET`) for this page.
    ///
    /// Any `page` is accepted, so the offset saturates instead of overflowing;
    /// a page past the end simply yields no rows.
    pub fn window(&self) -> QueryWindow {
        QueryWindow {
            limit: self.limit,
            offset: self.page.saturating_sub(1).saturating_mul(self.limit),
        }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A raw `LIMIT`/`OFFSET` window passed to repositories.
///
/// Unlike [`PaginationParams`] no upper bound is enforced on `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWindow {
    /// Maximum number of rows.
    pub limit: u64,
    /// Number of rows skipped.
    pub offset: u64,
}

/// Pagination metadata returned alongside list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of visible items matching the filters.
    pub total: u64,
    /// Total number of pages, `ceil(total / limit)`.
    pub pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Compute metadata for the given page and total.
    pub fn new(params: PaginationParams, total: u64) -> Self {
        let pages = if params.limit == 0 {
            0
        } else {
            total.div_ceil(params.limit)
        };
        Self {
            page: params.page,
            limit: params.limit,
            total,
            pages,
            has_next: params.page < pages,
            has_prev: params.page > 1,
        }
    }
}

/// One page of entities plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Page metadata.
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResult<T> {
    /// Create a new paginated result.
    pub fn new(data: Vec<T>, params: PaginationParams, total: u64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(params, total),
        }
    }
}
