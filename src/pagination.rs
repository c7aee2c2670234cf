use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

/// Default page number applied when the client omits `page`.
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size applied when the client omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// PageQuery
///
/// The accepted query parameters for every list endpoint (`?page=..&limit=..`).
/// Both parameters are optional; defaults are `page=1, limit=10`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number, starting at 1.
    pub page: Option<i64>,
    /// Items per page.
    pub limit: Option<i64>,
}

/// Error returned when the requested page or limit is below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBoundsError;

impl PageQuery {
    /// Resolves the raw query into a concrete fetch window.
    ///
    /// Rejects `page < 1` or `limit < 1` so invalid input never reaches a
    /// repository query.
    pub fn window(&self) -> Result<PageWindow, PageBoundsError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if page < 1 || limit < 1 {
            return Err(PageBoundsError);
        }
        Ok(PageWindow::new(page, limit))
    }
}

/// PageWindow
///
/// A validated `{page, limit, offset}` triple ready to be bound into a
/// `LIMIT $1 OFFSET $2` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// Computes the row offset for a 1-based page.
    pub fn new(page: i64, limit: i64) -> Self {
        let offset = if page == 1 { 0 } else { page * limit - limit };
        Self {
            page,
            limit,
            offset,
        }
    }

    /// Derives the full pagination metadata once the total row count is known.
    pub fn describe(&self, item_count: i64) -> PageInfo {
        let page_count = if item_count == 0 {
            0
        } else {
            (item_count + self.limit - 1) / self.limit
        };
        let has_prev_page = self.page > 1;
        let has_next_page = self.page < page_count;

        PageInfo {
            page: self.page,
            limit: self.limit,
            item_count,
            page_count,
            has_prev_page,
            has_next_page,
            prev_page: has_prev_page.then(|| self.page - 1),
            next_page: has_next_page.then(|| self.page + 1),
        }
    }
}

/// PageInfo
///
/// The pagination metadata block attached to every list response. Computed
/// per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    pub item_count: i64,
    pub page_count: i64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
}

/// Paginated
///
/// A page of rows together with its metadata, as produced by the repository
/// list queries and serialized into the response envelope's `data` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Paginated<T> {
    /// Maps the rows of a page while keeping the metadata intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
