//! List window parameters (`?limit=&offset=`)

use serde::Deserialize;

/// Maximum rows returned by a single list call
const MAX_LIMIT: i64 = 1000;

/// Default rows returned when `limit` is omitted
const DEFAULT_LIMIT: i64 = 500;

/// Window into an id-ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    /// Create a window with clamping.
    ///
    /// - Limit is clamped to 0..=1000
    /// - Offset is clamped to a minimum of 0
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(0, MAX_LIMIT),
            offset: offset.max(0),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.limit.unwrap_or(DEFAULT_LIMIT),
            params.offset.unwrap_or(0),
        )
    }
}
