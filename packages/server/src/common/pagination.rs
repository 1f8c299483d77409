//! Page-number pagination for in-memory result lists
//!
//! The engine returns whole result lists; slicing them into pages is a
//! presentation concern handled here.
//!
//! # Usage
//!
//! ```rust,ignore
//! let args = PaginationArgs { page: Some(2), per_page: Some(9) };
//! let validated = args.validate(9)?;
//! let page = Page::from_items(results, &validated);
//! ```

use serde::{Deserialize, Serialize};

/// Upper bound on `per_page`.
pub const MAX_PER_PAGE: usize = 100;

// ============================================================================
// Pagination Arguments
// ============================================================================

/// Raw pagination query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationArgs {
    /// 1-based page number (default 1).
    pub page: Option<usize>,
    /// Items per page (default from config, clamped to 1-100).
    pub per_page: Option<usize>,
}

impl PaginationArgs {
    /// Validate pagination arguments.
    ///
    /// Returns validated args with defaults applied.
    pub fn validate(&self, default_per_page: usize) -> Result<ValidatedPaginationArgs, &'static str> {
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err("page starts at 1");
        }

        let per_page = self
            .per_page
            .unwrap_or(default_per_page)
            .clamp(1, MAX_PER_PAGE);

        Ok(ValidatedPaginationArgs { page, per_page })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPaginationArgs {
    /// 1-based page number.
    pub page: usize,
    /// Number of items per page (1-100).
    pub per_page: usize,
}

impl ValidatedPaginationArgs {
    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of results plus navigation info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    /// Slice a full result list into the requested page.
    ///
    /// Pages past the end are empty but still report the real totals.
    pub fn from_items(items: Vec<T>, args: &ValidatedPaginationArgs) -> Self {
        let total = items.len();
        let total_pages = total.div_ceil(args.per_page);

        let items: Vec<T> = items
            .into_iter()
            .skip(args.offset())
            .take(args.per_page)
            .collect();

        Page {
            items,
            total,
            page: args.page,
            per_page: args.per_page,
            total_pages,
            has_next_page: args.page < total_pages,
        }
    }
}
