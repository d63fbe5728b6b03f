//! Pagination types
//!
//! Defines the request cursor the orchestrator advances and the page the
//! upstream collaborator returns.

use serde_json::Value;

/// Page size used when the caller gives no smaller row limit
pub const DEFAULT_PER_PAGE: u32 = 30;

/// How a collection endpoint returns its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Numbered pages linked through the `Link` header
    #[default]
    Paged,
    /// Whole collection in one response, no page parameters
    Single,
}

/// Parameters for one collection request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Exact-match filters, sent in order
    pub filters: Vec<(String, String)>,
    /// Whether page parameters are sent at all
    pub mode: PaginationMode,
}

impl PageRequest {
    /// First page of a paged listing
    ///
    /// A row limit below the default page size narrows `per_page` so small
    /// queries do not download a full page. A zero limit never reaches a
    /// request, so it keeps the default size here.
    pub fn first(limit: Option<u64>) -> Self {
        let per_page = match limit {
            Some(limit) if limit > 0 && limit < u64::from(DEFAULT_PER_PAGE) => limit as u32,
            _ => DEFAULT_PER_PAGE,
        };

        Self {
            page: 1,
            per_page,
            filters: Vec::new(),
            mode: PaginationMode::Paged,
        }
    }

    /// Request for an unpaged collection
    pub fn single() -> Self {
        Self {
            mode: PaginationMode::Single,
            ..Self::first(None)
        }
    }

    /// Request for the given mode
    pub fn for_mode(mode: PaginationMode, limit: Option<u64>) -> Self {
        match mode {
            PaginationMode::Paged => Self::first(limit),
            PaginationMode::Single => Self::single(),
        }
    }

    /// Add an exact-match filter
    #[must_use]
    pub fn filter(mut self, param: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((param.into(), value.into()));
        self
    }

    /// Move to the next page
    pub fn advance(&mut self) {
        self.page += 1;
    }

    /// Whether page parameters are sent
    pub fn is_paged(&self) -> bool {
        self.mode == PaginationMode::Paged
    }

    /// Query parameters for this request: filters first, then paging
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = self.filters.clone();
        if self.is_paged() {
            params.push(("per_page".to_string(), self.per_page.to_string()));
            params.push(("page".to_string(), self.page.to_string()));
        }
        params
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(None)
    }
}

/// One page of decoded items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Items in upstream order
    pub items: Vec<Value>,
    /// Whether the upstream signalled another page
    pub has_more: bool,
}

impl Page {
    /// A page with no successor
    pub fn last(items: Vec<Value>) -> Self {
        Self {
            items,
            has_more: false,
        }
    }

    /// A page followed by more
    pub fn more(items: Vec<Value>) -> Self {
        Self {
            items,
            has_more: true,
        }
    }
}
