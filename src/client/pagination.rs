//! Pagination and time-window parameters for record listings

use chrono::{DateTime, Utc};

/// Query parameter names of the listing endpoints
pub const PARAM_START: &str = "start";
pub const PARAM_END: &str = "end";
pub const PARAM_PAGE: &str = "pager";
pub const PARAM_PAGE_SIZE: &str = "pagerNum";

/// Page and time-window selection for a listing request.
///
/// Every field is independent and optional. Unset fields are left out of the
/// query entirely; `page(0)` is the first page and is sent as `pager=0`.
///
/// # Example
/// ```ignore
/// let query = PageQuery::new().page(0).page_size(10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Only records at or after this instant
    pub window_start: Option<DateTime<Utc>>,
    /// Only records before this instant
    pub window_end: Option<DateTime<Utc>>,
    /// Zero-based page index
    pub page_index: Option<u32>,
    /// Records per page
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_start(mut self, start: DateTime<Utc>) -> Self {
        self.window_start = Some(start);
        self
    }

    pub fn window_end(mut self, end: DateTime<Utc>) -> Self {
        self.window_end = Some(end);
        self
    }

    pub fn page(mut self, index: u32) -> Self {
        self.page_index = Some(index);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Query pairs for the fields that are set. Window bounds are sent as
    /// epoch milliseconds.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(start) = self.window_start {
            params.push((PARAM_START, start.timestamp_millis().to_string()));
        }
        if let Some(end) = self.window_end {
            params.push((PARAM_END, end.timestamp_millis().to_string()));
        }
        if let Some(page) = self.page_index {
            params.push((PARAM_PAGE, page.to_string()));
        }
        if let Some(size) = self.page_size {
            params.push((PARAM_PAGE_SIZE, size.to_string()));
        }

        params
    }

    pub fn is_empty(&self) -> bool {
        self.window_start.is_none()
            && self.window_end.is_none()
            && self.page_index.is_none()
            && self.page_size.is_none()
    }
}
