//! Record listing arguments

use chrono::{DateTime, Utc};
use clap::Args;

use crate::client::PageQuery;
use crate::error::{ConfigError, Result};

/// Page size used when `--size` is not given
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Window and page arguments shared by `invited` and `recharged`.
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Window start, milliseconds since epoch
    #[arg(long)]
    pub start: Option<i64>,

    /// Window end, milliseconds since epoch
    #[arg(long)]
    pub end: Option<i64>,

    /// Page number (0-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<u32>,

    /// Records per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub size: u32,
}

impl RecordArgs {
    /// Convert CLI args to a page query
    pub fn to_query(&self) -> Result<PageQuery> {
        let mut query = PageQuery::new().page_size(self.size);

        if let Some(start) = self.start {
            query = query.window_start(millis_to_time("--start", start)?);
        }
        if let Some(end) = self.end {
            query = query.window_end(millis_to_time("--end", end)?);
        }
        if let Some(page) = self.page {
            query = query.page(page);
        }
        Ok(query)
    }
}

fn millis_to_time(flag: &str, millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ConfigError::Invalid(format!("{} {} is out of range", flag, millis)).into())
}
