use chrono::{FixedOffset, Offset, Utc};
use crate::{Error, Result};

pub const DEFAULT_DATA_LOCATION: &str = "data/news.json";
pub const DEFAULT_DETAIL_PAGE: &str = "berita.html";
pub const DEFAULT_ID_PARAM: &str = "id";
pub const DEFAULT_RELATED_LIMIT: usize = 3;
pub const DEFAULT_PLACEHOLDER_CAPTION: &str = "Bitcoin News";

/// Malaysia Time, UTC+8, no daylight saving.
const MALAYSIA_OFFSET_SECS: i32 = 8 * 3600;

/// Site-wide settings shared by the data source and the presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub data_location: String,
    pub detail_page: String,
    pub id_param: String,
    pub related_limit: usize,
    pub summary_limit: Option<usize>,
    pub placeholder_caption: String,
    utc_offset_secs: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_location: DEFAULT_DATA_LOCATION.to_string(),
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            id_param: DEFAULT_ID_PARAM.to_string(),
            related_limit: DEFAULT_RELATED_LIMIT,
            summary_limit: None,
            placeholder_caption: DEFAULT_PLACEHOLDER_CAPTION.to_string(),
            utc_offset_secs: MALAYSIA_OFFSET_SECS,
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_location(mut self, location: impl Into<String>) -> Self {
        self.data_location = location.into();
        self
    }

    pub fn with_detail_page(mut self, page: impl Into<String>) -> Self {
        self.detail_page = page.into();
        self
    }

    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_limit = limit;
        self
    }

    pub fn with_summary_limit(mut self, limit: Option<usize>) -> Self {
        self.summary_limit = limit;
        self
    }

    pub fn with_placeholder_caption(mut self, caption: impl Into<String>) -> Self {
        self.placeholder_caption = caption.into();
        self
    }

    /// Sets the time zone dates are displayed in, as whole hours east of UTC.
    pub fn with_utc_offset_hours(mut self, hours: i32) -> Result<Self> {
        let secs = hours
            .checked_mul(3600)
            .filter(|secs| FixedOffset::east_opt(*secs).is_some())
            .ok_or_else(|| Error::Config(format!("UTC offset out of range: {}h", hours)))?;
        self.utc_offset_secs = secs;
        Ok(self)
    }

    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(|| Utc.fix())
    }
}
