//! Configuration and constants for the engine and CLI.

use crate::classifier::Category;
use chrono::NaiveDate;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of events in the top-by-volume table
pub const DEFAULT_TOP_N: usize = 10;

/// Default size of the upcoming window, in days after today
pub const DEFAULT_WINDOW_DAYS: u32 = 14;

pub const MAX_TOP_N: usize = 1000;
pub const MAX_WINDOW_DAYS: u32 = 3650; // ~10 years

// Field names for record normalization (the entry form writes capitalized keys)
pub const ID_FIELD_NAMES: &[&str] = &["id", "identifier", "event_id", "eventId", "ID"];
pub const TITLE_FIELD_NAMES: &[&str] = &["title", "Title", "name"];
pub const DESCRIPTION_FIELD_NAMES: &[&str] = &["description", "Description", "desc"];
pub const CATEGORY_FIELD_NAMES: &[&str] = &["category", "Category"];
pub const DATE_FIELD_NAMES: &[&str] = &["date", "Date", "event_date", "eventDate"];
pub const VOLUME_FIELD_NAMES: &[&str] = &[
    "trading_volume",
    "tradingVolume",
    "volume",
    "Trading Volume",
    "Volume",
];
pub const VERIFIED_FIELD_NAMES: &[&str] = &["verified", "Verified", "is_verified"];
pub const URL_FIELD_NAMES: &[&str] = &["url", "URL", "link"];
pub const SOURCE_URL_FIELD_NAMES: &[&str] = &["source_url", "sourceUrl", "Source URL", "source"];

/// Date formats tried in order for plain dates (datetimes are tried as RFC 3339 first)
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];

/// Terms that route an otherwise unmatched text to Economy & Finance
pub const FINANCE_FALLBACK_TERMS: &[&str] =
    &["price", "market", "trading", "investment", "fund", "stock"];

/// Settings for building a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Number of events in the top-by-volume table
    pub top_n: usize,

    /// Upcoming window length in days (inclusive of both ends)
    pub window_days: u32,

    /// Overrides the clock's notion of today
    pub today: Option<NaiveDate>,

    /// Restrict every view to these categories (None = all)
    pub categories: Option<Vec<Category>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            window_days: DEFAULT_WINDOW_DAYS,
            today: None,
            categories: None,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }
}
