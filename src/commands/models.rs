use crate::classifier::Category;
use crate::utils::config::{DEFAULT_TOP_N, DEFAULT_WINDOW_DAYS};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// Path to the JSON events document
    pub input: PathBuf,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Category labels to keep (empty = all)
    pub categories: Vec<String>,

    /// Reference date for the upcoming window (None = system date)
    pub today: Option<NaiveDate>,

    /// Upcoming window length in days
    pub window_days: u32,

    /// Number of rows in the top-events table
    pub top_n: usize,

    /// Classify records that have no category
    pub classify_missing: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("events.json"),
            output_json: PathBuf::from("report.json"),
            categories: Vec::new(),
            today: None,
            window_days: DEFAULT_WINDOW_DAYS,
            top_n: DEFAULT_TOP_N,
            classify_missing: false,
            print_summary: false,
        }
    }
}

impl SummarizeArgs {
    /// Parsed category selection; None when no filter was given
    pub fn selected_categories(&self) -> Result<Option<Vec<Category>>, crate::utils::CategoryError> {
        if self.categories.is_empty() {
            return Ok(None);
        }

        self.categories
            .iter()
            .map(|label| label.parse::<Category>())
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
