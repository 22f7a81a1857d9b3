//! Canonical event shape and the report schema.
//!
//! `Report` is what we write to disk; it is versioned so consumers can
//! check compatibility.

use crate::classifier::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// **Private** - shared by the builder and deserialization
fn clamp_volume(volume: f64) -> f64 {
    if volume.is_finite() && volume > 0.0 {
        volume
    } else {
        0.0
    }
}

/// **Private** - reports read back from disk get the same clamp as `with_volume`
fn deserialize_volume<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_volume)
}

/// A normalized event record
///
/// Engine code only reads events; nothing mutates them after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub category: Category,

    pub date: NaiveDate,

    /// Market interest in the event, never negative
    #[serde(default, deserialize_with = "deserialize_volume")]
    pub trading_volume: f64,

    #[serde(default)]
    pub verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Event {
    /// Create an event with zero volume and no optional fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category,
            date,
            trading_volume: 0.0,
            verified: false,
            url: None,
            source_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Negative or non-finite volumes are stored as 0
    pub fn with_volume(mut self, trading_volume: f64) -> Self {
        self.trading_volume = clamp_volume(trading_volume);
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }
}

/// A single derived view; `NoData` when the filtered event set is empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum View<T> {
    NoData,
    Ready(T),
}

impl<T> View<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            Self::NoData => None,
        }
    }
}

/// Headline numbers over the filtered events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_events: usize,
    pub total_volume: f64,

    /// 0-100; 0 when there are no events
    pub verified_percentage: f64,

    /// 0 when there are no events
    pub average_volume: f64,
}

/// Count of events per category, only for categories present
pub type CategoryDistribution = BTreeMap<Category, usize>;

/// Summed volume for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryVolume {
    pub category: Category,
    pub volume: f64,
}

/// Events on one date in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub category: Category,
    pub count: usize,
}

/// Events on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// A row in the top-by-volume table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEvent {
    /// 1-based position
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub category: Category,
    pub trading_volume: f64,

    /// e.g. "Jan 05, 2024"
    pub display_date: String,

    /// e.g. "$12,500"
    pub display_volume: String,

    /// "✓" or "✗"
    pub verified_indicator: String,
}

/// Verified vs unverified counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSplit {
    pub verified: usize,
    pub unverified: usize,
}

pub const VERIFIED_LABEL: &str = "Verified";
pub const UNVERIFIED_LABEL: &str = "Unverified";

impl VerificationSplit {
    /// Labeled counts, verified first
    pub fn entries(&self) -> [(&'static str, usize); 2] {
        [
            (VERIFIED_LABEL, self.verified),
            (UNVERIFIED_LABEL, self.unverified),
        ]
    }

    pub fn total(&self) -> usize {
        self.verified + self.unverified
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Reference date for the upcoming window
    pub today: NaiveDate,

    pub window_days: u32,

    /// Category filter applied before every view (None = all)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_categories: Option<Vec<Category>>,

    pub summary: View<SummaryMetrics>,
    pub category_distribution: View<CategoryDistribution>,
    pub volume_by_category: View<Vec<CategoryVolume>>,
    pub timeline: View<Vec<TimelinePoint>>,
    pub top_events: View<Vec<TopEvent>>,
    pub verification: View<VerificationSplit>,
    pub upcoming: View<Vec<DateCount>>,
    pub events_by_date: View<Vec<Event>>,
}

impl Report {
    /// True when the filtered event set was empty
    pub fn is_empty(&self) -> bool {
        self.summary.is_no_data()
    }
}
