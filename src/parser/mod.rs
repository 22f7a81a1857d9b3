//! Record loading, normalization and schema definitions.
//!
//! This module handles:
//! - Reading raw JSON event documents
//! - Normalizing loosely-typed records into `Event`s
//! - Defining the report schema

pub mod loader;
pub mod normalize;
pub mod schema;

// Re-export main types
pub use loader::{read_records, records_from_value};
pub use normalize::{
    normalize_record, normalize_records, parse_date, Clock, FixedClock, NormalizeOptions,
    Normalized, NormalizedRecord, SystemClock,
};
pub use schema::{
    CategoryDistribution, CategoryVolume, DateCount, Event, Report, SummaryMetrics,
    TimelinePoint, TopEvent, VerificationSplit, View,
};
