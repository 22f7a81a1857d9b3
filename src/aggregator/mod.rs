//! Aggregation of event records into summary views.
//!
//! This module transforms normalized events into:
//! - Headline metrics (count, volume, verified share, average)
//! - Category distribution and volume rankings
//! - Date-bucketed timelines and the upcoming window
//! - The top events by trading volume

pub mod distribution;
pub mod filter;
pub mod metrics;
pub mod report;

// Re-export main functions
pub use distribution::{
    category_distribution, chronological, timeline, top_by_volume, upcoming_window,
    verified_indicator, volume_by_category,
};
pub use filter::filter_by_categories;
pub use metrics::{calculate_summary, calculate_verification_split};
pub use report::build_report;
