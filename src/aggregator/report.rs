//! Assemble every view into a single report.

use super::distribution::{
    category_distribution, chronological, timeline, top_by_volume, upcoming_window,
    volume_by_category,
};
use super::filter::filter_by_categories;
use super::metrics::{calculate_summary, calculate_verification_split};
use crate::parser::normalize::Clock;
use crate::parser::schema::{Event, Report, View};
use crate::utils::config::{ReportConfig, SCHEMA_VERSION};
use log::{debug, info};

/// Build the full report for a set of events
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `events` - Normalized events (not modified)
/// * `config` - Filter, top-N and window settings
/// * `clock` - Supplies the `generated_at` stamp, and today unless `config.today` overrides it
///
/// # Returns
/// A report whose views are all `View::NoData` when the category filter
/// leaves no events
pub fn build_report(events: &[Event], config: &ReportConfig, clock: &dyn Clock) -> Report {
    let today = config.today.unwrap_or_else(|| clock.today());
    let filtered = filter_by_categories(events, config.categories.as_deref());

    info!(
        "Building report over {} of {} events (today = {})",
        filtered.len(),
        events.len(),
        today
    );

    let ready = !filtered.is_empty();

    let report = Report {
        version: SCHEMA_VERSION.to_string(),
        generated_at: clock.now().to_rfc3339(),
        today,
        window_days: config.window_days,
        selected_categories: config.categories.clone(),
        summary: make_view(ready, || calculate_summary(&filtered)),
        category_distribution: make_view(ready, || category_distribution(&filtered)),
        volume_by_category: make_view(ready, || volume_by_category(&filtered)),
        timeline: make_view(ready, || timeline(&filtered)),
        top_events: make_view(ready, || top_by_volume(&filtered, config.top_n)),
        verification: make_view(ready, || calculate_verification_split(&filtered)),
        upcoming: make_view(ready, || upcoming_window(&filtered, today, config.window_days)),
        events_by_date: make_view(ready, || chronological(&filtered)),
    };

    if report.is_empty() {
        debug!("No events after filtering, every view reports no data");
    }

    report
}

/// **Private** - only compute a view when there is data to show
fn make_view<T>(ready: bool, build: impl FnOnce() -> T) -> View<T> {
    if ready {
        View::Ready(build())
    } else {
        View::NoData
    }
}
