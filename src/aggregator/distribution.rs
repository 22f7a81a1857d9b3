//! Grouped and ranked views over a set of events.
//!
//! Category-keyed results follow taxonomy order, date-keyed results are
//! ascending, and ranking is a stable sort so equal volumes keep input order.

use crate::classifier::Category;
use crate::parser::schema::{
    CategoryDistribution, CategoryVolume, DateCount, Event, TimelinePoint, TopEvent,
};
use crate::utils::format::{format_currency, format_date};
use chrono::{Duration, NaiveDate};
use log::debug;
use std::collections::BTreeMap;

/// Count events per category (absent categories are omitted)
///
/// **Public**
pub fn category_distribution(events: &[Event]) -> CategoryDistribution {
    let mut distribution = CategoryDistribution::new();
    for event in events {
        *distribution.entry(event.category).or_insert(0) += 1;
    }
    distribution
}

/// Sum trading volume per category, sorted by volume (descending)
///
/// **Public** - equal volumes stay in taxonomy order
pub fn volume_by_category(events: &[Event]) -> Vec<CategoryVolume> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
    for event in events {
        *totals.entry(event.category).or_insert(0.0) += event.trading_volume;
    }

    let mut volumes: Vec<CategoryVolume> = totals
        .into_iter()
        .map(|(category, volume)| CategoryVolume { category, volume })
        .collect();

    volumes.sort_by(|a, b| b.volume.total_cmp(&a.volume));
    volumes
}

/// Count events per (date, category), ascending by date
///
/// **Public** - one series per category for time-series charts
pub fn timeline(events: &[Event]) -> Vec<TimelinePoint> {
    let mut buckets: BTreeMap<(NaiveDate, Category), usize> = BTreeMap::new();
    for event in events {
        *buckets.entry((event.date, event.category)).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((date, category), count)| TimelinePoint { date, category, count })
        .collect()
}

/// The `top_n` events by trading volume, descending
///
/// **Public** - main entry point for the top-events table
///
/// # Arguments
/// * `events` - Events to rank
/// * `top_n` - Maximum rows to return (e.g., 10)
///
/// # Returns
/// At most `top_n` rows with display-formatted date, volume and verified flag
pub fn top_by_volume(events: &[Event], top_n: usize) -> Vec<TopEvent> {
    debug!("Ranking top {} of {} events by volume", top_n, events.len());

    let mut ranked: Vec<&Event> = events.iter().collect();
    // Stable sort: equal volumes keep input order
    ranked.sort_by(|a, b| b.trading_volume.total_cmp(&a.trading_volume));

    ranked
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, event)| create_top_event(i + 1, event))
        .collect()
}

/// **Private** - build a display row for the top-events table
fn create_top_event(rank: usize, event: &Event) -> TopEvent {
    TopEvent {
        rank,
        id: event.id.clone(),
        title: event.title.clone(),
        category: event.category,
        trading_volume: event.trading_volume,
        display_date: format_date(event.date),
        display_volume: format_currency(event.trading_volume),
        verified_indicator: verified_indicator(event.verified).to_string(),
    }
}

/// Glyph shown for the verified column
///
/// **Public** - shared with text output
pub fn verified_indicator(verified: bool) -> &'static str {
    if verified {
        "✓"
    } else {
        "✗"
    }
}

/// Count events per date within `[today, today + window_days]`
///
/// **Public** - both ends are inclusive; results ascend by date
pub fn upcoming_window(events: &[Event], today: NaiveDate, window_days: u32) -> Vec<DateCount> {
    let end = today
        .checked_add_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for event in events.iter().filter(|e| e.date >= today && e.date <= end) {
        *buckets.entry(event.date).or_insert(0) += 1;
    }

    debug!(
        "Upcoming window {}..={} holds {} dates",
        today,
        end,
        buckets.len()
    );

    buckets
        .into_iter()
        .map(|(date, count)| DateCount { date, count })
        .collect()
}

/// Events sorted ascending by date; same-day events keep input order
///
/// **Public** - chronological listing for tables
pub fn chronological(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted
}
