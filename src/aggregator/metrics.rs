//! Headline metrics over a set of events.
//!
//! Every function here is total: an empty slice yields zeros, never NaN.

use crate::parser::schema::{Event, SummaryMetrics, VerificationSplit};
use log::debug;

/// Calculate count, volume, verified percentage and average volume
///
/// **Public** - main entry point for summary metrics
pub fn calculate_summary(events: &[Event]) -> SummaryMetrics {
    let total_events = events.len();
    if total_events == 0 {
        return SummaryMetrics::default();
    }

    let total_volume: f64 = events.iter().map(|e| e.trading_volume).sum();
    let verified = events.iter().filter(|e| e.verified).count();

    let summary = SummaryMetrics {
        total_events,
        total_volume,
        verified_percentage: (verified as f64 / total_events as f64) * 100.0,
        average_volume: total_volume / total_events as f64,
    };

    debug!("Summary: {}", summary.summary());

    summary
}

/// Count verified vs unverified events
///
/// **Public** - feeds the verification pie
pub fn calculate_verification_split(events: &[Event]) -> VerificationSplit {
    let verified = events.iter().filter(|e| e.verified).count();

    VerificationSplit {
        verified,
        unverified: events.len() - verified,
    }
}

impl SummaryMetrics {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Events: {} | Volume: {:.2} | Verified: {:.1}% | Average: {:.2}",
            self.total_events, self.total_volume, self.verified_percentage, self.average_volume
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Category;
    use chrono::NaiveDate;

    fn event(id: &str, volume: f64, verified: bool) -> Event {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Event::new(id, id, Category::Sports, date)
            .with_volume(volume)
            .with_verified(verified)
    }

    #[test]
    fn test_calculate_summary() {
        let events = vec![event("a", 100.0, true), event("b", 300.0, false)];
        let summary = calculate_summary(&events);

        assert_eq!(summary.total_events, 2);
        assert_eq!(summary.total_volume, 400.0);
        assert_eq!(summary.average_volume, 200.0);
        assert_eq!(summary.verified_percentage, 50.0);
    }

    #[test]
    fn test_summary_empty() {
        let summary = calculate_summary(&[]);
        assert_eq!(summary, SummaryMetrics::default());
        assert_eq!(summary.verified_percentage, 0.0);
        assert_eq!(summary.average_volume, 0.0);
    }

    #[test]
    fn test_verification_split() {
        let events = vec![
            event("a", 0.0, true),
            event("b", 0.0, false),
            event("c", 0.0, true),
        ];
        let split = calculate_verification_split(&events);
        assert_eq!(split.verified, 2);
        assert_eq!(split.unverified, 1);
    }

    #[test]
    fn test_verification_split_empty() {
        let split = calculate_verification_split(&[]);
        assert_eq!(split.total(), 0);
    }
}
