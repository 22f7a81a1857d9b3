//! Terminal summary of a report.

use crate::parser::schema::{Report, View};
use crate::utils::format::{format_currency, format_date};

const NO_DATA: &str = "  (no data)";

/// Render a human-readable summary of every view
///
/// **Public** - used by `summarize --summary`
pub fn render_text_summary(report: &Report) -> String {
    let mut lines = Vec::new();

    lines.push("  📊 SUMMARY".to_string());
    match &report.summary {
        View::Ready(summary) => {
            lines.push(format!("  Events:          {}", summary.total_events));
            lines.push(format!("  Total Volume:    {}", format_currency(summary.total_volume)));
            lines.push(format!("  Average Volume:  {}", format_currency(summary.average_volume)));
            lines.push(format!("  Verified:        {:.1}%", summary.verified_percentage));
        }
        View::NoData => lines.push(NO_DATA.to_string()),
    }

    lines.push(String::new());
    lines.push("  🗂  EVENTS BY CATEGORY".to_string());
    match (&report.category_distribution, &report.volume_by_category) {
        (View::Ready(distribution), View::Ready(volumes)) => {
            lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━┳━━━━━━━━━━━━━━━━┓".to_string());
            lines.push(format!("  ┃ {:<23} ┃ {:>6} ┃ {:>14} ┃", "Category", "Events", "Volume"));
            lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━╋━━━━━━━━━━━━━━━━┫".to_string());
            for entry in volumes {
                let count = distribution.get(&entry.category).copied().unwrap_or(0);
                lines.push(format!(
                    "  ┃ {:<23} ┃ {:>6} ┃ {:>14} ┃",
                    entry.category.label(),
                    count,
                    format_currency(entry.volume)
                ));
            }
            lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━┻━━━━━━━━━━━━━━━━┛".to_string());
        }
        _ => lines.push(NO_DATA.to_string()),
    }

    lines.push(String::new());
    lines.push("  🔥 TOP EVENTS BY VOLUME".to_string());
    match &report.top_events {
        View::Ready(top) => {
            for row in top {
                lines.push(format!(
                    "  {:>3}. {} {:<40} {:>14}  {}",
                    row.rank,
                    row.verified_indicator,
                    truncate(&row.title, 40),
                    row.display_volume,
                    row.display_date
                ));
            }
        }
        View::NoData => lines.push(NO_DATA.to_string()),
    }

    lines.push(String::new());
    lines.push("  ✅ VERIFICATION".to_string());
    match &report.verification {
        View::Ready(split) => {
            for (label, count) in split.entries() {
                lines.push(format!("  {:<12} {}", label, count));
            }
        }
        View::NoData => lines.push(NO_DATA.to_string()),
    }

    lines.push(String::new());
    lines.push(format!(
        "  📅 NEXT {} DAYS (from {})",
        report.window_days,
        format_date(report.today)
    ));
    match &report.upcoming {
        View::Ready(days) if days.is_empty() => lines.push("  No upcoming events".to_string()),
        View::Ready(days) => {
            for day in days {
                lines.push(format!("  {}  {}", format_date(day.date), "■".repeat(day.count)));
            }
        }
        View::NoData => lines.push(NO_DATA.to_string()),
    }

    lines.join("\n")
}

/// **Private** - shorten a title to `max` characters with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
