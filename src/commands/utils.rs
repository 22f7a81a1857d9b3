use crate::classifier::{classify, score_categories, ALL_CATEGORIES};
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Today: {}", report.today);
    match report.summary.data() {
        Some(summary) => {
            println!("  Events: {}", summary.total_events);
            println!("  Total Volume: {:.2}", summary.total_volume);
        }
        None => println!("  Events: none (no data)"),
    }

    Ok(())
}

/// Print the category for a title/description, optionally with scores
pub fn display_classification(title: &str, description: &str, show_scores: bool) {
    let category = classify(title, description);
    println!("{}", category);

    if show_scores {
        for entry in score_categories(title, description) {
            println!("  {:<23} {}", entry.category.label(), entry.score);
        }
    }
}

/// Print the taxonomy
pub fn display_categories(show_examples: bool) {
    println!("Event Categories");
    println!();

    for category in ALL_CATEGORIES {
        let keywords = if category.is_scored() {
            format!("{} keywords", category.keywords().len())
        } else {
            "not scored".to_string()
        };
        println!("  {:<23} {}  ({})", category.label(), category.color(), keywords);

        if show_examples {
            for example in category.examples() {
                println!("      - {}", example);
            }
        }
    }
}

/// Display version information
pub fn display_version() {
    println!("Event Lens v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Keyword categorization and summary analytics for event records.");
}
