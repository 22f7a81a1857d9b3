//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Reads raw records from a JSON file
//! 2. Normalizes them into events
//! 3. Builds the report
//! 4. Writes output files

use super::models::SummarizeArgs;
use crate::aggregator::build_report;
use crate::output::{render_text_summary, write_report};
use crate::parser::normalize::{Clock, FixedClock, SystemClock};
use crate::parser::schema::Report;
use crate::parser::{normalize_records, read_records, NormalizeOptions};
use crate::utils::config::{ReportConfig, MAX_TOP_N, MAX_WINDOW_DAYS};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file missing or malformed as a whole
/// * Unknown category label in the filter
/// * File write errors
pub fn execute_summarize(args: SummarizeArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Summarizing events from: {}", args.input.display());

    // Step 1: Read records
    info!("Step 1/4: Reading records...");
    let records = read_records(&args.input)
        .with_context(|| format!("Failed to read events from {}", args.input.display()))?;

    // Step 2: Normalize
    info!("Step 2/4: Normalizing {} records...", records.len());
    let clock: Box<dyn Clock> = match args.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    };
    let options = NormalizeOptions {
        classify_missing: args.classify_missing,
    };
    let normalized = normalize_records(&records, options, clock.as_ref());

    if !normalized.date_fallbacks.is_empty() {
        warn!(
            "{} events had missing or unparseable dates and were placed on {}",
            normalized.date_fallbacks.len(),
            clock.today()
        );
    }
    if normalized.skipped > 0 {
        warn!("Skipped {} records that were not JSON objects", normalized.skipped);
    }

    // Step 3: Build report
    info!("Step 3/4: Building report...");
    let config = build_config(&args)?;
    let report = build_report(&normalized.events, &config, clock.as_ref());

    if let Some(summary) = report.summary.data() {
        debug!("{}", summary.summary());
    }

    // Step 4: Write outputs
    info!("Step 4/4: Writing report...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("EVENT SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input:  {}", args.input.display());
        println!("\n{}", render_text_summary(&report));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Summarize completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Map CLI arguments onto a report configuration
///
/// **Private** - internal helper for execute_summarize
fn build_config(args: &SummarizeArgs) -> Result<ReportConfig> {
    let mut config = ReportConfig::new()
        .with_top_n(args.top_n)
        .with_window_days(args.window_days);

    if let Some(today) = args.today {
        config = config.with_today(today);
    }

    if let Some(categories) = args
        .selected_categories()
        .context("Invalid category filter")?
    {
        config = config.with_categories(categories);
    }

    Ok(config)
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    if args.window_days > MAX_WINDOW_DAYS {
        anyhow::bail!("window-days is too large (max {})", MAX_WINDOW_DAYS);
    }

    args.selected_categories()
        .context("Invalid category filter")?;

    Ok(())
}
