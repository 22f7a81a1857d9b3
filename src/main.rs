//! Event Lens CLI
//!
//! Categorizes event records by keyword and summarizes them into
//! counts, volumes and date-bucketed views.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use event_lens::commands::{
    display_categories, display_classification, display_version, execute_summarize,
    validate_args, validate_report_file, SummarizeArgs,
};
use event_lens::parser::parse_date;
use event_lens::utils::config::{DEFAULT_TOP_N, DEFAULT_WINDOW_DAYS};

/// Event Lens - categorize and summarize event records
#[derive(Parser, Debug)]
#[command(name = "event-lens")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a summary report from a JSON events file
    Summarize {
        /// Path to JSON events (array, or object with an "events" array)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Only include these categories (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Reference date for the upcoming window (YYYY-MM-DD)
        #[arg(long, env = "EVENT_LENS_TODAY")]
        today: Option<String>,

        /// Upcoming window length in days
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
        window_days: u32,

        /// Number of events in the top-by-volume table
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Classify records that have no category
        #[arg(long)]
        classify: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Classify a single title/description
    Classify {
        /// Event title
        #[arg(short, long)]
        title: String,

        /// Event description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Show per-category keyword scores
        #[arg(long)]
        scores: bool,
    },

    /// List the category taxonomy
    Categories {
        /// Show example event titles
        #[arg(long)]
        examples: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Summarize {
            input,
            output,
            categories,
            today,
            window_days,
            top,
            classify,
            summary,
        } => {
            let today = today
                .map(|raw| {
                    parse_date(&raw).with_context(|| format!("Invalid --today date: {}", raw))
                })
                .transpose()?;

            let args = SummarizeArgs {
                input,
                output_json: output,
                categories,
                today,
                window_days,
                top_n: top,
                classify_missing: classify,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_summarize(args)?;
        }

        Commands::Classify {
            title,
            description,
            scores,
        } => {
            display_classification(&title, &description, scores);
        }

        Commands::Categories { examples } => {
            display_categories(examples);
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
