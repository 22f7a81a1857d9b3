use chrono::NaiveDate;
use event_lens::classifier::Category;
use event_lens::commands::{execute_summarize, validate_args, SummarizeArgs};
use event_lens::output::read_report;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_events(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_validate_args_valid() {
    let args = SummarizeArgs {
        categories: vec!["Sports".to_string(), "War/Crisis".to_string()],
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_bad_category() {
    let args = SummarizeArgs {
        categories: vec!["Cooking".to_string()],
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_summarize_end_to_end() {
    let input = write_events(
        r#"[
            {"id": "1", "title": "NBA Finals tonight", "date": "2024-01-10", "trading_volume": 100, "verified": true},
            {"id": "2", "title": "Federal Reserve raises interest rates", "date": "2024-02-01", "trading_volume": 300},
            {"id": "3", "title": "", "date": "garbage"}
        ]"#,
    );
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("report.json");

    let args = SummarizeArgs {
        input: input.path().to_path_buf(),
        output_json: output.clone(),
        today: NaiveDate::from_ymd_opt(2024, 1, 1),
        classify_missing: true,
        ..Default::default()
    };

    let report = execute_summarize(args).unwrap();

    let summary = report.summary.data().unwrap();
    assert_eq!(summary.total_events, 3);
    assert_eq!(summary.total_volume, 400.0);

    let distribution = report.category_distribution.data().unwrap();
    assert_eq!(distribution[&Category::Sports], 1);
    assert_eq!(distribution[&Category::EconomyFinance], 1);
    // Empty title classifies to the default category
    assert_eq!(distribution[&Category::PoliticsPolicy], 1);

    // Event 3 fell back to today and lands inside the window with event 1
    let upcoming = report.upcoming.data().unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    let loaded = read_report(&output).unwrap();
    assert_eq!(loaded.summary, report.summary);
}

#[test]
fn test_execute_summarize_filter_no_data() {
    let input = write_events(r#"{"events": [{"title": "Christmas Day", "category": "Holidays", "date": "2024-12-25"}]}"#);
    let out_dir = tempfile::tempdir().unwrap();

    let args = SummarizeArgs {
        input: input.path().to_path_buf(),
        output_json: out_dir.path().join("report.json"),
        categories: vec!["Sports".to_string()],
        today: NaiveDate::from_ymd_opt(2024, 12, 1),
        ..Default::default()
    };

    let report = execute_summarize(args).unwrap();
    assert!(report.is_empty());
    assert!(report.top_events.is_no_data());
}

#[test]
fn test_execute_summarize_missing_input() {
    let out_dir = tempfile::tempdir().unwrap();
    let args = SummarizeArgs {
        input: out_dir.path().join("missing.json"),
        output_json: out_dir.path().join("report.json"),
        ..Default::default()
    };

    assert!(execute_summarize(args).is_err());
}
