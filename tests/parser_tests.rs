use chrono::NaiveDate;
use event_lens::classifier::Category;
use event_lens::parser::{
    normalize_records, records_from_value, FixedClock, NormalizeOptions,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
}

#[test]
fn test_normalize_mixed_document() {
    let document = json!({
        "events": [
            {
                "id": "wc-final",
                "title": "FIFA World Cup Final",
                "category": "Sports",
                "date": "2024-01-10",
                "trading_volume": 250000,
                "verified": true
            },
            {
                "Title": "Budget vote",
                "Date": "not a date",
                "Category": "Politics",
                "Source URL": "https://example.com/budget"
            },
            {
                "title": "Mystery event",
                "date": "2024-02-01",
                "volume": "-40"
            }
        ]
    });

    let records = records_from_value(document).unwrap();
    let normalized = normalize_records(&records, NormalizeOptions::default(), &clock());

    assert_eq!(normalized.events.len(), 3);
    assert_eq!(normalized.skipped, 0);
    assert_eq!(normalized.date_fallbacks, vec![1]);

    let categories: Vec<Category> = normalized.events.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        vec![Category::Sports, Category::PoliticsPolicy, Category::Uncategorized]
    );

    let budget = &normalized.events[1];
    assert_eq!(budget.id, "event-2");
    assert_eq!(budget.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(budget.source_url.as_deref(), Some("https://example.com/budget"));

    assert_eq!(normalized.events[2].trading_volume, 0.0);
}

#[test]
fn test_uncategorized_is_distinct_from_other() {
    let records = vec![
        json!({"title": "No label at all"}),
        json!({"title": "Unknown label", "category": "Gardening"}),
    ];

    let normalized = normalize_records(&records, NormalizeOptions::default(), &clock());

    assert_eq!(normalized.events[0].category, Category::Uncategorized);
    assert_eq!(normalized.events[1].category, Category::Other);
}

#[test]
fn test_ingestion_time_classification() {
    let records = vec![
        json!({"title": "NBA Finals tonight"}),
        json!({"title": "Labelled", "category": "Crisis & War"}),
    ];
    let options = NormalizeOptions { classify_missing: true };

    let normalized = normalize_records(&records, options, &clock());

    assert_eq!(normalized.events[0].category, Category::Sports);
    // An explicit label always wins over the classifier
    assert_eq!(normalized.events[1].category, Category::CrisisWar);
}

#[test]
fn test_normalization_does_not_touch_input() {
    let records = vec![json!({"title": "  padded  ", "volume": "$1,000"})];
    let before = records.clone();

    let normalized = normalize_records(&records, NormalizeOptions::default(), &clock());

    assert_eq!(records, before);
    assert_eq!(normalized.events[0].title, "padded");
    assert_eq!(normalized.events[0].trading_volume, 1000.0);
}
