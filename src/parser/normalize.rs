//! Normalization of loosely-typed records into canonical events.
//!
//! Records arrive as JSON objects whose fields may be missing, misnamed or
//! of the wrong type. Every field degrades to a default rather than failing:
//! - missing category -> `Uncategorized` (or the classifier, if enabled)
//! - unparseable date -> today, as reported by the injected `Clock`
//! - bad or negative volume -> 0
//! - anything not boolean-like for `verified` -> false

use super::schema::Event;
use crate::classifier::{classify, Category};
use crate::utils::config::{
    CATEGORY_FIELD_NAMES, DATE_FIELD_NAMES, DATE_FORMATS, DESCRIPTION_FIELD_NAMES,
    ID_FIELD_NAMES, SOURCE_URL_FIELD_NAMES, TITLE_FIELD_NAMES, URL_FIELD_NAMES,
    VERIFIED_FIELD_NAMES, VOLUME_FIELD_NAMES,
};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use log::{debug, warn};
use serde_json::{Map, Value};

/// Source of "today" for date fallbacks and the upcoming window
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Timestamp stamped on generated reports
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same date (tests, `--today`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }

    /// Midnight UTC on the fixed date
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.0.and_time(NaiveTime::MIN), Utc)
    }
}

/// Normalization switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Run the keyword classifier for records with no category
    pub classify_missing: bool,
}

/// Result of normalizing a single record
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub event: Event,

    /// The date was missing or unparseable and today was substituted
    pub date_fallback: bool,
}

/// Result of normalizing a batch of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub events: Vec<Event>,

    /// Indexes into `events` whose date fell back to today
    pub date_fallbacks: Vec<usize>,

    /// Records skipped because they were not JSON objects
    pub skipped: usize,
}

/// Normalize a batch of raw records
///
/// **Public** - main entry point for normalization
///
/// Non-object records are skipped with a warning; everything else yields
/// exactly one event, in input order.
pub fn normalize_records(
    records: &[Value],
    options: NormalizeOptions,
    clock: &dyn Clock,
) -> Normalized {
    debug!("Normalizing {} records", records.len());

    let mut normalized = Normalized::default();

    for (index, record) in records.iter().enumerate() {
        let Some(object) = record.as_object() else {
            warn!("Skipping record {}: expected a JSON object", index);
            normalized.skipped += 1;
            continue;
        };

        let result = normalize_record(object, index, options, clock);
        if result.date_fallback {
            normalized.date_fallbacks.push(normalized.events.len());
        }
        normalized.events.push(result.event);
    }

    debug!(
        "Normalized {} events ({} date fallbacks, {} skipped)",
        normalized.events.len(),
        normalized.date_fallbacks.len(),
        normalized.skipped
    );

    normalized
}

/// Normalize one record
///
/// **Public** - `index` is used to derive an id when none is present
pub fn normalize_record(
    record: &Map<String, Value>,
    index: usize,
    options: NormalizeOptions,
    clock: &dyn Clock,
) -> NormalizedRecord {
    let id = string_field(record, ID_FIELD_NAMES).unwrap_or_else(|| format!("event-{}", index + 1));
    let title = string_field(record, TITLE_FIELD_NAMES).unwrap_or_default();
    let description = string_field(record, DESCRIPTION_FIELD_NAMES).unwrap_or_default();

    let category = match string_field(record, CATEGORY_FIELD_NAMES) {
        Some(label) => label.parse::<Category>().unwrap_or_else(|e| {
            warn!("Record {}: {}, using {}", id, e, Category::Other);
            Category::Other
        }),
        None if options.classify_missing => classify(&title, &description),
        None => Category::Uncategorized,
    };

    let (date, date_fallback) = match first_parsed(record, DATE_FIELD_NAMES, parse_date_value) {
        Some(date) => (date, false),
        None => {
            let today = clock.today();
            warn!("Record {}: missing or unparseable date, using {}", id, today);
            (today, true)
        }
    };

    let trading_volume =
        first_parsed(record, VOLUME_FIELD_NAMES, parse_volume).unwrap_or_else(|| {
            if let Some(value) = find_field(record, VOLUME_FIELD_NAMES) {
                warn!("Record {}: invalid trading volume {}, using 0", id, value);
            }
            0.0
        });

    let verified = find_field(record, VERIFIED_FIELD_NAMES)
        .map(|value| parse_verified(value, &id))
        .unwrap_or(false);

    let event = Event {
        url: string_field(record, URL_FIELD_NAMES),
        source_url: string_field(record, SOURCE_URL_FIELD_NAMES),
        ..Event::new(id, title, category, date)
            .with_description(description)
            .with_volume(trading_volume)
            .with_verified(verified)
    };

    NormalizedRecord { event, date_fallback }
}

/// Parse a date string in any accepted format
///
/// **Public** - also used for the CLI `--today` flag
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Some(datetime.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// First present, non-null field among the aliases
///
/// **Private** - internal lookup
fn find_field<'a>(record: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| record.get(*name).filter(|value| !value.is_null()))
}

/// First value among the aliases that `parse` accepts
///
/// **Private** - a present but unusable alias does not hide a later usable one
fn first_parsed<T>(
    record: &Map<String, Value>,
    names: &[&str],
    parse: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    names
        .iter()
        .filter_map(|name| record.get(*name))
        .find_map(parse)
}

/// Trimmed, non-empty string field (numbers are accepted and stringified)
///
/// **Private** - internal lookup
fn string_field(record: &Map<String, Value>, names: &[&str]) -> Option<String> {
    let value = find_field(record, names)?;
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            warn!("Ignoring non-text value for {:?}: {}", names[0], other);
            return None;
        }
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// **Private** - date from a string or a unix timestamp in seconds
fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

/// **Private** - volume from a number or a "$1,234.50"-style string
fn parse_volume(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| *c != '$' && *c != ',')
                .collect();
            if cleaned.is_empty() {
                Some(0.0)
            } else {
                cleaned.parse::<f64>().ok()
            }
        }
        _ => None,
    };

    parsed.filter(|volume| volume.is_finite() && *volume >= 0.0)
}

/// **Private** - boolean from bool, number or common yes/no strings
fn parse_verified(value: &Value, id: &str) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "1" | "verified" => true,
            "false" | "no" | "n" | "0" | "" | "unverified" => false,
            _ => {
                warn!("Record {}: unrecognised verified value {:?}, using false", id, s);
                false
            }
        },
        other => {
            warn!("Record {}: unrecognised verified value {}, using false", id, other);
            false
        }
    }
}
