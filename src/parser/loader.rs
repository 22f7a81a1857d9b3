//! Reading raw event records from JSON documents.
//!
//! Accepted shapes:
//! - a top-level array of records
//! - an object with an `events` array

use crate::utils::error::InputError;
use log::debug;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read raw records from a JSON file
///
/// **Public** - used by the summarize command
///
/// # Errors
/// * `InputError::ReadFailed` - file cannot be opened or read
/// * `InputError::JsonError` - file is not valid JSON
/// * `InputError::InvalidFormat` - JSON has the wrong top-level shape
pub fn read_records(input_path: impl AsRef<Path>) -> Result<Vec<Value>, InputError> {
    let input_path = input_path.as_ref();

    debug!("Reading events from: {}", input_path.display());

    let file = File::open(input_path)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;

    records_from_value(document)
}

/// Extract the record list from an already-parsed document
///
/// **Public** - for callers that hold JSON in memory
pub fn records_from_value(document: Value) -> Result<Vec<Value>, InputError> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut obj) => match obj.remove("events") {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(InputError::InvalidFormat(
                "\"events\" must be an array".to_string(),
            )),
            None => Err(InputError::InvalidFormat(
                "Object input must contain an \"events\" array".to_string(),
            )),
        },
        _ => Err(InputError::InvalidFormat(
            "Input must be a JSON array or an object with an \"events\" array".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_records_from_array() {
        let records = records_from_value(json!([{"id": "a"}, {"id": "b"}])).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_records_from_wrapped_object() {
        let records = records_from_value(json!({"events": [{"id": "a"}]})).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_records_invalid_shapes() {
        assert!(matches!(
            records_from_value(json!({"items": []})),
            Err(InputError::InvalidFormat(_))
        ));
        assert!(matches!(
            records_from_value(json!({"events": "nope"})),
            Err(InputError::InvalidFormat(_))
        ));
        assert!(matches!(
            records_from_value(json!(42)),
            Err(InputError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_read_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Christmas Day", "date": "2024-12-25"}}]"#).unwrap();

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["title"], "Christmas Day");
    }

    #[test]
    fn test_read_records_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(read_records(file.path()), Err(InputError::JsonError(_))));
    }

    #[test]
    fn test_read_records_missing_file() {
        let result = read_records("/nonexistent/events.json");
        assert!(matches!(result, Err(InputError::ReadFailed(_))));
    }
}
