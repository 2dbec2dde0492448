// Time and JSON helpers shared by the source parsers
use crate::model::ParserError;
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde_json::Value;

/// Report and "today" calculations use UTC+3 (East Africa Time, no DST).
pub const GMT3: Tz = chrono_tz::Africa::Nairobi;

/// Parses a naive timestamp in `format` and reads it as UTC.
pub fn parse_utc(value: &str, format: &str) -> Result<DateTime<Utc>, ParserError> {
    NaiveDateTime::parse_from_str(value, format)
        .map(|naive| naive.and_utc())
        .map_err(|e| ParserError::InvalidKickoff {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

pub fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

/// Score as text. Missing, null, zero and empty values all read as "0".
pub fn score_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => "0".to_string(),
    }
}
