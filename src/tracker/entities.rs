use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded moment of doing `actual` while meaning to do `intended`.
///
/// Serialized as `{ "intended", "actual", "minutes", "t" }` where `t` is epoch milliseconds.
/// Decoding goes through [Value] so hand-edited or foreign files never fail on a single odd
/// field, see [From<Value>].
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
#[serde(from = "Value")]
pub struct LogEntry {
    pub intended: String,
    pub actual: String,
    pub minutes: u32,
    #[serde(rename = "t", with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Creates an entry from user input. Returns [None] when either text trims to nothing.
    /// The timestamp is cut to millisecond precision so it survives the wire format unchanged.
    pub fn new(
        intended: &str,
        actual: &str,
        minutes: u32,
        timestamp: DateTime<Utc>,
    ) -> Option<LogEntry> {
        let intended = intended.trim();
        let actual = actual.trim();
        if intended.is_empty() || actual.is_empty() {
            return None;
        }
        Some(LogEntry {
            intended: intended.to_string(),
            actual: actual.to_string(),
            minutes,
            timestamp: DateTime::from_timestamp_millis(timestamp.timestamp_millis())
                .unwrap_or(timestamp),
        })
    }
}

impl From<Value> for LogEntry {
    fn from(value: Value) -> Self {
        LogEntry {
            intended: text_field(value.get("intended")),
            actual: text_field(value.get("actual")),
            minutes: value.get("minutes").map_or(0, minutes_from_value),
            timestamp: value
                .get("t")
                .and_then(millis_from_value)
                .and_then(DateTime::from_timestamp_millis)
                .unwrap_or_default(),
        }
    }
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}

fn millis_from_value(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|v| v as i64))
}

/// Coerces anything that looks like a number into whole minutes. Everything else is 0.
pub fn minutes_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| v.min(u32::MAX as u64) as u32)
            .or_else(|| n.as_f64().map(clamp_minutes))
            .unwrap_or(0),
        Value::String(s) => parse_minutes(s),
        _ => 0,
    }
}

/// Parses minutes typed by a user. Blank, negative or non-numeric input gives 0.
pub fn parse_minutes(input: &str) -> u32 {
    input.trim().parse::<f64>().map_or(0, clamp_minutes)
}

fn clamp_minutes(value: f64) -> u32 {
    if value.is_finite() && value > 0. {
        value.min(u32::MAX as f64) as u32
    } else {
        0
    }
}
