//! Tolerant decoders for backend row fields.
//!
//! The hosted gateway serializes sensor values as JSON numbers most of the
//! time, but older rows carry them as strings, and timestamps arrive either
//! as RFC 3339 with an offset or as a bare `YYYY-MM-DDTHH:MM:SS` from
//! timezone-less columns. Bare timestamps are read as UTC.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub(crate) fn de_datetime_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {raw}")))
}

pub(crate) fn de_opt_f32_from_any<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_f64()
            .map(|value| Some(value as f32))
            .ok_or_else(|| serde::de::Error::custom("expected float-compatible number")),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else if let Ok(value) = trimmed.parse::<f32>() {
                Ok(Some(value))
            } else {
                Ok(None)
            }
        }
        Value::Null => Ok(None),
        other => Err(serde::de::Error::custom(format!(
            "expected number or null, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2023-07-18T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 7, 18, 10, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_zulu() {
        let parsed = parse_timestamp("2023-07-18T10:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 7, 18, 10, 0, 0).unwrap());
    }

    #[test]
    fn parses_bare_timestamp_as_utc() {
        let parsed = parse_timestamp("2023-07-18T10:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 7, 18, 10, 0, 0).unwrap());

        let fractional = parse_timestamp("2023-07-18T10:00:00.250").unwrap();
        assert_eq!(fractional.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
