//! Data models for the Proxima API

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One QR code scan, as reported by the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitEvent {
    /// Campaign or QR code identifier
    pub source: String,
    /// Client-side capture time, normalised to UTC
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub page_path: String,
}

/// Fixed `{"message": ...}` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health probe body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub sender: String,
    pub reciever: String,
    pub message: String,
}

/// ISO 8601 forms carrying an explicit offset, tried after RFC 3339
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// Offset-less forms, read as UTC
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Accept ISO 8601 timestamps; offset-less and date-only values are UTC
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    // %z has no spelling for a trailing Z
    let zoned = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(rest) => format!("{}+0000", rest),
        None => raw.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| format!("invalid datetime: {:?}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_visit_event_uses_camel_case_fields() {
        let event: VisitEvent = serde_json::from_value(json!({
            "source": "flyer-2023",
            "timestamp": "2023-01-01T00:00:00Z",
            "userAgent": "Mozilla/5.0",
            "pagePath": "/landing",
            "referrer": "ignored"
        }))
        .unwrap();

        assert_eq!(
            event,
            VisitEvent {
                source: "flyer-2023".to_string(),
                timestamp: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
                user_agent: "Mozilla/5.0".to_string(),
                page_path: "/landing".to_string(),
            }
        );
    }

    #[test]
    fn test_snake_case_fields_are_rejected() {
        let result: Result<VisitEvent, _> = serde_json::from_value(json!({
            "source": "s",
            "timestamp": "2023-01-01T00:00:00Z",
            "user_agent": "ua",
            "page_path": "/"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_offset_timestamps_are_normalised_to_utc() {
        let parsed = parse_timestamp("2023-06-01T12:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 6, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_naive_timestamps_are_read_as_utc() {
        let parsed = parse_timestamp("2023-06-01T12:30:00.250").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_685_622_600_250);

        let spaced = parse_timestamp("2023-06-01 12:30:00").unwrap();
        assert_eq!(spaced, Utc.with_ymd_and_hms(2023, 6, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_minute_precision_timestamps() {
        let midnight = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(parse_timestamp("2023-01-01T00:00Z").unwrap(), midnight);
        assert_eq!(parse_timestamp("2023-01-01T00:00").unwrap(), midnight);
        assert_eq!(
            parse_timestamp("2023-01-01T02:00+02:00").unwrap(),
            midnight
        );
    }

    #[test]
    fn test_offsets_without_colon() {
        let midnight = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(
            parse_timestamp("2023-01-01T00:00:00+0000").unwrap(),
            midnight
        );
        assert_eq!(
            parse_timestamp("2023-01-01T05:30:00.5+0530").unwrap(),
            midnight + chrono::Duration::milliseconds(500)
        );
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        assert_eq!(
            parse_timestamp("2023-01-01").unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_garbage_timestamps_are_rejected() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2023-13-01T00:00:00Z").is_err());
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2023-01-01T").is_err());
        assert!(parse_timestamp("2023-01-01T00:00+25").is_err());
    }

    #[test]
    fn test_health_response_keeps_legacy_field_name() {
        let body = serde_json::to_value(HealthResponse {
            sender: "a@gmail.com".to_string(),
            reciever: "b@gmail.com".to_string(),
            message: "Fast API is running.".to_string(),
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "sender": "a@gmail.com",
                "reciever": "b@gmail.com",
                "message": "Fast API is running."
            })
        );
    }
}
