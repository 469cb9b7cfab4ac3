//! Temperature Sample - Inbound Payload Decoding

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One decoded temperature reading pushed by the server.
///
/// Fields beyond `temperature` and `timestamp` (the server currently sends
/// `unit`) are captured opaquely in `extra` and flow into the reading log
/// unchanged. Samples are immutable once decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemperatureSample {
    /// Reading in degrees Celsius
    pub temperature: f64,
    /// Instant the server took the reading
    pub timestamp: DateTime<Utc>,
    /// Passthrough of any additional payload fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemperatureSample {
    /// Decode one inbound text message.
    ///
    /// Requires a numeric `temperature` and a `timestamp` parseable as an
    /// absolute instant (RFC 3339). Failure is a protocol violation; the
    /// caller decides whether the session survives it.
    pub fn decode(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| Error::Payload { source })
    }

    /// Unit string, if the server sent one
    pub fn unit(&self) -> Option<&str> {
        self.extra.get("unit").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let sample = TemperatureSample::decode(
            r#"{"temperature":21.37,"unit":"Celcius","timestamp":"2026-08-04T10:15:42.123Z"}"#,
        )
        .expect("decode");

        assert_eq!(sample.temperature, 21.37);
        assert_eq!(sample.unit(), Some("Celcius"));
        assert!(sample.timestamp.to_rfc3339().starts_with("2026-08-04T10:15:42.123"));
    }

    #[test]
    fn test_decode_keeps_unknown_fields() {
        let sample = TemperatureSample::decode(
            r#"{"temperature":18.0,"timestamp":"2026-08-04T10:15:42Z","sensor":"rack-3"}"#,
        )
        .expect("decode");

        assert_eq!(sample.extra.get("sensor").and_then(Value::as_str), Some("rack-3"));
    }

    #[test]
    fn test_decode_rejects_missing_temperature() {
        let err = TemperatureSample::decode(r#"{"timestamp":"2026-08-04T10:15:42Z"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_decode_rejects_bad_timestamp() {
        let err = TemperatureSample::decode(r#"{"temperature":20.0,"timestamp":"yesterday"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(TemperatureSample::decode("not a payload").is_err());
    }
}
