//! Record types shared by both services.
//!
//! Field names match the JSON the services put on the wire, so a record
//! serialized by the producer deserializes unchanged on the consumer side.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Status reported by every health endpoint.
pub const STATUS_UP: &str = "UP";

/// Local wall-clock time without zone, e.g. `2024-05-01T10:15:30.123456`.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Health of a single service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub status: String,
    pub service: String,
    pub timestamp: NaiveDateTime,
    /// Upstream the service depends on, if any.
    #[serde(rename = "producer-url", default, skip_serializing_if = "Option::is_none")]
    pub producer_url: Option<String>,
}

impl HealthRecord {
    /// A healthy record stamped with the current time.
    pub fn up(service: impl Into<String>) -> Self {
        Self {
            status: STATUS_UP.to_string(),
            service: service.into(),
            timestamp: now(),
            producer_url: None,
        }
    }

    pub fn with_producer_url(mut self, url: impl Into<String>) -> Self {
        self.producer_url = Some(url.into());
        self
    }
}

/// A data item served by the producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
    pub data: String,
    pub timestamp: NaiveDateTime,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_record_omits_missing_url() {
        let json = serde_json::to_value(HealthRecord::up("producer-service")).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["status"], "UP");
        assert_eq!(obj["service"], "producer-service");
        assert!(obj.contains_key("timestamp"));
        assert!(!obj.contains_key("producer-url"));
        assert_eq!(obj.len(), 3);
    }

    #[test]
    fn test_health_record_with_url() {
        let record = HealthRecord::up("consumer-service").with_producer_url("http://p:8080");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["producer-url"], "http://p:8080");
    }

    #[test]
    fn test_data_record_without_id() {
        let record = DataRecord {
            id: None,
            message: "m".to_string(),
            data: "d".to_string(),
            timestamp: now(),
            service: "producer-service".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("id"));
        assert_eq!(obj.len(), 4);
    }

    #[test]
    fn test_timestamp_is_iso_local_datetime() {
        let json = serde_json::to_value(HealthRecord::up("x")).unwrap();
        let ts = json["timestamp"].as_str().unwrap();

        assert!(NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
        assert!(!ts.ends_with('Z'));
    }
}
