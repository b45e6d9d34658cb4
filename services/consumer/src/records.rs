//! Response bodies served by the consumer.
//!
//! Producer payloads are embedded as raw JSON objects so they reach the
//! caller exactly as the producer sent them.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};
use service_common::now;

pub const SERVICE_NAME: &str = "consumer-service";
pub const CONNECTION_SUCCESS: &str = "SUCCESS";

/// A JSON object returned by the producer.
pub type Payload = Map<String, Value>;

/// `GET /api/consume` success body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsumeResponse {
    pub consumer_service: String,
    pub timestamp: NaiveDateTime,
    pub producer_response: Payload,
    pub message: String,
}

impl ConsumeResponse {
    pub fn new(producer_response: Payload) -> Self {
        Self {
            consumer_service: SERVICE_NAME.to_string(),
            timestamp: now(),
            producer_response,
            message: "Successfully consumed data from producer service".to_string(),
        }
    }
}

/// `GET /api/consume/{id}` success body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsumeByIdResponse {
    pub consumer_service: String,
    pub timestamp: NaiveDateTime,
    pub requested_id: String,
    pub producer_response: Payload,
    pub message: String,
}

impl ConsumeByIdResponse {
    pub fn new(requested_id: &str, producer_response: Payload) -> Self {
        Self {
            consumer_service: SERVICE_NAME.to_string(),
            timestamp: now(),
            requested_id: requested_id.to_string(),
            producer_response,
            message: format!("Successfully consumed data for ID: {}", requested_id),
        }
    }
}

/// `GET /api/check-producer` success body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProducerCheckResponse {
    pub consumer_service: String,
    pub producer_health: Payload,
    pub connection_status: String,
    pub timestamp: NaiveDateTime,
}

impl ProducerCheckResponse {
    pub fn new(producer_health: Payload) -> Self {
        Self {
            consumer_service: SERVICE_NAME.to_string(),
            producer_health,
            connection_status: CONNECTION_SUCCESS.to_string(),
            timestamp: now(),
        }
    }
}

/// Body returned in place of any success body when the producer call fails.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ErrorRecord {
    pub consumer_service: String,
    pub error: String,
    pub producer_url: String,
    pub timestamp: NaiveDateTime,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>, producer_url: impl Into<String>) -> Self {
        Self {
            consumer_service: SERVICE_NAME.to_string(),
            error: error.into(),
            producer_url: producer_url.into(),
            timestamp: now(),
        }
    }
}

/// Result of a proxied call: the wrapped producer payload or the fallback.
///
/// Both branches are answered with `200 OK`; callers tell them apart by the
/// presence of `error` in the body.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Success(T),
    Fallback(ErrorRecord),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_consume_response_uses_kebab_case() {
        let body = serde_json::to_value(ConsumeResponse::new(payload(json!({"a": 1})))).unwrap();

        assert_eq!(body["consumer-service"], "consumer-service");
        assert_eq!(body["producer-response"], json!({"a": 1}));
        assert_eq!(body["message"], "Successfully consumed data from producer service");
        assert!(body.get("timestamp").is_some());
    }

    #[test]
    fn test_consume_by_id_message_mentions_id() {
        let body = serde_json::to_value(ConsumeByIdResponse::new("7", Payload::new())).unwrap();

        assert_eq!(body["requested-id"], "7");
        assert_eq!(body["message"], "Successfully consumed data for ID: 7");
    }

    #[test]
    fn test_check_response_reports_success() {
        let body = serde_json::to_value(ProducerCheckResponse::new(Payload::new())).unwrap();

        assert_eq!(body["connection-status"], "SUCCESS");
        assert_eq!(body["producer-health"], json!({}));
    }

    #[test]
    fn test_fallback_serializes_flat() {
        let outcome: Outcome<ConsumeResponse> =
            Outcome::Fallback(ErrorRecord::new("boom", "http://p:8080"));
        let body = serde_json::to_value(&outcome).unwrap();
        let obj = body.as_object().unwrap();

        assert!(!outcome.is_success());
        assert_eq!(obj["error"], "boom");
        assert_eq!(obj["producer-url"], "http://p:8080");
        assert_eq!(obj["consumer-service"], "consumer-service");
        assert_eq!(obj.len(), 4);
    }

    #[tokio::test]
    async fn test_fallback_is_still_ok_status() {
        let outcome: Outcome<ConsumeResponse> = Outcome::Fallback(ErrorRecord::new("boom", "x"));
        let response = outcome.into_response();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
