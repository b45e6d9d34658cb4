//! Consumer operations: one producer call each, mapped to a wrapped
//! response or the fallback record.

use service_common::HealthRecord;
use tracing::warn;

use crate::client::{ProducerClient, UpstreamError};
use crate::config::ConsumerConfig;
use crate::records::{
    ConsumeByIdResponse, ConsumeResponse, ErrorRecord, Outcome, Payload, ProducerCheckResponse,
    SERVICE_NAME,
};

#[derive(Debug, Clone)]
pub struct Consumer {
    client: ProducerClient,
}

impl Consumer {
    pub fn new(config: &ConsumerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ProducerClient::new(config)?,
        })
    }

    pub fn producer_url(&self) -> &str {
        self.client.base_url()
    }

    /// Local health; never touches the producer.
    pub fn health(&self) -> HealthRecord {
        HealthRecord::up(SERVICE_NAME).with_producer_url(self.producer_url())
    }

    pub async fn consume(&self) -> Outcome<ConsumeResponse> {
        let result = self.client.data().await;
        self.settle(result, ConsumeResponse::new, || {
            "Failed to connect to producer service".to_string()
        })
    }

    pub async fn consume_by_id(&self, id: &str) -> Outcome<ConsumeByIdResponse> {
        let result = self.client.data_by_id(id).await;
        self.settle(
            result,
            |payload| ConsumeByIdResponse::new(id, payload),
            || format!("Failed to get data for ID: {}", id),
        )
    }

    pub async fn check_producer(&self) -> Outcome<ProducerCheckResponse> {
        let result = self.client.health().await;
        self.settle(result, ProducerCheckResponse::new, || {
            "Producer service is not reachable".to_string()
        })
    }

    /// Every failure class collapses into the same fallback shape.
    fn settle<T>(
        &self,
        result: Result<Payload, UpstreamError>,
        wrap: impl FnOnce(Payload) -> T,
        message: impl FnOnce() -> String,
    ) -> Outcome<T> {
        match result {
            Ok(payload) => Outcome::Success(wrap(payload)),
            Err(e) => {
                let message = message();
                warn!(error = %e, "{}", message);
                Outcome::Fallback(ErrorRecord::new(message, self.producer_url()))
            }
        }
    }
}
