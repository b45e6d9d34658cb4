//! HTTP client for the producer's API.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::config::ConsumerConfig;
use crate::records::Payload;

/// Why a producer call failed. Only ever logged; callers see the fallback.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, timeout or request construction failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Producer answered with a non-success status
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },

    /// Body was not a JSON object
    #[error("invalid body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Pooled client bound to one producer base URL. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ProducerClient {
    http: Client,
    base_url: String,
}

impl ProducerClient {
    pub fn new(config: &ConsumerConfig) -> Result<Self, reqwest::Error> {
        let mut builder =
            Client::builder().user_agent(concat!("consumer-service/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.producer_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.producer_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/data`
    pub async fn data(&self) -> Result<Payload, UpstreamError> {
        self.get("/api/data").await
    }

    /// `GET /api/data/{id}`, with `id` inserted as-is.
    pub async fn data_by_id(&self, id: &str) -> Result<Payload, UpstreamError> {
        self.get(&format!("/api/data/{}", id)).await
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<Payload, UpstreamError> {
        self.get("/api/health").await
    }

    /// One attempt, no retry.
    async fn get(&self, path: &str) -> Result<Payload, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(UpstreamError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { url, status });
        }

        match response.json::<Payload>().await {
            Ok(payload) => Ok(payload),
            Err(source) => Err(UpstreamError::Decode { url, source }),
        }
    }
}
