//! Consumer configuration.

use std::time::Duration;

/// Producer base URL used when none is configured.
pub const DEFAULT_PRODUCER_URL: &str = "http://producer-service:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerConfig {
    /// Base URL the `/api/...` paths are appended to, verbatim.
    pub producer_url: String,
    /// Per-request timeout for producer calls. `None` keeps the client default.
    pub producer_timeout: Option<Duration>,
}

impl ConsumerConfig {
    pub fn new(producer_url: impl Into<String>) -> Self {
        Self {
            producer_url: producer_url.into(),
            producer_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.producer_timeout = Some(timeout);
        self
    }
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCER_URL)
    }
}
