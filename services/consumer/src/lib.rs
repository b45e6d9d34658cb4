//! Consumer Service
//!
//! Forwards each request to the producer service exactly once and wraps
//! the answer. Any failure on the way is replaced by a fixed error body;
//! the caller always gets `200 OK`.

pub mod client;
pub mod config;
pub mod records;
pub mod routes;
pub mod service;

pub use client::{ProducerClient, UpstreamError};
pub use config::{ConsumerConfig, DEFAULT_PRODUCER_URL};
pub use records::{ErrorRecord, Outcome, Payload, SERVICE_NAME};
pub use routes::router;
pub use service::Consumer;
