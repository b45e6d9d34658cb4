//! Shared plumbing for the producer and consumer services.
//!
//! Both services speak the same health/data record shapes, log the same
//! way and boot the same way; only their routes differ.

pub mod records;
pub mod server;
pub mod telemetry;

pub use records::{now, DataRecord, HealthRecord, STATUS_UP};
pub use server::{serve, ServerArgs, DEFAULT_PORT};
pub use telemetry::{init_tracing, LogFormat};
