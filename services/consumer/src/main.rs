//! Consumer Service binary.

use anyhow::{Context, Result};
use clap::Parser;
use consumer_service::{router, Consumer, ConsumerConfig, DEFAULT_PRODUCER_URL, SERVICE_NAME};
use service_common::{init_tracing, serve, ServerArgs};
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "consumer", author, version, about = "Consumer service", long_about = None)]
struct Cli {
    #[command(flatten)]
    server: ServerArgs,

    /// Base URL of the producer service
    #[arg(long, env = "PRODUCER_SERVICE_URL", default_value = DEFAULT_PRODUCER_URL)]
    producer_url: String,

    /// Timeout for producer calls in seconds (client default when unset)
    #[arg(long, env = "PRODUCER_TIMEOUT_SECS")]
    producer_timeout_secs: Option<u64>,
}

impl Cli {
    fn consumer_config(&self) -> ConsumerConfig {
        let config = ConsumerConfig::new(self.producer_url.clone());
        match self.producer_timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.server.log_format)?;

    let config = cli.consumer_config();
    info!("Starting {} (producer: {})", SERVICE_NAME, config.producer_url);

    let consumer = Consumer::new(&config).context("Failed to build producer client")?;

    serve(SERVICE_NAME, cli.server.addr(), router(consumer)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_producer_overrides() {
        let cli = Cli::try_parse_from([
            "consumer",
            "--producer-url",
            "http://localhost:9000",
            "--producer-timeout-secs",
            "3",
        ])
        .unwrap();
        let config = cli.consumer_config();

        assert_eq!(config.producer_url, "http://localhost:9000");
        assert_eq!(config.producer_timeout, Some(Duration::from_secs(3)));
    }
}
