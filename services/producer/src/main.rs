//! Producer Service binary.

use anyhow::Result;
use clap::Parser;
use service_common::{init_tracing, serve, ServerArgs};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "producer", author, version, about = "Producer service", long_about = None)]
struct Cli {
    #[command(flatten)]
    server: ServerArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.server.log_format)?;

    info!("Starting {}", producer_service::SERVICE_NAME);

    serve(
        producer_service::SERVICE_NAME,
        cli.server.addr(),
        producer_service::router(),
    )
    .await
}
