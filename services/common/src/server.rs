//! Listener bootstrap shared by both binaries.

use anyhow::{Context, Result};
use axum::Router;
use clap::Args;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::telemetry::LogFormat;

pub const DEFAULT_PORT: u16 = 8080;

/// Listener and logging options common to both services.
#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// Interface to bind
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

impl ServerArgs {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Bind `addr` and serve `app` until Ctrl-C or SIGTERM.
pub async fn serve(service: &str, addr: SocketAddr, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(service = %service, %addr, "{} listening on {}", service, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!(service = %service, "{} stopped", service);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        server: ServerArgs,
    }

    #[test]
    fn test_server_args_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();

        assert_eq!(cli.server.port, DEFAULT_PORT);
        assert_eq!(cli.server.log_format, LogFormat::Json);
        assert_eq!(cli.server.addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn test_server_args_override() {
        let cli = TestCli::try_parse_from([
            "test",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--log-format",
            "text",
        ])
        .unwrap();

        assert_eq!(cli.server.addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
        assert_eq!(cli.server.log_format, LogFormat::Text);
    }
}
