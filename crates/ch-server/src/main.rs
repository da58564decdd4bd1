//! Standalone fortune server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use miette::IntoDiagnostic;

use ch_oracle::{FortuneService, OracleConfig};
use ch_server::ServerConfig;

#[derive(Parser)]
#[command(name = "ch-server", about = "Celestial Hand fortune API", version)]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Pause before fallback answers, in milliseconds
    #[arg(long, default_value = "0")]
    thinking_ms: u64,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let oracle =
        OracleConfig::from_env().with_thinking_delay(Duration::from_millis(args.thinking_ms));
    let service = FortuneService::from_config(&oracle).into_diagnostic()?;
    let config = ServerConfig::default().with_addr(args.addr);

    ch_server::serve(&config, Arc::new(service))
        .await
        .into_diagnostic()
}
