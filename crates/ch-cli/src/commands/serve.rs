use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use ch_oracle::{FortuneService, OracleConfig};
use ch_server::ServerConfig;

pub async fn run(addr: SocketAddr, thinking_ms: u64) -> Result<(), String> {
    let oracle =
        OracleConfig::from_env().with_thinking_delay(Duration::from_millis(thinking_ms));
    let mode = if oracle.has_credential() {
        format!("remote ({})", oracle.model)
    } else {
        "simulation".to_string()
    };
    let service = FortuneService::from_config(&oracle).map_err(|e| e.to_string())?;

    println!("  {} http://{addr}/api/chat", "Serving".bold());
    println!("  Mode: {mode}");
    println!("  Press Ctrl-C to stop.\n");

    let config = ServerConfig::default().with_addr(addr);
    ch_server::serve(&config, Arc::new(service))
        .await
        .map_err(|e| e.to_string())
}
