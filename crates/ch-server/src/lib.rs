//! HTTP API for Celestial Hand.
//!
//! Serves `POST /api/chat`, which turns a card name into a fortune through a
//! shared [`FortuneService`]. Every generation outcome is answered with
//! `200` and `{"text": ...}`; only an unreadable request body gets a `400`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use ch_oracle::{FortuneProvider, FortuneService};

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use routes::router;

/// Bind `config.addr` and serve until Ctrl-C.
pub async fn serve<P: FortuneProvider + 'static>(
    config: &ServerConfig,
    service: Arc<FortuneService<P>>,
) -> ServerResult<()> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;
    info!(
        addr = %listener.local_addr()?,
        remote = service.has_provider(),
        "fortune server listening"
    );
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("fortune server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
