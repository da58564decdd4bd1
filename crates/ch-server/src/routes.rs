//! Route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::debug;

use ch_core::{ChatRequest, ChatResponse, ErrorResponse};
use ch_oracle::{FortuneProvider, FortuneService};

/// Build the application router around a shared service.
pub fn router<P: FortuneProvider + 'static>(service: Arc<FortuneService<P>>) -> Router {
    Router::new()
        .route("/api/chat", post(chat::<P>))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn healthz() -> &'static str {
    "ok"
}

/// `POST /api/chat`.
///
/// The body is parsed by hand so that requests without a JSON content type
/// are still accepted.
async fn chat<P: FortuneProvider + 'static>(
    State(service): State<Arc<FortuneService<P>>>,
    body: Bytes,
) -> Response {
    let request: ChatRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            debug!(error = %e, "rejected chat request");
            let body = ErrorResponse {
                error: format!("invalid request body: {e}"),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let fortune = service.fulfil(&request.into_fortune_request()).await;
    Json(ChatResponse { text: fortune.text }).into_response()
}
