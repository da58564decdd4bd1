//! How a session reaches the fortune service.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use ch_core::{ChatRequest, ChatResponse, FortuneRequest};
use ch_oracle::{FortuneProvider, FortuneService};

use crate::error::{RevealError, RevealResult};

/// Carries one fortune request to the service and returns its text.
pub trait FortuneTransport: Send + Sync + 'static {
    /// Issue `request` once.
    fn request(&self, request: &FortuneRequest)
    -> impl Future<Output = RevealResult<String>> + Send;
}

/// Time allowed for one `/api/chat` round trip.
///
/// Longer than the provider timeout, so a server that falls back after a
/// slow provider still answers in time.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts to a running `/api/chat` endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Target the server at `base_url` (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/api/chat", base_url.trim_end_matches('/')),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Give up on a request after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn transport_error(e: &reqwest::Error, timeout: Duration) -> RevealError {
    if e.is_timeout() {
        RevealError::Transport(format!("no answer within {}s", timeout.as_secs_f32()))
    } else {
        RevealError::Transport(e.to_string())
    }
}

impl FortuneTransport for HttpTransport {
    async fn request(&self, request: &FortuneRequest) -> RevealResult<String> {
        let resp = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(|e| transport_error(&e, self.timeout))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RevealError::Transport(format!("server returned {status}")));
        }

        let body: ChatResponse = resp
            .json()
            .await
            .map_err(|e| transport_error(&e, self.timeout))?;
        Ok(body.text)
    }
}

/// Calls a [`FortuneService`] in the same process.
pub struct DirectTransport<P> {
    service: Arc<FortuneService<P>>,
}

impl<P> DirectTransport<P> {
    /// Wrap a shared service.
    pub fn new(service: Arc<FortuneService<P>>) -> Self {
        Self { service }
    }
}

impl<P: FortuneProvider + 'static> FortuneTransport for DirectTransport<P> {
    async fn request(&self, request: &FortuneRequest) -> RevealResult<String> {
        Ok(self.service.fulfil(request).await.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use ch_core::Language;
    use ch_oracle::GeminiProvider;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn url_joins_path() {
        let transport = HttpTransport::new("http://localhost:3000/");
        assert_eq!(transport.url(), "http://localhost:3000/api/chat");
        assert_eq!(transport.timeout(), DEFAULT_TIMEOUT);
    }

    #[tokio::test]
    async fn http_posts_chat_request() {
        let app = Router::new().route(
            "/api/chat",
            post(|axum::Json(body): axum::Json<ChatRequest>| async move {
                axum::Json(ChatResponse {
                    text: format!("{}/{}", body.prompt, body.language()),
                })
            }),
        );
        let base = serve(app).await;
        let text = HttpTransport::new(&base)
            .request(&FortuneRequest::new("月亮", Language::Zh))
            .await
            .unwrap();
        assert_eq!(text, "月亮/zh");
    }

    #[tokio::test]
    async fn http_error_status_is_transport_error() {
        let app = Router::new().route(
            "/api/chat",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(app).await;
        let err = HttpTransport::new(&base)
            .request(&FortuneRequest::new("Death", Language::En))
            .await
            .unwrap_err();
        assert!(matches!(err, RevealError::Transport(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = HttpTransport::new(&format!("http://{addr}"))
            .request(&FortuneRequest::new("Death", Language::En))
            .await
            .unwrap_err();
        assert!(matches!(err, RevealError::Transport(_)));
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        // Accepts connections and holds them open without answering.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let transport =
            HttpTransport::new(&format!("http://{addr}")).with_timeout(Duration::from_millis(200));
        let outcome = tokio::time::timeout(
            Duration::from_secs(10),
            transport.request(&FortuneRequest::new("The Moon", Language::En)),
        )
        .await
        .expect("request should give up on its own");
        match outcome {
            Err(RevealError::Transport(msg)) => assert!(msg.contains("no answer within")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn direct_uses_service_fallback() {
        let service = Arc::new(FortuneService::<GeminiProvider>::new(None));
        let text = DirectTransport::new(service)
            .request(&FortuneRequest::new("The Fool", Language::En))
            .await
            .unwrap();
        assert!(text.ends_with("(Simulated)"));
    }
}
