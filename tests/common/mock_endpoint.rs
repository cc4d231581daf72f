//! Mock directory endpoint for exercising the HTTP source.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// What the endpoint answers with.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "unavailable"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Clone)]
struct EndpointState {
    response: MockResponse,
    hits: Arc<AtomicUsize>,
}

/// A running mock endpoint.
pub struct MockEndpoint {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl MockEndpoint {
    /// Serve `response` on `GET /users` from an ephemeral port.
    pub async fn start(response: MockResponse) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = EndpointState {
            response,
            hits: Arc::clone(&hits),
        };
        let app = Router::new()
            .route("/users", get(serve_users))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock endpoint");
        let addr = listener.local_addr().expect("Mock endpoint has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock endpoint crashed");
        });

        Self {
            url: format!("http://{}/users", addr),
            hits,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn serve_users(State(state): State<EndpointState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if state.response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.response.delay_ms)).await;
    }
    let status = StatusCode::from_u16(state.response.status).unwrap_or(StatusCode::OK);
    (
        status,
        [(CONTENT_TYPE, "application/json")],
        state.response.body.clone(),
    )
        .into_response()
}

/// A URL on a port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}/users", addr)
}
