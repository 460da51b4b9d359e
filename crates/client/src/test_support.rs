//! In-process stand-in for the relay, bound to an ephemeral port.

use agent_relay_core::contract::{AgentRequest, AgentResult, ErrorResponse};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Counts requests so tests can assert whether the network was touched.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Echoes `mode|input` back as the result, or a 500 error body for input `"fail"`.
async fn echo(State(hits): State<Hits>, Json(request): Json<AgentRequest>) -> Response {
    hits.0.fetch_add(1, Ordering::SeqCst);
    match request.input.as_deref() {
        Some("fail") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "provider exploded".to_string(),
            }),
        )
            .into_response(),
        input => Json(AgentResult {
            result: format!(
                "{}|{}",
                request.mode.as_deref().unwrap_or_default(),
                input.unwrap_or("<none>")
            ),
        })
        .into_response(),
    }
}

pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts the echo relay and returns its base URL with a hit counter.
pub async fn echo_relay() -> (String, Hits) {
    let hits = Hits::default();
    let router = Router::new()
        .route("/agent", post(echo))
        .with_state(hits.clone());
    (serve(router).await, hits)
}
