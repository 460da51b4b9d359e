use agent_relay_core::{
    Mode,
    contract::{AgentRequest, AgentResponse, AgentResult, ErrorResponse},
};
use tracing::{debug, warn};

use crate::error::ClientError;

/// Calls a running relay's `POST /agent` endpoint.
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AgentClient {
    /// Creates a client for the relay served at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/agent", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request and waits for its single response.
    ///
    /// An `{ "error": ... }` body is reported as [`ClientError::Relay`] whatever
    /// the status code. A non-2xx status without one is [`ClientError::Status`].
    pub async fn invoke(&self, mode: Mode, input: Option<&str>) -> Result<String, ClientError> {
        let request = AgentRequest {
            mode: Some(mode.to_string()),
            input: input.map(str::to_string),
        };
        debug!(%mode, endpoint = %self.endpoint, "Calling agent relay");

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<AgentResponse>(&body) {
            Ok(AgentResponse::Error(ErrorResponse { error })) => {
                warn!(%mode, %status, %error, "Relay reported an error");
                Err(ClientError::Relay(error))
            }
            _ if !status.is_success() => Err(ClientError::Status(status.as_u16())),
            Ok(AgentResponse::Result(AgentResult { result })) => Ok(result),
            Err(e) => Err(ClientError::InvalidBody(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{echo_relay, serve};
    use axum::{Router, http::StatusCode, routing::post};

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            AgentClient::new("http://localhost:5000").endpoint(),
            "http://localhost:5000/agent"
        );
        assert_eq!(
            AgentClient::new("http://localhost:5000/").endpoint(),
            "http://localhost:5000/agent"
        );
    }

    #[tokio::test]
    async fn test_invoke_returns_result_text() {
        let (url, hits) = echo_relay().await;
        let client = AgentClient::new(&url);

        let text = client
            .invoke(Mode::SummarizeText, Some("long text"))
            .await
            .unwrap();
        assert_eq!(text, "summarize-text|long text");

        let text = client.invoke(Mode::ProduceQuote, None).await.unwrap();
        assert_eq!(text, "produce-quote|<none>");
        assert_eq!(hits.count(), 2);
    }

    #[tokio::test]
    async fn test_error_body_carries_server_message() {
        let (url, _) = echo_relay().await;
        let err = AgentClient::new(&url)
            .invoke(Mode::GenerateTasks, Some("fail"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Relay(ref message) if message == "provider exploded"));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_bad_request_error_body_is_read() {
        let router = Router::new().route(
            "/agent",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    axum::Json(ErrorResponse {
                        error: "Invalid mode".to_string(),
                    }),
                )
            }),
        );
        let url = serve(router).await;

        let err = AgentClient::new(&url)
            .invoke(Mode::ProduceQuote, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid mode");
    }

    #[tokio::test]
    async fn test_non_json_failure_is_status_error() {
        let router = Router::new().route(
            "/agent",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
        );
        let url = serve(router).await;

        let err = AgentClient::new(&url)
            .invoke(Mode::ProduceQuote, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status(502)));
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[tokio::test]
    async fn test_success_with_foreign_body_is_invalid() {
        let router = Router::new().route("/agent", post(|| async { r#"{"output":"hi"}"# }));
        let url = serve(router).await;

        let err = AgentClient::new(&url)
            .invoke(Mode::ProduceQuote, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidBody(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_network_error() {
        let err = AgentClient::new("http://127.0.0.1:9")
            .invoke(Mode::ProduceQuote, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert!(err.is_transport());
    }
}
