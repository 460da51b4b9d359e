//! Axum Handlers for the REST API
//!
//! The relay exposes a single operation. Every failure leaves this module as an
//! `ErrorResponse` body with a status chosen by `ApiError`.

use agent_relay_core::{
    RelayError,
    contract::{AgentRequest, AgentResult, ErrorResponse},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

use crate::state::AppState;

pub enum ApiError {
    BadRequest(String),
    ProviderFailure(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::ProviderFailure(message) => {
                error!("Provider failure: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            Self::ProviderFailure(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), "Rejected malformed agent request");
        Self::BadRequest(rejection.body_text())
    }
}

/// Run one of the agent tools and return the generated text.
#[utoipa::path(
    post,
    path = "/agent",
    request_body = AgentRequest,
    responses(
        (status = 200, description = "Text generated by the provider", body = AgentResult),
        (status = 400, description = "Missing or invalid mode, or missing input", body = ErrorResponse),
        (status = 500, description = "The generation provider failed", body = ErrorResponse)
    )
)]
pub async fn run_agent(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AgentRequest>, JsonRejection>,
) -> Result<Json<AgentResult>, ApiError> {
    let Json(request) = payload?;

    let result = state
        .relay
        .handle(request.mode.as_deref(), request.input.as_deref())
        .await?;

    Ok(Json(AgentResult { result }))
}
