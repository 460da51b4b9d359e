//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application: the
//! agent endpoint, OpenAPI documentation and the browser client's static assets.

use crate::{handlers, state::AppState};
use agent_relay_core::contract::{AgentRequest, AgentResult, ErrorResponse};

use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::run_agent),
    components(schemas(AgentRequest, AgentResult, ErrorResponse)),
    tags(
        (name = "Agent Relay", description = "Summaries, task lists and quotes from a hosted model")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&app_state.config.static_dir);

    let api_router = Router::new()
        .route("/agent", post(handlers::run_agent))
        .with_state(app_state);

    // Anything not matched above is looked up in the static asset directory.
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
        .fallback_service(assets)
}
