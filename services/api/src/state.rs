//! Shared Application State
//!
//! Built once at startup and shared read-only by every request handler.

use crate::config::Config;
use agent_relay_core::AgentRelay;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<AgentRelay>,
    pub config: Arc<Config>,
}
