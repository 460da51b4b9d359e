//! Core logic for the agent relay: the closed set of modes, prompt rendering,
//! the provider client seam and the relay controller that ties them together.

pub mod agent;
pub mod contract;
pub mod llm_client;
pub mod mode;
pub mod prompts;

pub use agent::{AgentRelay, RelayError};
pub use mode::Mode;
