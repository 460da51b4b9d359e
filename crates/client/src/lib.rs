//! Client side of the agent relay.
//!
//! [`AgentClient`] performs one `POST /agent` round trip. [`run_action`] wraps
//! it in the flow a user-facing front end needs: local validation, a busy
//! indicator, and a visible result or error on an [`ActionSurface`].

pub mod action;
pub mod error;
pub mod invoker;

pub use action::{ActionOutcome, ActionSurface, run_action};
pub use error::ClientError;
pub use invoker::AgentClient;

#[cfg(test)]
mod test_support;
