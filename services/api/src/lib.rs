//! Agent Relay API Library Crate
//!
//! Configuration, shared state, the `POST /agent` handler and routing for the
//! relay service. The `api` binary is a thin wrapper around this library.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
