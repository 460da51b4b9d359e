//! Per-action flow
//!
//! Each user action (summarize, tasks, quote) runs independently: validate
//! locally, show a busy indicator, call the relay once, then display exactly
//! one result or one error. The busy indicator is always cleared before
//! control returns.

use agent_relay_core::Mode;
use tracing::warn;

use crate::{error::ClientError, invoker::AgentClient};

/// Where an action shows its progress and outcome.
pub trait ActionSurface {
    /// Hides the previous result and error before a new request.
    fn reset(&mut self);
    fn set_busy(&mut self, busy: bool);
    fn show_result(&mut self, text: &str);
    fn show_error(&mut self, message: &str);
}

/// What the user ended up seeing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Required input was blank; nothing was sent.
    Rejected(String),
    /// The relay returned text, now on display.
    Completed(String),
    /// The call failed; the displayed error message.
    Failed(String),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Checks input the way the relay will, so blank input never leaves the client.
///
/// Returns the trimmed input to send, or `None` for modes that take none.
pub fn prepare_input(mode: Mode, raw_input: &str) -> Result<Option<&str>, ClientError> {
    if !mode.requires_input() {
        return Ok(None);
    }
    let input = raw_input.trim();
    if input.is_empty() {
        return Err(ClientError::MissingInput(match mode {
            Mode::GenerateTasks => "Please enter a goal",
            _ => "Please enter some text to summarize",
        }));
    }
    Ok(Some(input))
}

/// Runs one user action against the relay and reflects it on `surface`.
pub async fn run_action<S>(
    client: &AgentClient,
    surface: &mut S,
    mode: Mode,
    raw_input: &str,
) -> ActionOutcome
where
    S: ActionSurface + ?Sized,
{
    let input = match prepare_input(mode, raw_input) {
        Ok(input) => input,
        Err(err) => {
            let message = err.to_string();
            surface.show_error(&message);
            return ActionOutcome::Rejected(message);
        }
    };

    surface.reset();
    surface.set_busy(true);

    let outcome = match client.invoke(mode, input).await {
        Ok(text) => {
            surface.show_result(&text);
            ActionOutcome::Completed(text)
        }
        Err(err) => {
            warn!(%mode, error = %err, "Agent action failed");
            let message = format!("Error: {err}");
            surface.show_error(&message);
            ActionOutcome::Failed(message)
        }
    };

    surface.set_busy(false);
    outcome
}
