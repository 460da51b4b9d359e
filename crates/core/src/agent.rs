//! Agent Relay
//!
//! The relay validates a mode/input pair, renders the matching prompt and hands
//! it to the configured `LLMClient` exactly once. It holds no per-request state,
//! so a single instance is shared by every request the service handles.

use crate::{
    llm_client::LLMClient,
    mode::Mode,
    prompts::{PromptSettings, render_prompt},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Why a relay request did not produce text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The mode was absent (`None`) or named no known variant.
    #[error("{}", invalid_mode_message(.0))]
    InvalidMode(Option<String>),
    /// The mode needs input and none, or only whitespace, was supplied.
    #[error("{}", missing_input_message(.0))]
    MissingInput(Mode),
    /// The provider could not be reached or returned nothing usable.
    #[error("{0}")]
    ProviderFailure(String),
}

impl RelayError {
    /// True for failures the caller caused and can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidMode(_) | Self::MissingInput(_))
    }
}

fn invalid_mode_message(mode: &Option<String>) -> &'static str {
    match mode {
        None => "Mode is required",
        Some(_) => "Invalid mode",
    }
}

fn missing_input_message(mode: &Mode) -> &'static str {
    match mode {
        Mode::SummarizeText => "Text is required for summarization.",
        Mode::GenerateTasks => "Goal is required for task generation.",
        Mode::ProduceQuote => "Input is required.",
    }
}

/// Dispatches validated requests to the text-generation provider.
pub struct AgentRelay {
    llm_client: Arc<dyn LLMClient>,
    prompts: PromptSettings,
}

impl AgentRelay {
    pub fn new(llm_client: Arc<dyn LLMClient>, prompts: PromptSettings) -> Self {
        Self { llm_client, prompts }
    }

    /// Handles a raw request as it arrives from the wire.
    ///
    /// Parses `mode` and delegates to [`AgentRelay::run`]. No provider call is
    /// made when the mode is missing or unknown.
    pub async fn handle(
        &self,
        mode: Option<&str>,
        input: Option<&str>,
    ) -> Result<String, RelayError> {
        let mode = match mode {
            None => return Err(RelayError::InvalidMode(None)),
            Some(raw) => raw
                .parse::<Mode>()
                .map_err(|e| RelayError::InvalidMode(Some(e.0)))?,
        };
        self.run(mode, input).await
    }

    /// Runs a single mode: validate, render, call the provider once.
    ///
    /// The provider's text is returned verbatim.
    pub async fn run(&self, mode: Mode, input: Option<&str>) -> Result<String, RelayError> {
        let input = input.unwrap_or_default();
        if mode.requires_input() && input.trim().is_empty() {
            return Err(RelayError::MissingInput(mode));
        }

        let prompt = render_prompt(mode, input, &self.prompts);
        info!(%mode, input_len = input.len(), "Relaying request to provider");
        debug!(%prompt, "Rendered prompt");

        self.llm_client
            .complete(prompt)
            .await
            .map_err(|e| RelayError::ProviderFailure(format!("{e:#}")))
    }
}
