//! Agent Modes
//!
//! A `Mode` selects which prompt template the relay renders. The set is closed:
//! adding a mode means adding a variant here and handling it everywhere the
//! compiler asks.

use std::fmt;
use std::str::FromStr;

/// The fixed set of agent tools a client can ask the relay to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Condense the caller's text into a few sentences.
    SummarizeText,
    /// Turn the caller's goal into a numbered list of steps.
    GenerateTasks,
    /// Produce a motivational quote. Takes no input.
    ProduceQuote,
}

/// Returned when a string does not name any known [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}'")]
pub struct UnknownMode(pub String);

impl Mode {
    /// Every mode, in the order clients present them.
    pub const ALL: [Mode; 3] = [Mode::SummarizeText, Mode::GenerateTasks, Mode::ProduceQuote];

    /// The canonical name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::SummarizeText => "summarize-text",
            Mode::GenerateTasks => "generate-tasks",
            Mode::ProduceQuote => "produce-quote",
        }
    }

    /// Whether the mode needs non-blank input to render its prompt.
    pub fn requires_input(self) -> bool {
        match self {
            Mode::SummarizeText | Mode::GenerateTasks => true,
            Mode::ProduceQuote => false,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    /// Accepts the canonical names plus the short and legacy names earlier
    /// server and browser builds used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarize-text" | "summarize" | "summarizer" => Ok(Mode::SummarizeText),
            "generate-tasks" | "tasks" | "taskGenerator" => Ok(Mode::GenerateTasks),
            "produce-quote" | "quote" => Ok(Mode::ProduceQuote),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}
