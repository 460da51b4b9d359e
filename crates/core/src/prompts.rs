//! Prompt Templates
//!
//! Rendering is a pure function of the mode, the caller's input and a small
//! set of numeric knobs. The rendered string is sent to the provider as-is.

use crate::mode::Mode;

/// Numeric parameters baked into the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSettings {
    /// How many sentences a summary should contain.
    pub summary_sentences: u8,
    /// How many steps the task list should contain.
    pub task_steps: u8,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            summary_sentences: 3,
            task_steps: 5,
        }
    }
}

/// Renders the full prompt for `mode`.
///
/// `input` is embedded exactly as given. Callers are expected to have validated
/// it already; for [`Mode::ProduceQuote`] it is ignored.
pub fn render_prompt(mode: Mode, input: &str, settings: &PromptSettings) -> String {
    match mode {
        Mode::SummarizeText => format!(
            "Summarize the following text in {} simple, clear sentences:\n\n{}",
            settings.summary_sentences, input
        ),
        Mode::GenerateTasks => format!(
            "Given this goal: \"{}\", generate {} actionable steps in a numbered list.",
            input, settings.task_steps
        ),
        Mode::ProduceQuote => {
            "Give one short motivational quote. Keep it to one sentence.".to_string()
        }
    }
}
