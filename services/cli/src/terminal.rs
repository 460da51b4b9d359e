use agent_relay_client::ActionSurface;
use agent_relay_core::Mode;
use std::io::{self, Write};

/// Renders an action on the terminal: busy line and errors on stderr, the
/// generated text on stdout.
pub struct TerminalSurface {
    mode: Mode,
    busy: bool,
}

impl TerminalSurface {
    pub fn new(mode: Mode) -> Self {
        Self { mode, busy: false }
    }

    fn clear_busy_line(&mut self) {
        if self.busy {
            let mut stderr = io::stderr().lock();
            let _ = write!(stderr, "\r\x1b[2K");
            let _ = stderr.flush();
            self.busy = false;
        }
    }

    fn busy_label(&self) -> &'static str {
        match self.mode {
            Mode::SummarizeText => "Summarizing...",
            Mode::GenerateTasks => "Generating tasks...",
            Mode::ProduceQuote => "Finding a quote...",
        }
    }
}

impl ActionSurface for TerminalSurface {
    fn reset(&mut self) {}

    fn set_busy(&mut self, busy: bool) {
        if !busy {
            self.clear_busy_line();
        } else if !self.busy {
            let mut stderr = io::stderr().lock();
            let _ = write!(stderr, "{}", self.busy_label());
            let _ = stderr.flush();
            self.busy = true;
        }
    }

    fn show_result(&mut self, text: &str) {
        self.clear_busy_line();
        println!("{text}");
    }

    fn show_error(&mut self, message: &str) {
        self.clear_busy_line();
        eprintln!("{message}");
    }
}
