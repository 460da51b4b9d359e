//! Terminal front end for the agent relay.
//!
//! Each subcommand is one user action: the input is validated locally, a busy
//! line is shown on stderr while the relay works, and the generated text is
//! printed to stdout.

mod terminal;

use agent_relay_client::{AgentClient, run_action};
use agent_relay_core::Mode;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use terminal::TerminalSurface;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Summaries, task lists and quotes from the agent relay")]
struct Cli {
    /// Base URL of the running relay.
    #[arg(long, env = "AGENT_RELAY_URL", default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a block of text.
    Summarize {
        /// The text to summarize. Words are joined with spaces.
        text: Vec<String>,
    },
    /// Break a goal down into actionable steps.
    Tasks {
        /// The goal to plan for.
        goal: Vec<String>,
    },
    /// Ask for a short motivational quote.
    Quote,
}

impl Command {
    fn into_action(self) -> (Mode, String) {
        match self {
            Command::Summarize { text } => (Mode::SummarizeText, text.join(" ")),
            Command::Tasks { goal } => (Mode::GenerateTasks, goal.join(" ")),
            Command::Quote => (Mode::ProduceQuote, String::new()),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = AgentClient::new(&cli.url);
    let (mode, input) = cli.command.into_action();

    let mut surface = TerminalSurface::new(mode);
    let outcome = run_action(&client, &mut surface, mode, &input).await;

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
