use agent_relay_core::{llm_client::GROQ_API_BASE, prompts::PromptSettings};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Provider credential. Never validated here: an empty key surfaces as a
    /// provider failure on the first request.
    pub api_key: String,
    pub provider_base_url: String,
    pub chat_model: String,
    pub log_level: Level,
    pub static_dir: PathBuf,
    pub prompts: PromptSettings,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();

        let provider_base_url =
            std::env::var("PROVIDER_BASE_URL").unwrap_or_else(|_| GROQ_API_BASE.to_string());

        let chat_model =
            std::env::var("CHAT_MODEL").unwrap_or_else(|_| "llama3-70b-8192".to_string());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./public"));

        let defaults = PromptSettings::default();
        let prompts = PromptSettings {
            summary_sentences: count_var("SUMMARY_SENTENCES", defaults.summary_sentences)?,
            task_steps: count_var("TASK_STEPS", defaults.task_steps)?,
        };

        Ok(Self {
            bind_address,
            api_key,
            provider_base_url,
            chat_model,
            log_level,
            static_dir,
            prompts,
        })
    }
}

/// Reads a small positive count, falling back to `default` when unset.
fn count_var(name: &str, default: u8) -> Result<u8, ConfigError> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<u8>() {
        Ok(0) => Err(ConfigError::InvalidValue(
            name.to_string(),
            "must be greater than zero".to_string(),
        )),
        Ok(count) => Ok(count),
        Err(e) => Err(ConfigError::InvalidValue(name.to_string(), e.to_string())),
    }
}
