/// Why an invocation did not yield text.
///
/// `Network`, `Status` and `InvalidBody` are transport failures: the relay's
/// own answer never arrived in a usable form.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Required input was blank. Raised before any request is sent.
    #[error("{0}")]
    MissingInput(&'static str),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-2xx response without a readable `{ "error": ... }` body.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// 2xx response whose body was not a relay response.
    #[error("Unexpected response from relay: {0}")]
    InvalidBody(String),
    /// The relay answered with an error message.
    #[error("{0}")]
    Relay(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Status(_) | Self::InvalidBody(_)
        )
    }
}
