use thiserror::Error;

/// Failure of a single briefing data source. Each section of the briefing
/// carries its own `Result`, so one failed source never blocks the others.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("API key error. Please check your API key.")]
    Auth,

    #[error("City '{0}' not found. Please check spelling.")]
    NotFound(String),

    #[error("Provider error (Status: {0})")]
    Provider(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed provider response: {0}")]
    Parse(String),
}

impl FetchError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }

    pub(crate) fn parse(err: reqwest::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
