use thiserror::Error;

/// Why a submitted message did not produce an agent reply.
///
/// All variants are handled the same way by the controller; they only differ
/// in what gets logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("token_length must be between 1 and {max}, got {got}")]
    TokenLength { got: usize, max: usize },
}
