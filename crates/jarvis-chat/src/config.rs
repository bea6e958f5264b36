//! Settings for the chat core. Every field has a default, so an empty JSON
//! object is a complete config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{NO_RESPONSE_TEXT, SEND_FAILED_TEXT};

/// Longest base-36 rendering of a `u128`.
pub const MAX_TOKEN_LENGTH: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Endpoint that receives `POST {message, session_id}`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Session-scoped storage key holding the session id.
    #[serde(default = "default_session_key")]
    pub session_key: String,

    /// Durable storage key holding the JSON history array.
    #[serde(default = "default_history_key")]
    pub history_key: String,

    #[serde(default = "default_session_prefix")]
    pub session_prefix: String,

    /// Maximum number of base-36 characters after the prefix.
    #[serde(default = "default_token_length")]
    pub token_length: usize,

    #[serde(default = "default_no_response_text")]
    pub no_response_text: String,

    #[serde(default = "default_send_failed_text")]
    pub send_failed_text: String,
}

fn default_endpoint() -> String {
    "/api/message".to_string()
}

fn default_session_key() -> String {
    "chat_session_id".to_string()
}

fn default_history_key() -> String {
    "adk_chat_history".to_string()
}

fn default_session_prefix() -> String {
    "session_".to_string()
}

fn default_token_length() -> usize {
    13
}

fn default_no_response_text() -> String {
    NO_RESPONSE_TEXT.to_string()
}

fn default_send_failed_text() -> String {
    SEND_FAILED_TEXT.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            session_key: default_session_key(),
            history_key: default_history_key(),
            session_prefix: default_session_prefix(),
            token_length: default_token_length(),
            no_response_text: default_no_response_text(),
            send_failed_text: default_send_failed_text(),
        }
    }
}

impl ChatConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::Empty("endpoint"));
        }
        if self.session_key.is_empty() {
            return Err(ConfigError::Empty("session_key"));
        }
        if self.history_key.is_empty() {
            return Err(ConfigError::Empty("history_key"));
        }
        if self.token_length == 0 || self.token_length > MAX_TOKEN_LENGTH {
            return Err(ConfigError::TokenLength {
                got: self.token_length,
                max: MAX_TOKEN_LENGTH,
            });
        }
        Ok(())
    }
}
