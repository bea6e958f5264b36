//! Data model shared by the history store, the controller and the wire.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Constants
// ============================================================================

/// Displayed when the server reply carries no usable text.
pub const NO_RESPONSE_TEXT: &str = "No response";

/// Displayed (and persisted) when a send fails for any reason.
pub const SEND_FAILED_TEXT: &str = "Error: Could not send message";

/// Opaque per-browser-session identifier, e.g. `session_k3j9x0q1m2z8a`.
pub type SessionId = String;

// ============================================================================
// Chat Turns
// ============================================================================

/// Who produced a turn.
///
/// In persisted history anything other than `"user"`, including a missing or
/// null role, decodes as `Agent`, the same way the page styles every non-user entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(other)]
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
        }
    }
}

/// One entry in the chat log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(deserialize_with = "deserialize_role", default = "default_role")]
    pub role: Role,
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub text: String,
}

impl ChatTurn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }
}

fn default_role() -> Role {
    Role::Agent
}

/// Only the exact string `"user"` is a user turn.
fn deserialize_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if s == "user" => Ok(Role::User),
        _ => Ok(Role::Agent),
    }
}

/// Helper function to deserialize string or null values
fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /api/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub message: String,
    pub session_id: SessionId,
}

/// Successful reply from the message endpoint.
///
/// Every field is optional; fields of the wrong type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentReply {
    pub response: Option<String>,
    pub message: Option<String>,
    pub thoughts: Vec<String>,
    pub tool_calls: Vec<String>,
}

impl AgentReply {
    /// Build a reply from any decoded JSON value. Non-objects yield an empty reply.
    pub fn from_value(value: &Value) -> Self {
        let string_field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        let string_list = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        };

        Self {
            response: string_field("response"),
            message: string_field("message"),
            thoughts: string_list("thoughts"),
            tool_calls: string_list("tool_calls"),
        }
    }

    /// First non-empty of `response` and `message`, else `fallback`.
    pub fn display_text<'a>(&'a self, fallback: &'a str) -> &'a str {
        [self.response.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or(fallback)
    }
}
