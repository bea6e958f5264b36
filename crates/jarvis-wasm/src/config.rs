use jarvis_chat::{ChatConfig, ConfigError};
use serde::{Deserialize, Serialize};

/// Page-level settings: the core config plus the DOM names the widget binds to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(flatten)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub elements: ElementIds,
    #[serde(default)]
    pub classes: MarkerClasses,
    #[serde(default)]
    pub hooks: HookNames,
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.chat.validate()?;
        Ok(config)
    }
}

/// Element ids looked up at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub form: String,
    pub input: String,
    pub messages: String,
    /// Optional placeholder; turns are rendered before it.
    pub typing_indicator: String,
    pub send_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "messageForm".to_string(),
            input: "message".to_string(),
            messages: "messages".to_string(),
            typing_indicator: "typing-indicator".to_string(),
            send_button: "sendButton".to_string(),
        }
    }
}

/// CSS classes for styling and for finding rendered turns again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerClasses {
    pub user: String,
    pub agent: String,
    /// Added to `<body>` once there is something in the chat.
    pub chat_active: String,
    /// Toggled on the typing indicator when no override is registered.
    pub indicator_visible: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            user: "user-message".to_string(),
            agent: "agent-message".to_string(),
            chat_active: "chat-active".to_string(),
            indicator_visible: "visible".to_string(),
        }
    }
}

/// Names of the optional `window` functions that override the indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookNames {
    pub show: String,
    pub hide: String,
}

impl Default for HookNames {
    fn default() -> Self {
        Self {
            show: "showTypingIndicator".to_string(),
            hide: "hideTypingIndicator".to_string(),
        }
    }
}
