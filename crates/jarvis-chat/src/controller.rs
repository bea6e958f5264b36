//! Submit handling: one message goes `Idle -> Sending -> Displayed | Failed`.
//!
//! The network call is the only await point. Nothing blocks a second
//! submission while one is in flight, so replies land in completion order.

use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;

use crate::config::ChatConfig;
use crate::error::SendError;
use crate::history::HistoryStore;
use crate::transport::MessageTransport;
use crate::types::{AgentReply, ChatTurn, MessageRequest, Role, SessionId};
use crate::view::{ChatView, TypingIndicator};

/// How a submission ended. Failures are reported here, never propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input: nothing was displayed, stored or sent.
    Ignored,
    Displayed { text: String },
    Failed { error: SendError },
}

pub struct ChatController {
    session_id: SessionId,
    history: HistoryStore,
    view: Rc<dyn ChatView>,
    indicator: Rc<dyn TypingIndicator>,
    transport: Rc<dyn MessageTransport>,
    config: ChatConfig,
    in_flight: Cell<usize>,
}

impl ChatController {
    pub fn new(
        session_id: SessionId,
        history: HistoryStore,
        view: Rc<dyn ChatView>,
        indicator: Rc<dyn TypingIndicator>,
        transport: Rc<dyn MessageTransport>,
        config: ChatConfig,
    ) -> Self {
        Self {
            session_id,
            history,
            view,
            indicator,
            transport,
            config,
            in_flight: Cell::new(0),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Number of submissions currently waiting on the server.
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Page-load setup: enable sending and show prior turns.
    pub fn start(&self) {
        self.view.enable_send();
        self.history.render(self.view.as_ref());
    }

    /// Wipe persisted history and the rendered turns.
    pub fn clear_history(&self) {
        self.history.clear();
        self.history.render(self.view.as_ref());
        log::info!("Chat history cleared");
    }

    /// Handle one form submission.
    pub async fn submit(&self) -> SubmitOutcome {
        let message = self.view.input_value();
        // Only emptiness is checked; whitespace-only text is sent as-is.
        if message.is_empty() {
            log::debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }

        self.view.mark_chat_active();
        self.view.append_turn(&ChatTurn::user(message.as_str()));
        self.history.append(Role::User, &message);
        self.view.clear_input();
        self.indicator.show();
        log::info!("[CLIENT TO AGENT] {}", message);

        let result = {
            let _guard = InFlight::enter(&self.in_flight);
            self.send(&message).await
        };

        let outcome = match result {
            Ok(reply) => {
                self.indicator.hide();
                let text = reply.display_text(&self.config.no_response_text).to_string();
                self.view.append_turn(&ChatTurn::agent(text.as_str()));
                self.history.append(Role::Agent, &text);
                SubmitOutcome::Displayed { text }
            }
            Err(error) => {
                log::error!("Error sending message: {}", error);
                self.indicator.hide();
                let text = &self.config.send_failed_text;
                self.view.append_turn(&ChatTurn::agent(text.as_str()));
                self.history.append(Role::Agent, text);
                SubmitOutcome::Failed { error }
            }
        };

        self.view.scroll_to_bottom();
        outcome
    }

    async fn send(&self, message: &str) -> Result<AgentReply, SendError> {
        let request = MessageRequest {
            message: message.to_string(),
            session_id: self.session_id.clone(),
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| SendError::Transport(format!("failed to encode request: {}", e)))?;

        let response = self.transport.post_json(&self.config.endpoint, body).await?;
        if !response.is_success() {
            return Err(SendError::Status(response.status));
        }

        let value: Value =
            serde_json::from_str(&response.body).map_err(|e| SendError::Decode(e.to_string()))?;
        log::info!("[AGENT TO CLIENT] {}", value);

        let reply = AgentReply::from_value(&value);
        if !reply.thoughts.is_empty() {
            log::debug!("Agent thoughts: {:?}", reply.thoughts);
        }
        if !reply.tool_calls.is_empty() {
            log::debug!("Agent tool calls: {:?}", reply.tool_calls);
        }
        Ok(reply)
    }
}

/// Counts a submission as in flight until dropped.
struct InFlight<'a>(&'a Cell<usize>);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a Cell<usize>) -> Self {
        counter.set(counter.get() + 1);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}
