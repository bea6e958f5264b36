//! Core of the jarvis chat widget
//!
//! This crate holds everything the widget does that does not need a browser:
//! the persisted session id, the chat history log, and the submit state
//! machine. The browser side (`jarvis-wasm`) plugs DOM, web storage and HTTP
//! into the traits defined here.

pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod session;
pub mod storage;
pub mod transport;
pub mod types;
pub mod view;

pub use config::ChatConfig;
pub use controller::{ChatController, SubmitOutcome};
pub use error::{ConfigError, SendError};
pub use history::HistoryStore;
pub use session::SessionManager;
pub use storage::{KeyValueStore, MemoryStore};
pub use transport::{MessageTransport, TransportResponse};
pub use types::{AgentReply, ChatTurn, MessageRequest, Role, SessionId};
pub use view::{
    ChatView, IndicatorOverride, NoOverride, OverridableIndicator, RegisteredHooks,
    TypingIndicator,
};
