#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use jarvis_chat::{
    ChatConfig, ChatController, ChatTurn, ChatView, HistoryStore, MemoryStore, MessageTransport,
    SendError, SessionManager, TransportResponse, TypingIndicator,
};

/// One child of the fake message list.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Turn(ChatTurn),
    Indicator,
}

/// Message list, input and page flags kept in memory.
#[derive(Default)]
pub struct RecordingView {
    pub input: RefCell<String>,
    pub items: RefCell<Vec<Item>>,
    pub chat_active: Cell<bool>,
    pub send_enabled: Cell<bool>,
    pub scrolls: Cell<usize>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View whose list already holds the typing-indicator placeholder.
    pub fn with_indicator() -> Self {
        let view = Self::default();
        view.items.borrow_mut().push(Item::Indicator);
        view
    }

    pub fn type_input(&self, text: &str) {
        *self.input.borrow_mut() = text.to_string();
    }

    /// Leftovers from an earlier render, on both sides of the placeholder.
    pub fn append_stale_turns(&self) {
        let mut items = self.items.borrow_mut();
        items.insert(0, Item::Turn(ChatTurn::user("stale before")));
        items.push(Item::Turn(ChatTurn::agent("stale after")));
    }

    pub fn turns(&self) -> Vec<ChatTurn> {
        self.items
            .borrow()
            .iter()
            .filter_map(|item| match item {
                Item::Turn(turn) => Some(turn.clone()),
                Item::Indicator => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.turns().into_iter().map(|turn| turn.text).collect()
    }
}

impl ChatView for RecordingView {
    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn clear_input(&self) {
        self.input.borrow_mut().clear();
    }

    fn mark_chat_active(&self) {
        self.chat_active.set(true);
    }

    fn append_turn(&self, turn: &ChatTurn) {
        self.items.borrow_mut().push(Item::Turn(turn.clone()));
    }

    fn insert_turn(&self, turn: &ChatTurn) {
        let mut items = self.items.borrow_mut();
        match items.iter().position(|item| *item == Item::Indicator) {
            Some(index) => items.insert(index, Item::Turn(turn.clone())),
            None => items.push(Item::Turn(turn.clone())),
        }
    }

    fn remove_turns(&self) {
        self.items
            .borrow_mut()
            .retain(|item| matches!(item, Item::Indicator));
    }

    fn scroll_to_bottom(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn enable_send(&self) {
        self.send_enabled.set(true);
    }
}

#[derive(Default)]
pub struct FakeIndicator {
    pub visible: Cell<bool>,
    pub shown: Cell<usize>,
}

impl TypingIndicator for FakeIndicator {
    fn show(&self) {
        self.visible.set(true);
        self.shown.set(self.shown.get() + 1);
    }

    fn hide(&self) {
        self.visible.set(false);
    }
}

type Reply = Result<TransportResponse, SendError>;

enum Scripted {
    Ready(Reply),
    Pending(oneshot::Receiver<Reply>),
}

/// Transport that replays queued replies and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Scripted>>,
    pub requests: RefCell<Vec<(String, serde_json::Value)>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(response(status, body))));
    }

    pub fn fail(&self, error: SendError) {
        self.replies.borrow_mut().push_back(Scripted::Ready(Err(error)));
    }

    /// Queue a reply that arrives when the returned sender fires.
    pub fn pending(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Pending(rx));
        tx
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

pub fn response(status: u16, body: &str) -> TransportResponse {
    TransportResponse {
        status,
        body: body.to_string(),
    }
}

#[async_trait(?Send)]
impl MessageTransport for ScriptedTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<TransportResponse, SendError> {
        let parsed = serde_json::from_str(&body).expect("request body should be JSON");
        self.requests
            .borrow_mut()
            .push((endpoint.to_string(), parsed));

        let next = self.replies.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Pending(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(SendError::Transport("reply dropped".to_string()))),
            None => Err(SendError::Transport("no scripted reply".to_string())),
        }
    }
}

/// A controller wired to in-memory collaborators.
pub struct TestHarness {
    pub controller: Rc<ChatController>,
    pub view: Rc<RecordingView>,
    pub indicator: Rc<FakeIndicator>,
    pub transport: Rc<ScriptedTransport>,
    pub session_store: Rc<MemoryStore>,
    pub local_store: Rc<MemoryStore>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_view(RecordingView::with_indicator())
    }

    pub fn with_view(view: RecordingView) -> Self {
        Self::build(view, Rc::new(MemoryStore::new()))
    }

    /// Harness over an existing durable store, as after a page reload.
    pub fn reloaded(local_store: Rc<MemoryStore>) -> Self {
        Self::build(RecordingView::with_indicator(), local_store)
    }

    fn build(view: RecordingView, local_store: Rc<MemoryStore>) -> Self {
        let config = ChatConfig::default();
        let session_store = Rc::new(MemoryStore::new());
        let session_id = SessionManager::new(session_store.clone(), &config).session_id();
        let history = HistoryStore::new(local_store.clone(), config.history_key.clone());

        let view = Rc::new(view);
        let indicator = Rc::new(FakeIndicator::default());
        let transport = Rc::new(ScriptedTransport::default());

        let controller = Rc::new(ChatController::new(
            session_id,
            history,
            view.clone(),
            indicator.clone(),
            transport.clone(),
            config,
        ));

        Self {
            controller,
            view,
            indicator,
            transport,
            session_store,
            local_store,
        }
    }

    pub fn history(&self) -> Vec<ChatTurn> {
        self.controller.history().load()
    }
}
