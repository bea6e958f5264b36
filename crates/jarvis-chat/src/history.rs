use std::rc::Rc;

use crate::storage::KeyValueStore;
use crate::types::{ChatTurn, Role};
use crate::view::ChatView;

/// Durable, append-only chat log stored as one JSON array under one key.
pub struct HistoryStore {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl HistoryStore {
    pub fn new(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Persisted turns in insertion order. Absent or unreadable history is empty.
    pub fn load(&self) -> Vec<ChatTurn> {
        let Some(raw) = self.store.get(&self.key) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<ChatTurn>>(&raw) {
            Ok(history) => history,
            Err(e) => {
                log::warn!("Ignoring unreadable chat history under {}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Replace the persisted history with `history`.
    pub fn save(&self, history: &[ChatTurn]) {
        match serde_json::to_string(history) {
            Ok(json) => self.store.set(&self.key, &json),
            Err(e) => log::error!("Failed to serialize chat history: {}", e),
        }
    }

    /// Read-modify-write of a single new turn.
    ///
    /// Not coordinated across tabs: two tabs appending at once keep whichever
    /// array was written last.
    pub fn append(&self, role: Role, text: &str) {
        let mut history = self.load();
        history.push(ChatTurn::new(role, text));
        self.save(&history);
    }

    pub fn clear(&self) {
        self.store.remove(&self.key);
    }

    /// Rebuild the on-screen list from the persisted history.
    pub fn render(&self, view: &dyn ChatView) {
        view.remove_turns();

        let history = self.load();
        for turn in &history {
            view.insert_turn(turn);
        }

        if !history.is_empty() {
            view.mark_chat_active();
        }

        view.scroll_to_bottom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn history_store() -> (HistoryStore, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        (HistoryStore::new(store.clone(), "adk_chat_history"), store)
    }

    #[test]
    fn test_load_absent_is_empty() {
        let (history, _) = history_store();
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (history, _) = history_store();
        let turns = vec![
            ChatTurn::user("hi"),
            ChatTurn::agent("Hello!"),
            ChatTurn::user(""),
            ChatTurn::agent("multi\nline \"quoted\" ünïcode"),
        ];
        history.save(&turns);
        assert_eq!(history.load(), turns);
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        let (history, store) = history_store();
        for raw in ["{not json", "{}", "null", "\"text\"", "[1, 2]"] {
            store.set("adk_chat_history", raw);
            assert!(history.load().is_empty(), "raw: {}", raw);
        }
    }

    #[test]
    fn test_append_adds_one_turn_at_end() {
        let (history, _) = history_store();
        history.save(&[ChatTurn::agent("earlier")]);

        history.append(Role::User, "hi");

        let turns = history.load();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns.last(), Some(&ChatTurn::user("hi")));
    }

    #[test]
    fn test_append_over_corrupt_history_starts_fresh() {
        let (history, store) = history_store();
        store.set("adk_chat_history", "garbage");

        history.append(Role::Agent, "x");
        assert_eq!(history.load(), vec![ChatTurn::agent("x")]);
    }

    #[test]
    fn test_entry_without_role_keeps_history_readable() {
        let (history, store) = history_store();
        store.set("adk_chat_history", r#"[{"role":"user","text":"a"},{"text":"b"}]"#);

        assert_eq!(history.load(), vec![ChatTurn::user("a"), ChatTurn::agent("b")]);

        history.append(Role::User, "c");
        assert_eq!(
            history.load(),
            vec![ChatTurn::user("a"), ChatTurn::agent("b"), ChatTurn::user("c")]
        );
    }

    #[test]
    fn test_clear_removes_key() {
        let (history, store) = history_store();
        history.append(Role::User, "hi");
        history.clear();
        assert_eq!(store.get("adk_chat_history"), None);
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_persisted_format() {
        let (history, store) = history_store();
        history.append(Role::User, "hi");
        history.append(Role::Agent, "yo");
        assert_eq!(
            store.get("adk_chat_history").as_deref(),
            Some(r#"[{"role":"user","text":"hi"},{"role":"agent","text":"yo"}]"#)
        );
    }
}
