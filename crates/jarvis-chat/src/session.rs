use std::rc::Rc;

use uuid::Uuid;

use crate::config::ChatConfig;
use crate::storage::KeyValueStore;
use crate::types::SessionId;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hands out the per-browser-session id, creating it on first use.
pub struct SessionManager {
    store: Rc<dyn KeyValueStore>,
    key: String,
    prefix: String,
    token_length: usize,
}

impl SessionManager {
    pub fn new(store: Rc<dyn KeyValueStore>, config: &ChatConfig) -> Self {
        Self {
            store,
            key: config.session_key.clone(),
            prefix: config.session_prefix.clone(),
            token_length: config.token_length,
        }
    }

    /// Stored id if present, otherwise a fresh one that is written back.
    pub fn session_id(&self) -> SessionId {
        if let Some(existing) = self.store.get(&self.key).filter(|id| !id.is_empty()) {
            return existing;
        }

        let session_id = format!("{}{}", self.prefix, random_token(self.token_length));
        self.store.set(&self.key, &session_id);
        log::debug!("Created session id {}", session_id);
        session_id
    }
}

/// Random base-36 token of at most `max_len` characters, never empty.
pub fn random_token(max_len: usize) -> String {
    let mut token = to_base36(Uuid::new_v4().as_u128());
    token.truncate(max_len.max(1));
    token
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Only ASCII digits and lowercase letters were pushed.
    digits.into_iter().map(char::from).collect()
}
