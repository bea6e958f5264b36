use jarvis_chat::KeyValueStore;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// `sessionStorage` or `localStorage` behind the core store trait.
///
/// Storage exceptions (quota, privacy mode) are logged and otherwise ignored.
pub struct WebStorage {
    storage: Storage,
    scope: &'static str,
}

impl WebStorage {
    /// Cleared when the browsing session ends.
    pub fn session(window: &Window) -> Result<Self, JsValue> {
        let storage = window
            .session_storage()?
            .ok_or_else(|| JsValue::from_str("session storage is unavailable"))?;
        Ok(Self {
            storage,
            scope: "session",
        })
    }

    /// Kept until explicitly cleared.
    pub fn local(window: &Window) -> Result<Self, JsValue> {
        let storage = window
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("local storage is unavailable"))?;
        Ok(Self {
            storage,
            scope: "local",
        })
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read {} from {} storage: {:?}", key, self.scope, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("Failed to write {} to {} storage: {:?}", key, self.scope, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::warn!("Failed to remove {} from {} storage: {:?}", key, self.scope, e);
        }
    }
}
