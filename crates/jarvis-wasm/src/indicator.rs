use jarvis_chat::{IndicatorOverride, TypingIndicator};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

use crate::config::HookNames;
use crate::dom;

/// `window.showTypingIndicator` / `window.hideTypingIndicator`, looked up on
/// every call so an animation script may register them after startup.
pub struct WindowHooks {
    window: Window,
    names: HookNames,
}

impl WindowHooks {
    pub fn new(window: Window, names: HookNames) -> Self {
        Self { window, names }
    }

    fn call(&self, name: &str) -> bool {
        let hook = match Reflect::get(&self.window, &JsValue::from_str(name)) {
            Ok(value) => value,
            Err(_) => return false,
        };
        let Ok(hook) = hook.dyn_into::<Function>() else {
            return false;
        };
        if let Err(e) = hook.call0(&self.window) {
            log::warn!("{} threw: {:?}", name, e);
        }
        true
    }
}

impl IndicatorOverride for WindowHooks {
    fn try_show(&self) -> bool {
        self.call(&self.names.show)
    }

    fn try_hide(&self) -> bool {
        self.call(&self.names.hide)
    }
}

/// Default indicator: toggles a visibility class on the placeholder element.
pub struct ClassToggle {
    element: Option<Element>,
    class: String,
}

impl ClassToggle {
    pub fn new(element: Option<Element>, class: impl Into<String>) -> Self {
        Self {
            element,
            class: class.into(),
        }
    }
}

impl TypingIndicator for ClassToggle {
    fn show(&self) {
        if let Some(element) = &self.element {
            dom::warn_on_err(
                "Failed to show typing indicator",
                element.class_list().add_1(&self.class),
            );
        }
    }

    fn hide(&self) {
        if let Some(element) = &self.element {
            dom::warn_on_err(
                "Failed to hide typing indicator",
                element.class_list().remove_1(&self.class),
            );
        }
    }
}
