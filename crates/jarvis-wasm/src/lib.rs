use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Window;

mod config;
mod dom;
mod indicator;
mod storage;
mod transport;
mod view;
mod widget;

pub use config::{ElementIds, HookNames, MarkerClasses, WidgetConfig};
pub use indicator::{ClassToggle, WindowHooks};
pub use storage::WebStorage;
pub use transport::HttpTransport;
pub use view::DomView;
pub use widget::ChatWidget;

thread_local! {
    static WIDGET: RefCell<Option<ChatWidget>> = const { RefCell::new(None) };
}

/// Initialize the WASM module
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Jarvis chat WASM initialized");
}

/// Start the chat widget with the default element ids and endpoint
#[wasm_bindgen]
pub fn start_chat() -> Result<(), JsValue> {
    start(WidgetConfig::default())
}

/// Start the chat widget with a JSON config; missing fields keep their defaults
#[wasm_bindgen]
pub fn start_chat_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = WidgetConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    start(config)
}

/// Remove the stored history and the rendered turns
#[wasm_bindgen]
pub fn clear_chat_history() -> Result<(), JsValue> {
    WIDGET.with(|widget| match widget.borrow().as_ref() {
        Some(widget) => {
            widget.controller().clear_history();
            Ok(())
        }
        None => Err(JsValue::from_str("Chat widget not started")),
    })
}

/// Session id sent with every message, if the widget is running
#[wasm_bindgen]
pub fn chat_session_id() -> Option<String> {
    WIDGET.with(|widget| {
        widget
            .borrow()
            .as_ref()
            .map(|widget| widget.controller().session_id().to_string())
    })
}

fn start(config: WidgetConfig) -> Result<(), JsValue> {
    let widget = ChatWidget::new(window()?, config)?;
    widget.start()?;
    WIDGET.with(|slot| {
        if slot.borrow_mut().replace(widget).is_some() {
            log::warn!("Chat widget restarted; previous form listener stays attached");
        }
    });
    Ok(())
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}
