use std::rc::Rc;

use jarvis_chat::{ChatController, HistoryStore, OverridableIndicator, SessionManager};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::config::WidgetConfig;
use crate::dom;
use crate::indicator::{ClassToggle, WindowHooks};
use crate::storage::WebStorage;
use crate::transport::HttpTransport;
use crate::view::DomView;

pub struct ChatWidget {
    document: Document,
    config: WidgetConfig,
    controller: Rc<ChatController>,
}

impl ChatWidget {
    pub fn new(window: Window, config: WidgetConfig) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let sessions = SessionManager::new(Rc::new(WebStorage::session(&window)?), &config.chat);
        let session_id = sessions.session_id();
        log::info!("[SESSION] Using session ID: {}", session_id);

        let history = HistoryStore::new(
            Rc::new(WebStorage::local(&window)?),
            config.chat.history_key.clone(),
        );

        let view = Rc::new(DomView::new(&document, &config.elements, config.classes.clone())?);
        let indicator = Rc::new(OverridableIndicator::new(
            WindowHooks::new(window.clone(), config.hooks.clone()),
            ClassToggle::new(
                document.get_element_by_id(&config.elements.typing_indicator),
                config.classes.indicator_visible.clone(),
            ),
        ));

        let controller = Rc::new(ChatController::new(
            session_id,
            history,
            view,
            indicator,
            Rc::new(HttpTransport),
            config.chat.clone(),
        ));

        Ok(Self {
            document,
            config,
            controller,
        })
    }

    /// Enable sending, render stored turns, and start handling submissions.
    pub fn start(&self) -> Result<(), JsValue> {
        self.controller.start();

        let form = dom::get_element_by_id(&self.document, &self.config.elements.form)?;
        let controller = self.controller.clone();
        dom::add_submit_listener(&form, move || {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = controller.submit().await;
                log::debug!("Submission finished: {:?}", outcome);
            });
        })?;

        log::info!("Chat widget started");
        Ok(())
    }

    pub fn controller(&self) -> &ChatController {
        &self.controller
    }
}
