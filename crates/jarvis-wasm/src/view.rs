use jarvis_chat::{ChatTurn, ChatView, Role};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::config::{ElementIds, MarkerClasses};
use crate::dom;

/// The chat surface backed by the page's form, input and message list.
pub struct DomView {
    document: Document,
    input: HtmlInputElement,
    messages: Element,
    send_button: HtmlButtonElement,
    indicator_id: String,
    classes: MarkerClasses,
}

impl DomView {
    pub fn new(document: &Document, ids: &ElementIds, classes: MarkerClasses) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            input: dom::get_input_by_id(document, &ids.input)?,
            messages: dom::get_element_by_id(document, &ids.messages)?,
            send_button: dom::get_button_by_id(document, &ids.send_button)?,
            indicator_id: ids.typing_indicator.clone(),
            classes,
        })
    }

    fn class_for(&self, role: Role) -> &str {
        match role {
            Role::User => self.classes.user.as_str(),
            Role::Agent => self.classes.agent.as_str(),
        }
    }

    fn turn_element(&self, turn: &ChatTurn) -> Result<Element, JsValue> {
        let element = dom::create_element_with_class(&self.document, "p", self.class_for(turn.role))?;
        element.set_text_content(Some(&turn.text));
        Ok(element)
    }

    fn try_insert_turn(&self, turn: &ChatTurn) -> Result<(), JsValue> {
        let element = self.turn_element(turn)?;
        match self.document.get_element_by_id(&self.indicator_id) {
            Some(indicator) => self.messages.insert_before(&element, Some(&indicator))?,
            None => self.messages.append_child(&element)?,
        };
        Ok(())
    }
}

impl ChatView for DomView {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }

    fn mark_chat_active(&self) {
        let result = match self.document.body() {
            Some(body) => body.class_list().add_1(&self.classes.chat_active),
            None => Err(JsValue::from_str("No body element")),
        };
        dom::warn_on_err("Failed to mark chat active", result);
    }

    fn append_turn(&self, turn: &ChatTurn) {
        let result = self
            .turn_element(turn)
            .and_then(|element| self.messages.append_child(&element).map(|_| ()));
        dom::warn_on_err("Failed to append message", result);
    }

    fn insert_turn(&self, turn: &ChatTurn) {
        dom::warn_on_err("Failed to render message", self.try_insert_turn(turn));
    }

    fn remove_turns(&self) {
        let selector = format!(".{}, .{}", self.classes.user, self.classes.agent);
        dom::warn_on_err(
            "Failed to clear rendered messages",
            dom::remove_matching(&self.messages, &selector),
        );
    }

    fn scroll_to_bottom(&self) {
        dom::scroll_to_bottom(&self.messages);
    }

    fn enable_send(&self) {
        self.send_button.set_disabled(false);
    }
}
