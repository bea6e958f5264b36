//! Capabilities the controller needs from the page.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::ChatTurn;

/// The on-screen chat surface: input field, message list and page state.
pub trait ChatView {
    /// Current text of the message input.
    fn input_value(&self) -> String;

    fn clear_input(&self);

    /// Flag the page as "chat active" (consumed by styling).
    fn mark_chat_active(&self);

    /// Add a turn at the very end of the message list.
    fn append_turn(&self, turn: &ChatTurn);

    /// Add a turn just before the typing-indicator placeholder, or at the end
    /// if there is no placeholder.
    fn insert_turn(&self, turn: &ChatTurn);

    /// Remove every rendered turn, leaving other children of the list alone.
    fn remove_turns(&self);

    fn scroll_to_bottom(&self);

    fn enable_send(&self);
}

/// "Agent is typing" feedback.
pub trait TypingIndicator {
    fn show(&self);
    fn hide(&self);
}

/// Externally registered show/hide functions that take precedence over the
/// default indicator.
pub trait IndicatorOverride {
    /// Run the registered show function. Returns false if none is registered.
    fn try_show(&self) -> bool;
    /// Run the registered hide function. Returns false if none is registered.
    fn try_hide(&self) -> bool;
}

impl<T: IndicatorOverride + ?Sized> IndicatorOverride for Rc<T> {
    fn try_show(&self) -> bool {
        (**self).try_show()
    }

    fn try_hide(&self) -> bool {
        (**self).try_hide()
    }
}

/// Never overrides.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOverride;

impl IndicatorOverride for NoOverride {
    fn try_show(&self) -> bool {
        false
    }

    fn try_hide(&self) -> bool {
        false
    }
}

type Hook = Box<dyn Fn()>;

/// In-process registry of override functions. Hooks can be registered or
/// removed at any time; each call looks them up afresh.
#[derive(Default)]
pub struct RegisteredHooks {
    show: RefCell<Option<Hook>>,
    hide: RefCell<Option<Hook>>,
}

impl RegisteredHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_show(&self, hook: impl Fn() + 'static) {
        *self.show.borrow_mut() = Some(Box::new(hook));
    }

    pub fn register_hide(&self, hook: impl Fn() + 'static) {
        *self.hide.borrow_mut() = Some(Box::new(hook));
    }

    pub fn unregister(&self) {
        self.show.borrow_mut().take();
        self.hide.borrow_mut().take();
    }
}

impl IndicatorOverride for RegisteredHooks {
    fn try_show(&self) -> bool {
        match self.show.borrow().as_ref() {
            Some(hook) => {
                hook();
                true
            }
            None => false,
        }
    }

    fn try_hide(&self) -> bool {
        match self.hide.borrow().as_ref() {
            Some(hook) => {
                hook();
                true
            }
            None => false,
        }
    }
}

/// Uses the override when one is registered, the fallback otherwise.
pub struct OverridableIndicator<O, D> {
    overrides: O,
    fallback: D,
}

impl<O, D> OverridableIndicator<O, D> {
    pub fn new(overrides: O, fallback: D) -> Self {
        Self { overrides, fallback }
    }
}

impl<O: IndicatorOverride, D: TypingIndicator> TypingIndicator for OverridableIndicator<O, D> {
    fn show(&self) {
        if !self.overrides.try_show() {
            self.fallback.show();
        }
    }

    fn hide(&self) {
        if !self.overrides.try_hide() {
            self.fallback.hide();
        }
    }
}
