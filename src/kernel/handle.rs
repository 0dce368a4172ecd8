//! Native-input surface of one attached instance.

use super::effect::Notification;
use super::host::{DispatchResult, FakeInputHost, InputId};
use crate::core::InputEvent;

/// What code written against a native text input expects to call.
pub trait TextInputLike {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn selection_start(&self) -> usize;
    fn selection_end(&self) -> usize;
    fn set_selection_range(&mut self, start: usize, end: usize);
    fn focus(&mut self);
    fn blur(&mut self);
    fn subscribe(&mut self, listener: Box<dyn FnMut(&Notification)>);
}

/// Borrowed view of one instance inside its host.
pub struct InputHandle<'a> {
    host: &'a mut FakeInputHost,
    id: InputId,
}

impl<'a> InputHandle<'a> {
    pub fn new(host: &'a mut FakeInputHost, id: InputId) -> Option<Self> {
        host.get(id)?;
        Some(Self { host, id })
    }

    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn dispatch(&mut self, event: InputEvent) -> DispatchResult {
        self.host.dispatch(self.id, event)
    }

    pub fn is_focused(&self) -> bool {
        self.host.focused() == Some(self.id)
    }

    pub fn check_validity(&mut self) -> bool {
        self.host.check_validity(self.id)
    }
}

impl TextInputLike for InputHandle<'_> {
    fn value(&self) -> String {
        self.host.value(self.id).unwrap_or_default().to_string()
    }

    fn set_value(&mut self, value: &str) {
        self.host.set_value(self.id, value);
    }

    fn selection_start(&self) -> usize {
        self.host.selection(self.id).map_or(0, |(start, _)| start)
    }

    fn selection_end(&self) -> usize {
        self.host.selection(self.id).map_or(0, |(_, end)| end)
    }

    fn set_selection_range(&mut self, start: usize, end: usize) {
        self.host.set_selection_range(self.id, start, end);
    }

    fn focus(&mut self) {
        self.host.focus(self.id);
    }

    fn blur(&mut self) {
        self.host.blur(self.id);
    }

    /// Listeners observe every instance; filter on `Notification::target`.
    fn subscribe(&mut self, listener: Box<dyn FnMut(&Notification)>) {
        self.host.subscribe(listener);
    }
}
