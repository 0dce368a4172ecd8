//! Attach/detach registry and focus manager.
//!
//! One host composes any number of fake inputs. It owns the only "currently
//! focused" reference: focusing an instance first blurs the previous holder.
//! Focus requests raised while handling an event are queued and processed after
//! the current handler returns, never re-entrantly.

use std::cell::OnceCell;
use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde_json::Value;
use slotmap::{new_key_type, SlotMap};

use crate::core::{FakeInputError, InputEvent, Method, Result};
use crate::metrics::{FontDescriptor, TextMetrics};
use crate::views::{self, CaretGeometry, RenderState};

use super::effect::{Effect, Notification};
use super::interaction::EventContext;
use super::services::adapters::{ConstraintValidator, HeadlessPlatform, StaticStyleSource};
use super::services::ports::{
    ElementId, ElementSnapshot, FakeInputOptions, Platform, StyleSource, ValidationBackend,
    Validity,
};
use super::shared::SharedResources;
use super::state::{BoxGeometry, FakeInput};

new_key_type! {
    pub struct InputId;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub notifications: Vec<Notification>,
    pub state_changed: bool,
    pub prevent_default: bool,
}

type Listener = Box<dyn FnMut(&Notification)>;

pub struct FakeInputHost {
    metrics: Box<dyn TextMetrics>,
    platform: Box<dyn Platform>,
    style: Box<dyn StyleSource>,
    validator: Box<dyn ValidationBackend>,
    defaults: FakeInputOptions,
    supported: OnceCell<bool>,
    instances: SlotMap<InputId, FakeInput>,
    by_element: FxHashMap<ElementId, InputId>,
    focused: Option<InputId>,
    shared: Option<SharedResources>,
    pending: VecDeque<(InputId, InputEvent)>,
    listeners: Vec<Listener>,
}

impl FakeInputHost {
    pub fn new(metrics: impl TextMetrics + 'static) -> Self {
        Self {
            metrics: Box::new(metrics),
            platform: Box::new(HeadlessPlatform::new()),
            style: Box::new(StaticStyleSource::default()),
            validator: Box::new(ConstraintValidator::new()),
            defaults: FakeInputOptions::default(),
            supported: OnceCell::new(),
            instances: SlotMap::with_key(),
            by_element: FxHashMap::default(),
            focused: None,
            shared: None,
            pending: VecDeque::new(),
            listeners: Vec::new(),
        }
    }

    pub fn with_platform(mut self, platform: impl Platform + 'static) -> Self {
        self.platform = Box::new(platform);
        self.supported = OnceCell::new();
        self
    }

    pub fn with_style_source(mut self, style: impl StyleSource + 'static) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn with_validator(mut self, validator: impl ValidationBackend + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn with_defaults(mut self, defaults: FakeInputOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Options seeded into instances attached from now on.
    pub fn set_defaults(&mut self, defaults: FakeInputOptions) {
        self.defaults = defaults;
    }

    pub fn defaults(&self) -> &FakeInputOptions {
        &self.defaults
    }

    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    /// Registers an observer of input/change/focus/blur/invalid notifications.
    pub fn subscribe(&mut self, listener: impl FnMut(&Notification) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Whether the platform has the primitives the state machine needs (probed once).
    pub fn is_supported(&self) -> bool {
        *self
            .supported
            .get_or_init(|| self.platform.supports_selection())
    }

    // ==================== attach / detach ====================

    pub fn attach(&mut self, element: ElementSnapshot) -> Option<InputId> {
        let options = self.defaults.clone();
        self.attach_with(element, options)
    }

    /// Replaces `element` with a fake input. Attaching an element twice returns
    /// the existing instance untouched.
    pub fn attach_with(
        &mut self,
        element: ElementSnapshot,
        options: FakeInputOptions,
    ) -> Option<InputId> {
        if !self.is_supported() {
            tracing::warn!(element = element.id.0, "platform lacks selection support, not attaching");
            return None;
        }
        if let Some(&id) = self.by_element.get(&element.id) {
            return Some(id);
        }

        let shared = self
            .shared
            .get_or_insert_with(|| SharedResources::create(self.style.as_ref(), &element));
        let font = shared
            .input_style
            .font()
            .unwrap_or_else(FontDescriptor::default);

        let element_id = element.id;
        let mut input = FakeInput::new(element, options, font);
        input.follow_caret(self.metrics.as_ref());
        let id = self.instances.insert(input);
        self.by_element.insert(element_id, id);

        tracing::debug!(element = element_id.0, instances = self.instances.len(), "fake input attached");
        Some(id)
    }

    /// Restores the original element. Shared resources go with the last instance.
    pub fn detach(&mut self, id: InputId) -> Option<ElementSnapshot> {
        let input = self.instances.remove(id)?;
        let element = input.original;
        self.by_element.remove(&element.id);
        self.pending.retain(|(pending, _)| *pending != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        if self.instances.is_empty() {
            self.shared = None;
            tracing::debug!("last fake input detached, shared resources released");
        }

        tracing::debug!(element = element.id.0, "fake input detached");
        Some(element)
    }

    pub fn instance_for(&self, element: ElementId) -> Option<InputId> {
        self.by_element.get(&element).copied()
    }

    pub fn get(&self, id: InputId) -> Option<&FakeInput> {
        self.instances.get(id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = InputId> + '_ {
        self.instances.keys()
    }

    pub fn shared_resources(&self) -> Option<&SharedResources> {
        self.shared.as_ref()
    }

    pub fn focused(&self) -> Option<InputId> {
        self.focused
    }

    /// Elements a text-input selector should match, for hosts that enabled
    /// selector integration.
    pub fn selector_matches(&self) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self
            .instances
            .values()
            .filter(|input| input.options.integrate_selectors)
            .map(|input| input.original.id)
            .collect();
        ids.sort();
        ids
    }

    // ==================== events ====================

    pub fn dispatch(&mut self, id: InputId, event: InputEvent) -> DispatchResult {
        self.pending.push_back((id, event));

        let mut result = DispatchResult::default();
        while let Some((id, event)) = self.pending.pop_front() {
            self.process(id, &event, &mut result);
        }

        for notification in &result.notifications {
            for listener in self.listeners.iter_mut() {
                listener(notification);
            }
        }
        result
    }

    pub fn focus(&mut self, id: InputId) -> DispatchResult {
        self.dispatch(id, InputEvent::Focus)
    }

    pub fn blur(&mut self, id: InputId) -> DispatchResult {
        self.dispatch(id, InputEvent::Blur)
    }

    /// A pointer-down that hit no fake input blurs the focused one.
    pub fn pointer_down_outside(&mut self) -> DispatchResult {
        match self.focused {
            Some(id) => self.blur(id),
            None => DispatchResult::default(),
        }
    }

    fn process(&mut self, id: InputId, event: &InputEvent, result: &mut DispatchResult) {
        if !self.instances.contains_key(id) {
            return;
        }

        match event {
            InputEvent::Focus => {
                if let Some(previous) = self.focused.filter(|prev| *prev != id) {
                    tracing::debug!("focus moves, blurring previous holder");
                    self.process(previous, &InputEvent::Blur, result);
                }
                self.focused = Some(id);
            }
            InputEvent::Blur => {
                if self.focused == Some(id) {
                    self.focused = None;
                }
            }
            _ => {}
        }

        let cx = EventContext {
            metrics: self.metrics.as_ref(),
            platform: self.platform.as_ref(),
        };
        let Some(input) = self.instances.get_mut(id) else {
            return;
        };
        let transition = input.handle_event(event, &cx);
        let target = input.original.id;

        result.state_changed |= transition.state_changed;
        result.prevent_default |= transition.prevent_default;
        for effect in transition.effects {
            match effect {
                Effect::Notify(kind) => result.notifications.push(Notification { target, kind }),
                Effect::RequestFocus => self.pending.push_back((id, InputEvent::Focus)),
            }
        }
    }

    // ==================== native input surface ====================

    pub fn value(&self, id: InputId) -> Option<&str> {
        self.instances.get(id).map(FakeInput::value)
    }

    pub fn set_value(&mut self, id: InputId, value: &str) -> bool {
        let metrics = self.metrics.as_ref();
        self.instances
            .get_mut(id)
            .is_some_and(|input| input.set_value(value, metrics))
    }

    pub fn selection(&self, id: InputId) -> Option<(usize, usize)> {
        self.instances.get(id).map(|input| input.caret().range())
    }

    pub fn set_selection_start(&mut self, id: InputId, offset: usize) {
        let metrics = self.metrics.as_ref();
        if let Some(input) = self.instances.get_mut(id) {
            input.set_selection_start(offset, metrics);
        }
    }

    pub fn set_selection_end(&mut self, id: InputId, offset: usize) {
        let metrics = self.metrics.as_ref();
        if let Some(input) = self.instances.get_mut(id) {
            input.set_selection_end(offset, metrics);
        }
    }

    pub fn set_selection_range(&mut self, id: InputId, start: usize, end: usize) {
        let metrics = self.metrics.as_ref();
        if let Some(input) = self.instances.get_mut(id) {
            input.set_selection_range(start, end, metrics);
        }
    }

    pub fn set_box(&mut self, id: InputId, geometry: BoxGeometry) -> bool {
        let metrics = self.metrics.as_ref();
        self.instances
            .get_mut(id)
            .is_some_and(|input| input.set_geometry(geometry, metrics))
    }

    pub fn set_font(&mut self, id: InputId, font: FontDescriptor) {
        let metrics = self.metrics.as_ref();
        if let Some(input) = self.instances.get_mut(id) {
            input.set_font(font, metrics);
        }
    }

    pub fn options(&self, id: InputId) -> Option<&FakeInputOptions> {
        self.instances.get(id).map(FakeInput::options)
    }

    /// Merges a JSON object of options into one instance.
    pub fn set_options(&mut self, id: InputId, patch: Value) -> Result<()> {
        let metrics = self.metrics.as_ref();
        let Some(input) = self.instances.get_mut(id) else {
            return Ok(());
        };
        let mut options = input.options().clone();
        options.merge(patch)?;
        input.set_options(options, metrics);
        Ok(())
    }

    pub fn set_option(&mut self, id: InputId, name: &str, value: Value) -> Result<()> {
        let mut patch = serde_json::Map::new();
        patch.insert(name.to_string(), value);
        self.set_options(id, Value::Object(patch))
    }

    // ==================== validation proxy ====================

    pub fn check_validity(&mut self, id: InputId) -> bool {
        let Some(input) = self.instances.get(id) else {
            return true;
        };
        let (valid, effect) = input.check_validity(self.validator.as_ref());
        if let Some(Effect::Notify(kind)) = effect {
            let notification = Notification {
                target: input.original.id,
                kind,
            };
            for listener in self.listeners.iter_mut() {
                listener(&notification);
            }
        }
        valid
    }

    pub fn validity(&self, id: InputId) -> Option<Validity> {
        self.instances
            .get(id)
            .map(|input| input.validity(self.validator.as_ref()))
    }

    pub fn validation_message(&self, id: InputId) -> String {
        self.validity(id).map(|v| v.message).unwrap_or_default()
    }

    pub fn will_validate(&self, id: InputId) -> bool {
        self.instances
            .get(id)
            .is_some_and(|input| input.will_validate(self.validator.as_ref()))
    }

    pub fn set_custom_validity(&mut self, id: InputId, message: &str) {
        if let Some(input) = self.instances.get_mut(id) {
            input.set_custom_validity(message);
        }
    }

    // ==================== rendering ====================

    pub fn render(&self, id: InputId) -> Option<RenderState> {
        self.instances
            .get(id)
            .map(|input| views::render_state(input, self.metrics.as_ref()))
    }

    /// Where the shared caret node goes: the focused instance's caret, if shown.
    pub fn caret(&self) -> Option<(InputId, CaretGeometry)> {
        self.shared.as_ref()?;
        let id = self.focused?;
        let input = self.instances.get(id)?;
        views::caret_geometry(input, self.metrics.as_ref()).map(|caret| (id, caret))
    }

    // ==================== named methods ====================

    /// Invokes a plugin method by name on an element. Unknown names are the
    /// only error; known methods on unattached elements do nothing.
    pub fn invoke(&mut self, element: ElementId, name: &str, arg: Option<Value>) -> Result<Value> {
        let method =
            Method::from_name(name).ok_or_else(|| FakeInputError::UnknownMethod(name.to_string()))?;
        let Some(id) = self.instance_for(element) else {
            return Ok(Value::Null);
        };

        match method {
            Method::Option => match arg {
                None => Ok(self.options(id).map(|o| o.to_json()).unwrap_or(Value::Null)),
                Some(Value::String(name)) => Ok(self
                    .options(id)
                    .and_then(|o| o.get(&name))
                    .unwrap_or(Value::Null)),
                Some(Value::Array(pair)) if pair.len() == 2 => {
                    let Value::String(name) = &pair[0] else {
                        return Err(invalid_arg(method, "option name must be a string"));
                    };
                    self.set_option(id, name, pair[1].clone())?;
                    Ok(Value::Null)
                }
                Some(patch @ Value::Object(_)) => {
                    self.set_options(id, patch)?;
                    Ok(Value::Null)
                }
                Some(_) => Err(invalid_arg(method, "expected a name, [name, value] or an object")),
            },
            Method::Destroy => {
                self.detach(id);
                Ok(Value::Null)
            }
            Method::Focus => {
                self.focus(id);
                Ok(Value::Null)
            }
            Method::Blur => {
                self.blur(id);
                Ok(Value::Null)
            }
            Method::Value => match arg {
                None => Ok(self
                    .value(id)
                    .map(|v| Value::String(v.to_string()))
                    .unwrap_or(Value::Null)),
                Some(Value::String(value)) => {
                    self.set_value(id, &value);
                    Ok(Value::Null)
                }
                Some(_) => Err(invalid_arg(method, "expected a string")),
            },
            Method::CheckValidity => Ok(Value::Bool(self.check_validity(id))),
        }
    }
}

fn invalid_arg(method: Method, message: &str) -> FakeInputError {
    FakeInputError::InvalidOption {
        name: method.name().to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/host.rs"]
mod tests;
