//! 交互状态机：事件 → 状态迁移
//!
//! Every transition runs synchronously; scroll is re-derived after any caret
//! move or text mutation.

use crate::core::{InputEvent, KeyCode, KeyEvent, PointerEvent, SelectionSnapshot};
use crate::metrics::{offset_at_x, TextMetrics};
use crate::models::{DeleteDirection, Edit};

use super::effect::{Effect, NotificationKind};
use super::services::ports::Platform;
use super::state::FakeInput;

/// What the environment needs from the instance to process an event.
pub struct EventContext<'a> {
    pub metrics: &'a dyn TextMetrics,
    pub platform: &'a dyn Platform,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    /// The browser's default action (e.g. Backspace history navigation) must not run.
    pub prevent_default: bool,
}

impl Transition {
    fn ignored() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            state_changed,
            ..Self::default()
        }
    }
}

impl FakeInput {
    pub fn handle_event(&mut self, event: &InputEvent, cx: &EventContext<'_>) -> Transition {
        match event {
            InputEvent::Focus => self.on_focus(cx),
            InputEvent::Blur => self.on_blur(),
            InputEvent::PointerDown(pointer) => self.on_pointer_down(*pointer, cx),
            InputEvent::PointerUp(selection) => self.on_pointer_up(*selection, cx),
            InputEvent::KeyDown(key) => self.on_key_down(*key, cx),
            InputEvent::KeyPress(key) => self.on_key_press(*key, cx),
        }
    }

    fn on_focus(&mut self, cx: &EventContext<'_>) -> Transition {
        if self.focused {
            return Transition::ignored();
        }
        self.focused = true;
        self.has_changed = false;
        self.follow_caret(cx.metrics);
        Transition {
            effects: vec![Effect::Notify(NotificationKind::Focus)],
            state_changed: true,
            prevent_default: false,
        }
    }

    fn on_blur(&mut self) -> Transition {
        if !self.focused {
            return Transition::ignored();
        }
        self.focused = false;

        let mut effects = Vec::new();
        if self.has_changed {
            self.has_changed = false;
            if self.options.fire_change_events {
                effects.push(Effect::Notify(NotificationKind::Change));
            }
        }
        effects.push(Effect::Notify(NotificationKind::Blur));

        Transition {
            effects,
            state_changed: true,
            prevent_default: false,
        }
    }

    fn on_pointer_down(&mut self, pointer: PointerEvent, cx: &EventContext<'_>) -> Transition {
        let offset = self.hit_test(pointer, cx);
        let before = self.caret;
        self.caret.move_to(offset, self.buffer.len());
        let scrolled = self.follow_caret(cx.metrics);

        let mut transition = Transition::changed(before != self.caret || scrolled);
        if !self.focused {
            transition.effects.push(Effect::RequestFocus);
        }
        transition
    }

    fn on_pointer_up(
        &mut self,
        selection: Option<SelectionSnapshot>,
        cx: &EventContext<'_>,
    ) -> Transition {
        let Some(selection) = selection else {
            return Transition::ignored();
        };
        if !self.focused || !selection.anchored || selection.is_collapsed() {
            return Transition::ignored();
        }

        let (start, end) = selection.range();
        let before = self.caret;
        self.caret.select(start, end, self.buffer.len());
        self.follow_caret(cx.metrics);
        Transition::changed(before != self.caret)
    }

    fn on_key_down(&mut self, key: KeyEvent, cx: &EventContext<'_>) -> Transition {
        if !self.focused {
            return Transition::ignored();
        }

        match key.code {
            KeyCode::Backspace => self.delete(DeleteDirection::Backward, cx),
            KeyCode::Delete => self.delete(DeleteDirection::Forward, cx),
            KeyCode::Left => {
                self.caret.move_left(self.buffer.len());
                self.after_caret_move(cx)
            }
            KeyCode::Right => {
                self.caret.move_right(self.buffer.len());
                self.after_caret_move(cx)
            }
            _ => Transition::ignored(),
        }
    }

    fn on_key_press(&mut self, key: KeyEvent, cx: &EventContext<'_>) -> Transition {
        if !self.focused {
            return Transition::ignored();
        }
        let Some(ch) = key.printable() else {
            return Transition::ignored();
        };

        let mut buf = [0u8; 4];
        let inserted = ch.encode_utf8(&mut buf);

        let (start, end) = self.caret.range();
        let mut changed = false;
        let mut offset = start;
        if start < end {
            let edit = self.buffer.delete_range(start, end, DeleteDirection::Backward);
            changed |= edit.changed;
            offset = edit.caret;
        }
        let edit = self.buffer.insert_at(offset, inserted);
        changed |= edit.changed;

        let edit = Edit {
            caret: edit.caret,
            changed,
        };
        let mut transition = self.apply_edit(edit, cx);
        transition.prevent_default = true;
        transition
    }

    fn delete(&mut self, direction: DeleteDirection, cx: &EventContext<'_>) -> Transition {
        let (start, end) = self.caret.range();
        let edit = self.buffer.delete_range(start, end, direction);
        let mut transition = self.apply_edit(edit, cx);
        transition.prevent_default = true;
        transition
    }

    fn apply_edit(&mut self, edit: Edit, cx: &EventContext<'_>) -> Transition {
        let before = self.caret;
        self.caret.move_to(edit.caret, self.buffer.len());
        let scrolled = self.follow_caret(cx.metrics);

        let mut transition = Transition::changed(edit.changed || before != self.caret || scrolled);
        if edit.changed {
            self.has_changed = true;
            if self.options.fire_input_events {
                transition
                    .effects
                    .push(Effect::Notify(NotificationKind::Input));
            }
        }
        transition
    }

    fn after_caret_move(&mut self, cx: &EventContext<'_>) -> Transition {
        self.follow_caret(cx.metrics);
        // Arrow keys always repaint: the caret may have been hidden by a selection.
        Transition::changed(true)
    }

    /// Grapheme offset under the pointer, preferring the platform primitive.
    fn hit_test(&self, pointer: PointerEvent, cx: &EventContext<'_>) -> usize {
        let text = self.buffer.text();
        let offset = cx
            .platform
            .caret_from_point(self.original.id, text, pointer.x, pointer.y)
            .unwrap_or_else(|| {
                let text_x = pointer.x - self.scroll.offset();
                offset_at_x(text, text_x, cx.metrics, &self.font)
            });
        offset.min(self.buffer.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/interaction.rs"]
mod tests;
