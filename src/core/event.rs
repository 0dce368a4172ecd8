//! Synthetic event records fed to the interaction state machine.
//!
//! These mirror the DOM events a real text box receives, reduced to the fields
//! the state machine reads. Frontends convert their native events into these.

use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);
    pub const SUPER: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Modifiers that turn a printable key into a shortcut.
    pub fn is_command(self) -> bool {
        self.contains(Self::CONTROL) || self.contains(Self::ALT) || self.contains(Self::SUPER)
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn char(ch: char) -> Self {
        Self::simple(KeyCode::Char(ch))
    }

    /// The character a keypress would insert, if any.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(ch) if !self.modifiers.is_command() && !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

/// Pointer position relative to the box's left/top inner edge, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What the platform selection object reports on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    /// Whether the selection is anchored in this instance's text node.
    pub anchored: bool,
    pub anchor_offset: usize,
    pub focus_offset: usize,
}

impl SelectionSnapshot {
    pub fn within(anchor_offset: usize, focus_offset: usize) -> Self {
        Self {
            anchored: true,
            anchor_offset,
            focus_offset,
        }
    }

    pub fn elsewhere() -> Self {
        Self {
            anchored: false,
            anchor_offset: 0,
            focus_offset: 0,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor_offset == self.focus_offset
    }

    pub fn range(&self) -> (usize, usize) {
        if self.anchor_offset <= self.focus_offset {
            (self.anchor_offset, self.focus_offset)
        } else {
            (self.focus_offset, self.anchor_offset)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Focus,
    Blur,
    PointerDown(PointerEvent),
    PointerUp(Option<SelectionSnapshot>),
    KeyDown(KeyEvent),
    KeyPress(KeyEvent),
}

impl InputEvent {
    pub fn is_key(&self) -> bool {
        matches!(self, InputEvent::KeyDown(_) | InputEvent::KeyPress(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, InputEvent::PointerDown(_) | InputEvent::PointerUp(_))
    }

    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            InputEvent::KeyDown(e) | InputEvent::KeyPress(e) => Some(e),
            _ => None,
        }
    }

    /// Event name as the DOM would spell it.
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::Focus => "focus",
            InputEvent::Blur => "blur",
            InputEvent::PointerDown(_) => "mousedown",
            InputEvent::PointerUp(_) => "mouseup",
            InputEvent::KeyDown(_) => "keydown",
            InputEvent::KeyPress(_) => "keypress",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
