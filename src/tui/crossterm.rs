use crate::core::{InputEvent, KeyCode, KeyEvent, KeyModifiers, PointerEvent};
use ratatui::layout::Rect;

/// A terminal keystroke becomes `keydown`, followed by `keypress` when it would
/// insert a character. Key releases produce nothing.
pub fn into_input_events(event: crossterm::event::KeyEvent) -> Vec<InputEvent> {
    if event.kind == crossterm::event::KeyEventKind::Release {
        return Vec::new();
    }

    let key = into_key_event(event);
    let mut events = vec![InputEvent::KeyDown(key)];
    if key.printable().is_some() {
        events.push(InputEvent::KeyPress(key));
    }
    events
}

pub fn into_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    KeyEvent { code, modifiers }
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if mods.contains(crossterm::event::KeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(crossterm::event::KeyModifiers::SUPER) {
        out |= KeyModifiers::SUPER;
    }
    out
}

fn into_key_code(code: crossterm::event::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        // Ctrl+Space arrives as NUL on most terminals.
        crossterm::event::KeyCode::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down { column: u16, row: u16 },
    Up { column: u16, row: u16 },
}

/// Left-button presses and releases; everything else (moves, drags, wheel) is dropped.
pub fn into_pointer_action(event: crossterm::event::MouseEvent) -> Option<PointerAction> {
    use crossterm::event::{MouseButton, MouseEventKind};

    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Down { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerAction::Up { column, row }),
        _ => None,
    }
}

/// Pointer position relative to `area`'s top-left cell, or `None` outside it.
pub fn pointer_in(area: Rect, column: u16, row: u16) -> Option<PointerEvent> {
    let inside = column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height);
    inside.then(|| PointerEvent::new(f32::from(column - area.x), f32::from(row - area.y)))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
