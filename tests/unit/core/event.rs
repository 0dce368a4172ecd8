use super::*;

#[test]
fn test_key_creation() {
    let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_modifier_flags() {
    let mut mods = KeyModifiers::NONE;
    assert!(mods.is_empty());
    mods |= KeyModifiers::SHIFT;
    assert!(!mods.is_command());
    mods |= KeyModifiers::ALT;
    assert!(mods.contains(KeyModifiers::SHIFT | KeyModifiers::ALT));
    assert!(mods.is_command());
}

#[test]
fn test_printable_keys() {
    assert_eq!(KeyEvent::char('a').printable(), Some('a'));
    assert_eq!(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT).printable(), Some('A'));
    assert_eq!(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL).printable(), None);
    assert_eq!(KeyEvent::simple(KeyCode::Enter).printable(), None);
    assert_eq!(KeyEvent::char('\r').printable(), None);
}

#[test]
fn test_selection_snapshot_range() {
    let sel = SelectionSnapshot::within(4, 1);
    assert_eq!(sel.range(), (1, 4));
    assert!(!sel.is_collapsed());
    assert!(SelectionSnapshot::within(2, 2).is_collapsed());
    assert!(!SelectionSnapshot::elsewhere().anchored);
}

#[test]
fn test_event_names() {
    assert_eq!(InputEvent::Focus.name(), "focus");
    assert_eq!(InputEvent::KeyPress(KeyEvent::char('x')).name(), "keypress");
    assert!(InputEvent::PointerUp(None).is_pointer());
    assert!(InputEvent::KeyDown(KeyEvent::simple(KeyCode::Left)).is_key());
    assert_eq!(
        InputEvent::KeyDown(KeyEvent::simple(KeyCode::Left)).as_key(),
        Some(&KeyEvent::simple(KeyCode::Left))
    );
}
