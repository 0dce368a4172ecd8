use super::*;
use crate::core::{KeyModifiers, SelectionSnapshot};
use crate::kernel::services::adapters::HeadlessPlatform;
use crate::kernel::services::ports::{ElementId, ElementSnapshot, FakeInputOptions};
use crate::kernel::state::{BoxGeometry, InteractionState};
use crate::metrics::{FontDescriptor, MonospaceMetrics};

struct Env {
    metrics: MonospaceMetrics,
    platform: HeadlessPlatform,
}

impl Env {
    fn new() -> Self {
        Self {
            metrics: MonospaceMetrics::new(10.0),
            platform: HeadlessPlatform::new(),
        }
    }

    fn cx(&self) -> EventContext<'_> {
        EventContext {
            metrics: &self.metrics,
            platform: &self.platform,
        }
    }
}

/// Reports a fixed caret offset for every point.
struct FixedHit(usize);

impl Platform for FixedHit {
    fn supports_selection(&self) -> bool {
        true
    }

    fn caret_from_point(&self, _: ElementId, _: &str, _: f32, _: f32) -> Option<usize> {
        Some(self.0)
    }
}

fn new_input(env: &Env, value: &str, options: FakeInputOptions) -> FakeInput {
    let element = ElementSnapshot::text_input(1).with_attr("value", value);
    let mut input = FakeInput::new(element, options, FontDescriptor::default());
    input.set_geometry(BoxGeometry::new(100.0, 20.0), &env.metrics);
    input
}

fn focused(env: &Env, value: &str) -> FakeInput {
    let mut input = new_input(env, value, FakeInputOptions::default());
    input.handle_event(&InputEvent::Focus, &env.cx());
    input
}

fn key_down(code: KeyCode) -> InputEvent {
    InputEvent::KeyDown(KeyEvent::simple(code))
}

fn type_char(ch: char) -> InputEvent {
    InputEvent::KeyPress(KeyEvent::char(ch))
}

fn notifications(t: &Transition) -> Vec<NotificationKind> {
    t.effects
        .iter()
        .filter_map(|e| match e {
            Effect::Notify(kind) => Some(*kind),
            Effect::RequestFocus => None,
        })
        .collect()
}

#[test]
fn focus_notifies_once_and_resets_change_tracking() {
    let env = Env::new();
    let mut input = new_input(&env, "", FakeInputOptions::default());

    let t = input.handle_event(&InputEvent::Focus, &env.cx());
    assert_eq!(notifications(&t), vec![NotificationKind::Focus]);
    assert_eq!(input.state(), InteractionState::Focused { has_selection: false });

    let again = input.handle_event(&InputEvent::Focus, &env.cx());
    assert!(again.effects.is_empty());
    assert!(!again.state_changed);
}

#[test]
fn typing_inserts_at_caret_and_fires_input() {
    let env = Env::new();
    let mut input = focused(&env, "");

    let t = input.handle_event(&type_char('a'), &env.cx());
    assert_eq!(input.value(), "a");
    assert_eq!(input.selection_end(), 1);
    assert_eq!(notifications(&t), vec![NotificationKind::Input]);
    assert!(t.prevent_default);
    assert!(input.has_changed());
}

#[test]
fn keys_are_ignored_while_blurred() {
    let env = Env::new();
    let mut input = new_input(&env, "abc", FakeInputOptions::default());

    let t = input.handle_event(&type_char('x'), &env.cx());
    assert_eq!(t, Transition::default());
    let t = input.handle_event(&key_down(KeyCode::Backspace), &env.cx());
    assert_eq!(t, Transition::default());
    assert_eq!(input.value(), "abc");
}

#[test]
fn enter_and_command_chords_insert_nothing() {
    let env = Env::new();
    let mut input = focused(&env, "ab");

    input.handle_event(&InputEvent::KeyPress(KeyEvent::simple(KeyCode::Enter)), &env.cx());
    input.handle_event(
        &InputEvent::KeyPress(KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL)),
        &env.cx(),
    );
    assert_eq!(input.value(), "ab");
}

#[test]
fn typing_replaces_selection() {
    let env = Env::new();
    let mut input = focused(&env, "Hello");
    input.set_selection_range(1, 4, &env.metrics);

    input.handle_event(&type_char('X'), &env.cx());
    assert_eq!(input.value(), "HXo");
    assert_eq!((input.selection_start(), input.selection_end()), (2, 2));
}

#[test]
fn backspace_deletes_before_caret() {
    let env = Env::new();
    let mut input = focused(&env, "abc");

    let t = input.handle_event(&key_down(KeyCode::Backspace), &env.cx());
    assert_eq!(input.value(), "ab");
    assert_eq!(input.selection_end(), 2);
    assert!(t.prevent_default);
    assert_eq!(notifications(&t), vec![NotificationKind::Input]);
}

#[test]
fn backspace_at_start_is_a_noop_but_still_prevents_default() {
    let env = Env::new();
    let mut input = focused(&env, "abc");
    input.set_selection_range(0, 0, &env.metrics);

    let t = input.handle_event(&key_down(KeyCode::Backspace), &env.cx());
    assert_eq!(input.value(), "abc");
    assert!(t.prevent_default);
    assert!(notifications(&t).is_empty());
    assert!(!input.has_changed());
}

#[test]
fn delete_removes_after_caret() {
    let env = Env::new();
    let mut input = focused(&env, "abc");
    input.set_selection_range(1, 1, &env.metrics);

    input.handle_event(&key_down(KeyCode::Delete), &env.cx());
    assert_eq!(input.value(), "ac");
    assert_eq!(input.selection_end(), 1);

    input.set_selection_range(2, 2, &env.metrics);
    let t = input.handle_event(&key_down(KeyCode::Delete), &env.cx());
    assert_eq!(input.value(), "ac");
    assert!(t.prevent_default);
}

#[test]
fn deleting_a_selection_removes_the_range() {
    let env = Env::new();
    let mut input = focused(&env, "Hello");
    input.set_selection_range(1, 4, &env.metrics);

    input.handle_event(&key_down(KeyCode::Backspace), &env.cx());
    assert_eq!(input.value(), "Ho");
    assert_eq!((input.selection_start(), input.selection_end()), (1, 1));
}

#[test]
fn arrows_move_and_collapse() {
    let env = Env::new();
    let mut input = focused(&env, "abc");

    input.handle_event(&key_down(KeyCode::Left), &env.cx());
    assert_eq!(input.selection_end(), 2);
    input.handle_event(&key_down(KeyCode::Right), &env.cx());
    input.handle_event(&key_down(KeyCode::Right), &env.cx());
    assert_eq!(input.selection_end(), 3);

    input.set_selection_range(0, 2, &env.metrics);
    input.handle_event(&key_down(KeyCode::Left), &env.cx());
    assert_eq!((input.selection_start(), input.selection_end()), (1, 1));

    input.set_selection_range(0, 0, &env.metrics);
    input.handle_event(&key_down(KeyCode::Left), &env.cx());
    assert_eq!(input.selection_end(), 0);
}

#[test]
fn arrow_keys_do_not_fire_input() {
    let env = Env::new();
    let mut input = focused(&env, "abc");
    let t = input.handle_event(&key_down(KeyCode::Left), &env.cx());
    assert!(notifications(&t).is_empty());
    assert!(!input.has_changed());
}

#[test]
fn max_length_blocks_insertion() {
    let env = Env::new();
    let options = FakeInputOptions {
        max_length: Some(3),
        ..FakeInputOptions::default()
    };
    let mut input = new_input(&env, "", options);
    input.handle_event(&InputEvent::Focus, &env.cx());

    for ch in "abcd".chars() {
        input.handle_event(&type_char(ch), &env.cx());
    }
    assert_eq!(input.value(), "abc");

    let t = input.handle_event(&type_char('e'), &env.cx());
    assert!(notifications(&t).is_empty());
    assert!(t.prevent_default);
}

#[test]
fn blur_fires_change_only_after_edits() {
    let env = Env::new();
    let mut input = focused(&env, "ab");
    let t = input.handle_event(&InputEvent::Blur, &env.cx());
    assert_eq!(notifications(&t), vec![NotificationKind::Blur]);

    input.handle_event(&InputEvent::Focus, &env.cx());
    input.handle_event(&type_char('c'), &env.cx());
    let t = input.handle_event(&InputEvent::Blur, &env.cx());
    assert_eq!(
        notifications(&t),
        vec![NotificationKind::Change, NotificationKind::Blur]
    );
    assert!(!input.has_changed());
    assert_eq!(input.state(), InteractionState::Blurred);
}

#[test]
fn disabled_event_options_silence_input_and_change() {
    let env = Env::new();
    let options = FakeInputOptions {
        fire_input_events: false,
        fire_change_events: false,
        ..FakeInputOptions::default()
    };
    let mut input = new_input(&env, "", options);
    input.handle_event(&InputEvent::Focus, &env.cx());

    let t = input.handle_event(&type_char('a'), &env.cx());
    assert!(notifications(&t).is_empty());
    assert_eq!(input.value(), "a");

    let t = input.handle_event(&InputEvent::Blur, &env.cx());
    assert_eq!(notifications(&t), vec![NotificationKind::Blur]);
}

#[test]
fn pointer_down_on_blurred_instance_requests_focus() {
    let env = Env::new();
    let mut input = new_input(&env, "Hello", FakeInputOptions::default());

    let t = input.handle_event(&InputEvent::PointerDown(PointerEvent::new(30.0, 5.0)), &env.cx());
    assert_eq!(input.selection_end(), 3);
    assert!(t.effects.contains(&Effect::RequestFocus));
    assert!(!input.is_focused());
}

#[test]
fn pointer_down_accounts_for_scroll() {
    let env = Env::new();
    let mut input = focused(&env, "Hello World");
    assert_eq!(input.scroll_offset(), -13.0);

    // x=7 on screen is x=20 in the unscrolled run.
    let t = input.handle_event(&InputEvent::PointerDown(PointerEvent::new(7.0, 5.0)), &env.cx());
    assert_eq!(input.selection_end(), 2);
    assert!(!t.effects.contains(&Effect::RequestFocus));
}

#[test]
fn pointer_down_prefers_platform_hit_test() {
    let env = Env::new();
    let mut input = focused(&env, "Hello");
    let platform = FixedHit(1);
    let cx = EventContext {
        metrics: &env.metrics,
        platform: &platform,
    };
    input.handle_event(&InputEvent::PointerDown(PointerEvent::new(45.0, 5.0)), &cx);
    assert_eq!(input.selection_end(), 1);
}

#[test]
fn pointer_up_adopts_selection_within_the_instance() {
    let env = Env::new();
    let mut input = focused(&env, "Hello");

    let t = input.handle_event(
        &InputEvent::PointerUp(Some(SelectionSnapshot::within(4, 1))),
        &env.cx(),
    );
    assert!(t.state_changed);
    assert_eq!((input.selection_start(), input.selection_end()), (1, 4));
    assert_eq!(input.state(), InteractionState::Focused { has_selection: true });
    assert!(!input.caret_visible());
}

#[test]
fn pointer_up_ignores_foreign_or_collapsed_selections() {
    let env = Env::new();
    let mut input = focused(&env, "Hello");

    let t = input.handle_event(
        &InputEvent::PointerUp(Some(SelectionSnapshot::elsewhere())),
        &env.cx(),
    );
    assert!(!t.state_changed);
    let t = input.handle_event(
        &InputEvent::PointerUp(Some(SelectionSnapshot::within(2, 2))),
        &env.cx(),
    );
    assert!(!t.state_changed);
    assert_eq!(input.selection_end(), 5);
}

#[test]
fn typing_past_the_box_keeps_caret_visible() {
    let env = Env::new();
    let mut input = focused(&env, "");
    for ch in "The quick brown fox".chars() {
        input.handle_event(&type_char(ch), &env.cx());
        let x = input.caret_pixel_offset(&env.metrics);
        assert!(x >= 0.0 && x <= 97.0, "caret at {x}");
        assert!(input.scroll_offset() <= 0.0);
    }
    assert_eq!(input.scroll_offset(), -93.0);
}

#[test]
fn moving_left_past_the_scrolled_edge_reveals_text() {
    let env = Env::new();
    let mut input = focused(&env, "Hello World");
    for _ in 0..11 {
        input.handle_event(&key_down(KeyCode::Left), &env.cx());
    }
    assert_eq!(input.selection_end(), 0);
    assert_eq!(input.scroll_offset(), 0.0);
    assert_eq!(input.caret_pixel_offset(&env.metrics), 0.0);
}
