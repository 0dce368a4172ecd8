use super::*;
use crate::core::{InputEvent, SelectionSnapshot};
use crate::kernel::services::adapters::HeadlessPlatform;
use crate::kernel::services::ports::{ElementSnapshot, FakeInputOptions};
use crate::kernel::{BoxGeometry, EventContext};
use crate::metrics::{FontDescriptor, MonospaceMetrics};

fn metrics() -> MonospaceMetrics {
    MonospaceMetrics::new(10.0)
}

fn input(element: ElementSnapshot, options: FakeInputOptions) -> FakeInput {
    let mut input = FakeInput::new(element, options, FontDescriptor::default());
    input.set_geometry(BoxGeometry::new(100.0, 18.0), &metrics());
    input
}

fn focus(input: &mut FakeInput) {
    let m = metrics();
    let platform = HeadlessPlatform::new();
    let cx = EventContext {
        metrics: &m,
        platform: &platform,
    };
    input.handle_event(&InputEvent::Focus, &cx);
}

#[test]
fn placeholder_shows_only_when_empty_and_blurred() {
    let element = ElementSnapshot::text_input(1).with_attr("placeholder", "Search");
    let mut input = input(element, FakeInputOptions::default());

    let state = render_state(&input, &metrics());
    assert!(state.is_placeholder);
    assert_eq!(state.text, "Search");
    assert_eq!(state.caret, None);

    focus(&mut input);
    let state = render_state(&input, &metrics());
    assert!(!state.is_placeholder);
    assert_eq!(state.text, "");
    assert_eq!(state.caret, Some(CaretGeometry { x: 0.0, height: 18.0 }));
}

#[test]
fn render_state_carries_scroll_translation() {
    let element = ElementSnapshot::text_input(1).with_attr("value", "Hello World");
    let input = input(element, FakeInputOptions::default());
    let state = render_state(&input, &metrics());
    assert_eq!(state.translate_x, -13.0);
    assert_eq!(state.box_width, 100.0);
}

#[test]
fn caret_adjustment_shifts_and_is_clamped() {
    let options = FakeInputOptions {
        caret_adjustment: 2.0,
        ..FakeInputOptions::default()
    };
    let mut short = input(
        ElementSnapshot::text_input(1).with_attr("value", "ab"),
        options.clone(),
    );
    focus(&mut short);
    assert_eq!(caret_geometry(&short, &metrics()).map(|c| c.x), Some(22.0));

    let mut long = input(
        ElementSnapshot::text_input(2).with_attr("value", "Hello World"),
        options,
    );
    focus(&mut long);
    // 97 + 2 would pass the right margin.
    assert_eq!(caret_geometry(&long, &metrics()).map(|c| c.x), Some(97.0));
}

#[test]
fn negative_caret_adjustment_never_leaves_the_box() {
    let options = FakeInputOptions {
        caret_adjustment: -5.0,
        ..FakeInputOptions::default()
    };
    let mut input = input(ElementSnapshot::text_input(1), options);
    focus(&mut input);
    assert_eq!(caret_geometry(&input, &metrics()).map(|c| c.x), Some(0.0));
}

#[test]
fn selection_hides_caret_and_is_highlighted() {
    let element = ElementSnapshot::text_input(1).with_attr("value", "Hello");
    let mut input = input(element, FakeInputOptions::default());
    focus(&mut input);

    let m = metrics();
    let platform = HeadlessPlatform::new();
    let cx = EventContext {
        metrics: &m,
        platform: &platform,
    };
    input.handle_event(&InputEvent::PointerUp(Some(SelectionSnapshot::within(1, 3))), &cx);

    let state = render_state(&input, &m);
    assert_eq!(state.caret, None);
    assert_eq!(
        state.selection,
        Some(SelectionHighlight {
            left: 10.0,
            width: 20.0
        })
    );
}

#[test]
fn selection_highlight_is_clipped_to_the_box() {
    let element = ElementSnapshot::text_input(1).with_attr("value", "Hello World");
    let mut input = input(element, FakeInputOptions::default());
    focus(&mut input);
    input.set_selection_range(0, 11, &metrics());

    let selection = render_state(&input, &metrics()).selection.unwrap();
    assert_eq!(selection.left, 0.0);
    assert_eq!(selection.width, 97.0);
}
