use super::*;
use crate::views::{CaretGeometry, SelectionHighlight};

fn state(text: &str, translate_x: f32) -> RenderState {
    RenderState {
        text: text.to_string(),
        is_placeholder: false,
        translate_x,
        caret: None,
        selection: None,
        box_width: 10.0,
        box_height: 1.0,
    }
}

fn row(buf: &Buffer, area: Rect, y: u16) -> String {
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn visible_text_applies_scroll() {
    assert_eq!(visible_text("Hello World", 0.0, 5), "Hello");
    assert_eq!(visible_text("Hello World", -6.0, 5), "World");
    assert_eq!(visible_text("Hello", -2.0, 10), "llo");
}

#[test]
fn visible_text_drops_clipped_wide_clusters() {
    // Each CJK character is two cells wide.
    assert_eq!(visible_text("你好世界", -1.0, 4), "好");
    assert_eq!(visible_text("你好世界", 0.0, 3), "你");
}

#[test]
fn cursor_position_is_clamped_to_inner_area() {
    let inner = Rect::new(1, 1, 8, 1);
    let mut s = state("abc", 0.0);
    assert_eq!(cursor_position(&s, inner), None);

    s.caret = Some(CaretGeometry { x: 3.0, height: 1.0 });
    assert_eq!(cursor_position(&s, inner), Some(Position::new(4, 1)));

    s.caret = Some(CaretGeometry { x: 40.0, height: 1.0 });
    assert_eq!(cursor_position(&s, inner), Some(Position::new(8, 1)));
}

#[test]
fn widget_renders_scrolled_text_inside_border() {
    let area = Rect::new(0, 0, 7, 3);
    let mut buf = Buffer::empty(area);
    let s = state("Hello World", -6.0);
    FakeInputView::new(&s, "name").render(area, &mut buf);

    let inner = inner_area(area);
    assert_eq!(row(&buf, inner, inner.y), "World");
}

#[test]
fn widget_reverses_selected_cells() {
    let area = Rect::new(0, 0, 12, 3);
    let mut buf = Buffer::empty(area);
    let mut s = state("Hello", 0.0);
    s.selection = Some(SelectionHighlight {
        left: 1.0,
        width: 2.0,
    });
    FakeInputView::new(&s, "").focused(true).render(area, &mut buf);

    let inner = inner_area(area);
    let reversed = |x: u16| buf[(inner.x + x, inner.y)].modifier.contains(Modifier::REVERSED);
    assert!(!reversed(0));
    assert!(reversed(1));
    assert!(reversed(2));
    assert!(!reversed(3));
}
