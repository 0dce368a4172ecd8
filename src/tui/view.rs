//! ratatui rendering of one fake input.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::views::RenderState;

/// Area the text run occupies inside the bordered box.
pub fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Columns of `text` visible through a `width`-cell window scrolled by `translate_x`.
///
/// A wide cluster straddling either window edge is dropped rather than split.
pub fn visible_text(text: &str, translate_x: f32, width: u16) -> String {
    let skip = (-translate_x).max(0.0).round() as usize;
    let end = skip + usize::from(width);

    let mut out = String::new();
    let mut col = 0usize;
    for g in text.graphemes(true) {
        let w = g.width();
        if col >= skip && col + w <= end {
            out.push_str(g);
        }
        col += w;
        if col >= end {
            break;
        }
    }
    out
}

/// Terminal cell for the caret, if the instance shows one.
pub fn cursor_position(state: &RenderState, inner: Rect) -> Option<Position> {
    let caret = state.caret?;
    let max_x = inner.width.saturating_sub(1);
    let x = (caret.x.round().max(0.0) as u16).min(max_x);
    Some(Position::new(inner.x + x, inner.y))
}

pub struct FakeInputView<'a> {
    state: &'a RenderState,
    title: &'a str,
    focused: bool,
    invalid: bool,
}

impl<'a> FakeInputView<'a> {
    pub fn new(state: &'a RenderState, title: &'a str) -> Self {
        Self {
            state,
            title,
            focused: false,
            invalid: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl Widget for FakeInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = match (self.focused, self.invalid) {
            (_, true) => Color::Red,
            (true, false) => Color::Cyan,
            (false, false) => Color::DarkGray,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text_style = if self.state.is_placeholder {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
        };
        let visible = visible_text(&self.state.text, self.state.translate_x, inner.width);
        buf.set_stringn(inner.x, inner.y, &visible, usize::from(inner.width), text_style);

        if let Some(selection) = self.state.selection {
            let left = selection.left.round() as u16;
            let width = (selection.width.round() as u16).min(inner.width.saturating_sub(left));
            let highlight = Rect::new(inner.x + left, inner.y, width, 1);
            buf.set_style(highlight, Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/view.rs"]
mod tests;
