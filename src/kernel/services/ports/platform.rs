use super::element::ElementId;

/// Rendering-engine primitives the state machine depends on.
pub trait Platform {
    /// Range/Selection support. Without it nothing is attached.
    fn supports_selection(&self) -> bool;

    /// Caret-from-point: grapheme offset under `(x, y)` relative to the box's
    /// inner edge, or `None` to fall back to width accumulation.
    fn caret_from_point(&self, _element: ElementId, _text: &str, _x: f32, _y: f32) -> Option<usize> {
        None
    }
}
