//! Resources shared by every instance of one host: the single caret node and
//! the impersonated input style. Created by the first attach, released after
//! the last detach.

use super::services::ports::{CssDeclaration, ElementSnapshot, StyleSource};

pub const DEFAULT_CARET_CHAR: char = '|';

/// Overrides layered on top of the cloned input style.
const FAKE_INPUT_STYLE: [(&str, &str); 2] = [("overflow", "hidden"), ("cursor", "text")];

#[derive(Debug, Clone, PartialEq)]
pub struct SharedCaret {
    pub glyph: char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SharedResources {
    pub caret: SharedCaret,
    pub input_style: CssDeclaration,
}

impl SharedResources {
    pub fn create(style: &dyn StyleSource, first: &ElementSnapshot) -> Self {
        let mut input_style = style.clone_computed_style(first);
        for (property, value) in FAKE_INPUT_STYLE {
            input_style.set(property, value);
        }
        tracing::debug!(properties = input_style.len(), "shared fake input resources created");
        Self {
            caret: SharedCaret {
                glyph: DEFAULT_CARET_CHAR,
            },
            input_style,
        }
    }
}
