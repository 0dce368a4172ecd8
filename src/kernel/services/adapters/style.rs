use crate::kernel::services::ports::{CssDeclaration, ElementSnapshot, StyleSource};

/// Returns the same declaration for every element; hosts without a layout
/// engine (terminals, tests) use this.
#[derive(Debug, Clone, Default)]
pub struct StaticStyleSource {
    declaration: CssDeclaration,
}

impl StaticStyleSource {
    pub fn new(declaration: CssDeclaration) -> Self {
        Self { declaration }
    }

    pub fn from_css_text(css_text: &str) -> Self {
        Self::new(CssDeclaration::parse(css_text))
    }
}

impl StyleSource for StaticStyleSource {
    fn clone_computed_style(&self, _element: &ElementSnapshot) -> CssDeclaration {
        self.declaration.clone()
    }
}
