use crate::kernel::services::ports::Platform;

/// Platform without a render tree: selection is always available and hit
/// testing falls back to width accumulation.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessPlatform {
    selection: bool,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self { selection: true }
    }

    /// A platform lacking Range/Selection, on which attach must no-op.
    pub fn without_selection() -> Self {
        Self { selection: false }
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for HeadlessPlatform {
    fn supports_selection(&self) -> bool {
        self.selection
    }
}
