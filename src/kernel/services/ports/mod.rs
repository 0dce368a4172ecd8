//! Service ports: traits + data contracts for the collaborators around the core.

pub mod config;
pub mod element;
pub mod platform;
pub mod style;
pub mod validation;

pub use config::FakeInputOptions;
pub use element::{ElementId, ElementSnapshot};
pub use platform::Platform;
pub use style::{CssDeclaration, StyleSource};
pub use validation::{ValidationBackend, Validity, ValidityState};
