//! Service adapters: default implementations of the ports.

pub mod platform;
pub mod settings;
pub mod style;
pub mod validation;

pub use platform::HeadlessPlatform;
pub use settings::{get_options_path, load_options, write_options, OPTIONS_ENV};
pub use style::StaticStyleSource;
pub use validation::ConstraintValidator;
