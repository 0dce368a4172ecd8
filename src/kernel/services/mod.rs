//! Services layer (ports + adapters).
//!
//! - `ports`: contracts for the collaborators around the core (platform, style,
//!   validation, options).
//! - `adapters`: default headless implementations.

pub mod adapters;
pub mod ports;
