//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the core stays free of terminal crates.
//! A terminal cell counts as one pixel here: pair it with `MonospaceMetrics::cells()`.

pub mod crossterm;
pub mod terminal_guard;
pub mod view;
