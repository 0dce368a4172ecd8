use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

/// Terminal modes a fake input session needs: raw keys, mouse reports and a bar caret.
pub trait TerminalModes: Send + Sync + 'static {
    fn enable(&self) -> io::Result<()>;
    fn disable(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermModes;

impl TerminalModes for CrosstermModes {
    fn enable(&self) -> io::Result<()> {
        enable_raw_mode()?;
        let screen = execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            SetCursorStyle::BlinkingBar
        );
        if screen.is_err() {
            let _ = disable_raw_mode();
        }
        screen
    }

    fn disable(&self) -> io::Result<()> {
        let screen = execute!(
            io::stdout(),
            SetCursorStyle::DefaultUserShape,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        disable_raw_mode().and(screen)
    }
}

/// Holds the terminal in session modes until dropped.
pub struct TerminalGuard {
    modes: Arc<dyn TerminalModes>,
    active: Arc<AtomicBool>,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_modes(Arc::new(CrosstermModes))
    }

    pub fn with_modes(modes: Arc<dyn TerminalModes>) -> io::Result<Self> {
        modes.enable()?;
        Ok(Self {
            modes,
            active: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Leaves session modes; later calls (drop, panic hook) do nothing.
    pub fn restore(&self) -> io::Result<()> {
        disable_once(self.modes.as_ref(), &self.active)
    }

    /// A panic message printed over the alternate screen is lost, so restore first.
    pub fn restore_on_panic(&self) {
        let modes = Arc::clone(&self.modes);
        let active = Arc::clone(&self.active);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_once(modes.as_ref(), &active);
            previous(info);
        }));
    }
}

fn disable_once(modes: &dyn TerminalModes, active: &AtomicBool) -> io::Result<()> {
    if active.swap(false, Ordering::SeqCst) {
        modes.disable()
    } else {
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
