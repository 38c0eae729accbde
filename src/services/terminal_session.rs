//! RAII ownership of the console mode.
//!
//! [`TerminalSession::enter`] switches the terminal into raw mode and clears
//! it. Dropping the session shows the cursor and restores cooked mode on every
//! exit path, including errors that unwind out of the edit loop and panics.

use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

use crossterm::cursor::{MoveTo, Show};
use crossterm::terminal::{Clear, ClearType};

use crate::error::{EditorError, TerminalIoKind, TerminalResultExt};

#[derive(Debug)]
pub struct TerminalSession {
    /// Raw mode was switched on by us and must be switched off again
    raw_mode_enabled: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self, EditorError> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(EditorError::terminal(
                TerminalIoKind::HandleAcquisition,
                io::Error::other("stdin and stdout must both be a terminal"),
            ));
        }

        install_panic_hook();

        let already_raw =
            crossterm::terminal::is_raw_mode_enabled().terminal(TerminalIoKind::GetMode)?;
        if already_raw {
            tracing::warn!("Terminal was already in raw mode");
        }

        crossterm::terminal::enable_raw_mode().terminal(TerminalIoKind::SetMode)?;
        tracing::info!("Terminal raw mode enabled");

        // From here on Drop restores the terminal even if clearing fails
        let session = Self {
            raw_mode_enabled: !already_raw,
        };

        let mut stdout = io::stdout();
        crossterm::execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
            .terminal(TerminalIoKind::WriteOutput)?;

        Ok(session)
    }

    /// Current screen size as (columns, rows)
    pub fn size(&self) -> Result<(u16, u16), EditorError> {
        crossterm::terminal::size().terminal(TerminalIoKind::ScreenInfo)
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = crossterm::execute!(stdout, Show) {
            tracing::warn!("Failed to show cursor: {}", e);
        }
        if self.raw_mode_enabled {
            if let Err(e) = crossterm::terminal::disable_raw_mode() {
                tracing::warn!("Failed to disable raw mode: {}", e);
            }
            self.raw_mode_enabled = false;
        }
        let _ = stdout.flush();
        tracing::info!("Terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, Show);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}
