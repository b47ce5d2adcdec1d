use std::io::{self, Stdout, Write, stdout};
use std::panic;
use std::sync::Once;

use crossterm::cursor::Show;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::application::Result;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Switch to raw mode on the alternate screen. From here on a panic puts the
/// terminal back before the panic message is printed.
pub fn setup_terminal() -> Result<AppTerminal> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut out = stdout();
    crossterm::execute!(out, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(out))?;
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(out, LeaveAlternateScreen, Show)
}

/// Chain a hook in front of the current one. Installed at most once per
/// process, however many times the UI is started.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            // Best effort: the panic is reported either way
            let _ = leave_screen(&mut stdout());
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_screen_writes_reset_sequences() {
        let mut out = Vec::new();

        leave_screen(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "leaves the alternate screen");
        assert!(written.contains("\x1b[?25h"), "shows the cursor");
    }

    #[test]
    fn test_panic_hook_still_reports_panics() {
        install_panic_hook();
        install_panic_hook();

        let result = panic::catch_unwind(|| panic!("boom"));

        assert!(result.is_err());
        assert!(PANIC_HOOK.is_completed());
    }
}
