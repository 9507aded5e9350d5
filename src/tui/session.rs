//! Terminal session handling for the game screen.
//!
//! Entering the game switches the terminal to raw mode on the alternate
//! screen, enables mouse capture for row dragging, and hides the cursor.
//! Every exit path funnels through the same [`RestoreOnce`] handle, so the
//! terminal is put back exactly once whether the round ends normally, the
//! process panics, or a signal arrives.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

fn enter_game_screen() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )
}

fn leave_game_screen() -> io::Result<()> {
    // Attempt every step even if one fails; a half-restored terminal is
    // still better than a raw one.
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    );
    raw.and(screen)
}

/// Cloneable once-only restore action. Clones share one flag, so the
/// signal thread and the main loop cannot both unwind the terminal.
#[derive(Clone)]
pub struct RestoreOnce {
    done: Arc<AtomicBool>,
    action: Arc<dyn Fn() -> io::Result<()> + Send + Sync>,
}

impl RestoreOnce {
    fn wrapping(action: impl Fn() -> io::Result<()> + Send + Sync + 'static) -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
            action: Arc::new(action),
        }
    }

    /// Run the restore action if no clone has run it yet.
    pub fn run(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        (self.action)()
    }
}

/// Owns the terminal for the lifetime of the game. Dropping it restores
/// the terminal unless something else already has.
pub struct TuiSession {
    restore: RestoreOnce,
}

impl TuiSession {
    pub fn begin() -> io::Result<Self> {
        Self::with_actions(enter_game_screen, leave_game_screen)
    }

    fn with_actions(
        enter: impl FnOnce() -> io::Result<()>,
        leave: impl Fn() -> io::Result<()> + Send + Sync + 'static,
    ) -> io::Result<Self> {
        enter()?;
        Ok(Self {
            restore: RestoreOnce::wrapping(leave),
        })
    }

    /// A handle the signal watcher can use to restore from its own thread.
    pub fn restore_handle(&self) -> RestoreOnce {
        self.restore.clone()
    }

    /// End the session, surfacing any restore error.
    pub fn finish(self) -> io::Result<()> {
        self.restore.run()
    }
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        let _ = self.restore.run();
    }
}

/// Conventional exit code for a signal-terminated process.
pub fn signal_exit_code(signo: i32) -> i32 {
    128 + signo
}

/// Watch SIGINT and SIGTERM. The first signal is forwarded over `tx` so
/// the main loop can quit cleanly; if the process is still alive after a
/// short grace period the watcher restores the terminal itself and exits
/// with the 128+signo convention.
#[cfg(unix)]
pub fn watch_termination_signals(
    restore: RestoreOnce,
    tx: std::sync::mpsc::Sender<i32>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    const GRACE: Duration = Duration::from_secs(2);

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        if let Some(signo) = signals.forever().next() {
            let _ = tx.send(signo);
            std::thread::sleep(GRACE);
            let _ = restore.run();
            std::process::exit(signal_exit_code(signo));
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/session.rs"]
mod tests;
