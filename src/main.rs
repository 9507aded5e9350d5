use std::io;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use gridlock::app::{EventResult, GameScreen};
use gridlock::core::InputEvent;
use gridlock::services::{runtime, DatamuseOracle, WordCheckService};
use gridlock::tui::session::{watch_termination_signals, TuiSession};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let _logging = gridlock::logging::init();

    let runtime = runtime::build_runtime()?;
    let oracle = DatamuseOracle::new().map_err(io::Error::other)?;
    let checker = WordCheckService::new(runtime.handle().clone(), Arc::new(oracle));

    let session = TuiSession::begin()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    let _signal_watcher = watch_termination_signals(session.restore_handle(), signal_tx)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut screen = GameScreen::new(checker);
    let mut dirty = true;

    loop {
        if signal_rx.try_recv().is_ok() {
            break;
        }

        if dirty {
            terminal.draw(|frame| screen.render(frame))?;
            dirty = false;
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            let input = InputEvent::from(event::read()?);
            match screen.handle_input(&input) {
                EventResult::Quit => break,
                EventResult::Consumed => dirty = true,
                EventResult::Ignored => {}
            }
        }

        dirty |= screen.tick();
    }

    session.finish()?;
    Ok(())
}
