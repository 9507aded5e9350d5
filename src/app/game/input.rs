use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{EventResult, GameScreen};
use crate::kernel::Action;

impl GameScreen {
    pub(super) fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EventResult::Quit
            }
            KeyCode::Enter => {
                self.dispatch(Action::LockIn);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
