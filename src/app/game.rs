//! The interactive game screen: owns the store and the word-check service,
//! routes input, executes effects, and renders every frame.

use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::core::InputEvent;
use crate::kernel::{Action, Effect, GameState, LetterGrid, Store};
use crate::services::{CheckMessage, CheckTask, WordCheckService};

mod input;
mod mouse;
mod render;
mod tick;


/// Terminal cells per grid cell.
pub(crate) const CELL_W: u16 = 5;
pub(crate) const CELL_H: u16 = 3;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const MAX_CHECK_DRAIN_PER_TICK: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

pub struct GameScreen {
    store: Store,
    checker: WordCheckService,
    check_task: Option<CheckTask>,
    check_rx: Option<Receiver<CheckMessage>>,
    next_tick_at: Instant,
    // Hit-test targets recorded by the last render.
    last_grid_area: Option<Rect>,
    last_lockin_area: Option<Rect>,
}

impl GameScreen {
    pub fn new(checker: WordCheckService) -> Self {
        let mut rng = fastrand::Rng::new();
        Self::with_state(GameState::new(LetterGrid::generate(&mut rng)), checker)
    }

    pub fn with_state(state: GameState, checker: WordCheckService) -> Self {
        Self {
            store: Store::new(state),
            checker,
            check_task: None,
            check_rx: None,
            next_tick_at: Instant::now() + TICK_INTERVAL,
            last_grid_area: None,
            last_lockin_area: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(_, _) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    pub(crate) fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::CheckWords { check_id, grid } => {
                let (tx, rx) = mpsc::channel();
                self.check_task = Some(self.checker.check(check_id, grid, tx));
                self.check_rx = Some(rx);
            }
            Effect::CancelCheck => {
                if let Some(task) = &self.check_task {
                    task.cancel();
                }
            }
        }
    }
}

pub(crate) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
