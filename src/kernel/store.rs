use super::grid::GRID_SIZE;
use super::state::{ColumnMark, DragSession, GamePhase, GameState};
use super::{Action, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: true,
        }
    }
}

pub struct Store {
    state: GameState,
    next_check_id: u64,
}

impl Store {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            next_check_id: 1,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::DragStart { row, x } => self.drag_start(row, x),
            Action::DragMove { x } => self.drag_move(x),
            Action::DragRelease => self.drag_release(),
            Action::LockIn => self.lock_in(),
            Action::SecondElapsed => self.second_elapsed(),
            Action::ColumnChecked {
                check_id,
                col,
                valid,
            } => self.column_checked(check_id, col, valid),
            Action::CheckFinished { check_id, total } => self.check_finished(check_id, total),
            Action::CheckCancelled { check_id } => self.check_cancelled(check_id),
        }
    }

    fn drag_start(&mut self, row: usize, x: u16) -> DispatchResult {
        if row >= GRID_SIZE {
            return DispatchResult::unchanged();
        }
        if self.state.drag.is_some() {
            // A second press while a row is already in hand is ignored;
            // replacing the session would discard the pending rotation.
            tracing::debug!(row, "ignoring drag start while another drag is active");
            return DispatchResult::unchanged();
        }
        self.state.drag = Some(DragSession::new(row, x));
        DispatchResult::changed()
    }

    fn drag_move(&mut self, x: u16) -> DispatchResult {
        let Some(drag) = self.state.drag.as_mut() else {
            return DispatchResult::unchanged();
        };
        let offset = i32::from(x) - i32::from(drag.start_x);
        if drag.offset == offset {
            return DispatchResult::unchanged();
        }
        drag.offset = offset;
        DispatchResult::changed()
    }

    fn drag_release(&mut self) -> DispatchResult {
        // Release without a preceding press is a no-op.
        let Some(drag) = self.state.drag.take() else {
            return DispatchResult::unchanged();
        };
        self.state.grid.rotate_row_right(drag.row);
        DispatchResult::changed()
    }

    fn lock_in(&mut self) -> DispatchResult {
        if !self.state.lock_in_enabled() {
            tracing::debug!("lock-in ignored: round is over");
            return DispatchResult::unchanged();
        }
        if self.state.check_in_flight() {
            tracing::debug!("lock-in ignored: check already in flight");
            return DispatchResult::unchanged();
        }

        let check_id = self.next_check_id;
        self.next_check_id += 1;
        self.state.active_check = Some(check_id);
        self.state.marks = [ColumnMark::Unchecked; GRID_SIZE];

        DispatchResult {
            effects: vec![Effect::CheckWords {
                check_id,
                grid: self.state.grid.clone(),
            }],
            state_changed: true,
        }
    }

    fn second_elapsed(&mut self) -> DispatchResult {
        if self.state.remaining_secs == 0 {
            return DispatchResult::unchanged();
        }
        self.state.remaining_secs -= 1;
        if self.state.remaining_secs > 0 {
            return DispatchResult::changed();
        }

        // Terminal transition: lock-in is disabled for good and any check
        // still in flight must not land a late score.
        self.state.phase = GamePhase::TimeUp;
        self.state.notice = Some("Time's up!".to_string());
        let effects = if self.state.check_in_flight() {
            vec![Effect::CancelCheck]
        } else {
            Vec::new()
        };
        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn column_checked(&mut self, check_id: u64, col: usize, valid: bool) -> DispatchResult {
        if self.state.active_check != Some(check_id) || col >= GRID_SIZE {
            tracing::debug!(check_id, col, "dropping stale column verdict");
            return DispatchResult::unchanged();
        }
        self.state.marks[col] = if valid {
            ColumnMark::Valid
        } else {
            ColumnMark::Invalid
        };
        DispatchResult::changed()
    }

    fn check_finished(&mut self, check_id: u64, total: u32) -> DispatchResult {
        if self.state.active_check != Some(check_id) {
            tracing::debug!(check_id, "dropping stale check result");
            return DispatchResult::unchanged();
        }
        self.state.active_check = None;
        self.state.score += total;
        DispatchResult::changed()
    }

    fn check_cancelled(&mut self, check_id: u64) -> DispatchResult {
        if self.state.active_check != Some(check_id) {
            return DispatchResult::unchanged();
        }
        self.state.active_check = None;
        DispatchResult::changed()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
