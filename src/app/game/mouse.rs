use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{rect_contains, EventResult, GameScreen, CELL_H};
use crate::kernel::{Action, GRID_SIZE};

impl GameScreen {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self
                    .last_lockin_area
                    .is_some_and(|area| rect_contains(area, event.column, event.row))
                {
                    self.dispatch(Action::LockIn);
                    return EventResult::Consumed;
                }
                if let Some(row) = self.grid_row_at(event.column, event.row) {
                    self.dispatch(Action::DragStart {
                        row,
                        x: event.column,
                    });
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.state().drag.is_none() {
                    return EventResult::Ignored;
                }
                self.dispatch(Action::DragMove { x: event.column });
                EventResult::Consumed
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // Release without an active drag is a no-op downstream too,
                // but skipping the dispatch keeps the event uncounted.
                if self.state().drag.is_none() {
                    return EventResult::Ignored;
                }
                self.dispatch(Action::DragRelease);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Map a terminal position to the grid row it lands on, if any.
    fn grid_row_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.last_grid_area?;
        if !rect_contains(area, x, y) {
            return None;
        }
        let row = usize::from((y - area.y) / CELL_H);
        (row < GRID_SIZE).then_some(row)
    }
}
