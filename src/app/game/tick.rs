use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use super::{GameScreen, MAX_CHECK_DRAIN_PER_TICK, TICK_INTERVAL};
use crate::kernel::Action;
use crate::services::CheckMessage;

impl GameScreen {
    /// Called once per main-loop iteration: drains pending check verdicts
    /// and drives the once-per-second countdown.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.poll_check_messages();
        changed |= self.poll_clock();
        changed
    }

    fn poll_clock(&mut self) -> bool {
        let mut changed = false;
        // Catch up if the loop stalled past more than one tick boundary.
        while Instant::now() >= self.next_tick_at {
            self.next_tick_at += TICK_INTERVAL;
            changed |= self.dispatch(Action::SecondElapsed);
        }
        changed
    }

    fn poll_check_messages(&mut self) -> bool {
        let Some(rx) = self.check_rx.take() else {
            return false;
        };

        let mut changed = false;
        let mut done = false;
        let mut disconnected = false;
        let mut drained = 0usize;

        loop {
            if drained >= MAX_CHECK_DRAIN_PER_TICK {
                break;
            }
            match rx.try_recv() {
                Ok(msg) => {
                    drained += 1;
                    done = matches!(
                        msg,
                        CheckMessage::Finished { .. } | CheckMessage::Cancelled { .. }
                    );
                    changed |= self.apply_check_message(msg);
                    if done {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if done || disconnected {
            self.check_task = None;
        } else {
            self.check_rx = Some(rx);
        }

        // A dropped sender without a terminal message means the task died;
        // unblock lock-in instead of waiting forever.
        if disconnected && !done {
            if let Some(check_id) = self.state().active_check {
                tracing::warn!(check_id, "check channel disconnected mid-pass");
                changed |= self.dispatch(Action::CheckCancelled { check_id });
            }
        }

        changed
    }

    fn apply_check_message(&mut self, msg: CheckMessage) -> bool {
        let action = match msg {
            CheckMessage::Column {
                check_id,
                col,
                valid,
                ..
            } => Action::ColumnChecked {
                check_id,
                col,
                valid,
            },
            CheckMessage::Finished { check_id, total } => Action::CheckFinished { check_id, total },
            CheckMessage::Cancelled { check_id } => Action::CheckCancelled { check_id },
        };
        self.dispatch(action)
    }
}
