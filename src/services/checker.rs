//! Asynchronous word check.
//!
//! One check walks the seven columns in order, awaiting each oracle lookup,
//! and streams per-column verdicts back over an mpsc channel. The returned
//! [`CheckTask`] carries a cancellation flag; a cancelled check reports
//! `Cancelled` instead of a final score.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::kernel::grid::{LetterGrid, GRID_SIZE, MIN_WORD_LEN};

use super::oracle::{entries_confirm, WordOracle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckMessage {
    Column {
        check_id: u64,
        col: usize,
        word: String,
        valid: bool,
    },
    Finished {
        check_id: u64,
        total: u32,
    },
    Cancelled {
        check_id: u64,
    },
}

/// Handle to an in-flight check.
pub struct CheckTask {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

impl CheckTask {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

pub struct WordCheckService {
    runtime: tokio::runtime::Handle,
    oracle: Arc<dyn WordOracle>,
}

impl WordCheckService {
    pub fn new(runtime: tokio::runtime::Handle, oracle: Arc<dyn WordOracle>) -> Self {
        Self { runtime, oracle }
    }

    /// Check every column of `grid`, sequentially. Verdicts stream over `tx`
    /// as they arrive; `Finished` carries the summed length of all valid
    /// words. The cancellation flag is observed between columns.
    pub fn check(&self, check_id: u64, grid: LetterGrid, tx: Sender<CheckMessage>) -> CheckTask {
        let task = CheckTask {
            id: check_id,
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        let cancelled = Arc::clone(&task.cancelled);
        let oracle = Arc::clone(&self.oracle);

        self.runtime.spawn(async move {
            let mut total = 0u32;
            for col in 0..GRID_SIZE {
                if cancelled.load(Ordering::Relaxed) {
                    let _ = tx.send(CheckMessage::Cancelled { check_id });
                    return;
                }

                let word = grid.column_word(col);
                let valid = if !qualifies(&word) {
                    // Too short to ever be queried.
                    false
                } else {
                    match oracle.lookup(&word).await {
                        Ok(entries) => entries_confirm(&word, &entries),
                        Err(err) => {
                            tracing::warn!(
                                col,
                                word = %word,
                                error = %err,
                                "oracle lookup failed; treating column as invalid"
                            );
                            false
                        }
                    }
                };

                if valid {
                    total += word.len() as u32;
                }
                let _ = tx.send(CheckMessage::Column {
                    check_id,
                    col,
                    word,
                    valid,
                });
            }

            if cancelled.load(Ordering::Relaxed) {
                let _ = tx.send(CheckMessage::Cancelled { check_id });
            } else {
                let _ = tx.send(CheckMessage::Finished { check_id, total });
            }
        });

        task
    }
}

/// Candidates below the minimum length never reach the oracle.
fn qualifies(word: &str) -> bool {
    word.len() >= MIN_WORD_LEN
}

#[cfg(test)]
#[path = "../../tests/unit/services/checker.rs"]
mod tests;
