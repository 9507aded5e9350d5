/// Everything that can happen to the game session, as typed payloads.
/// Pointer coordinates and row indices are parsed at the input boundary;
/// by the time an action reaches the store it is already well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Left press landed on a cell of `row` at terminal column `x`.
    DragStart { row: usize, x: u16 },
    /// Pointer moved to terminal column `x` while a drag is active.
    DragMove { x: u16 },
    /// Left button released; rotates the dragged row right by one.
    DragRelease,
    /// The lock-in control was triggered (click or Enter).
    LockIn,
    /// One wall-clock second elapsed.
    SecondElapsed,
    /// Word checker verdict for a single column.
    ColumnChecked {
        check_id: u64,
        col: usize,
        valid: bool,
    },
    /// Word checker finished the whole pass; `total` is the summed length
    /// of all valid words.
    CheckFinished { check_id: u64, total: u32 },
    /// Word checker observed its cancellation flag and stopped early.
    CheckCancelled { check_id: u64 },
}
