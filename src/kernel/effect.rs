use super::grid::LetterGrid;

/// Side effects requested by the store. The store itself never touches the
/// network or the runtime; the app layer executes these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start an asynchronous word check over a snapshot of the grid.
    CheckWords { check_id: u64, grid: LetterGrid },
    /// Cancel the in-flight check, if any.
    CancelCheck,
}
