use super::grid::{LetterGrid, GRID_SIZE};

pub const ROUND_SECONDS: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Terminal state: the clock hit zero and lock-in is disabled for good.
    TimeUp,
}

/// Validity marker for one column, refreshed on every lock-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMark {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

/// Transient drag gesture state. Created on a left press over a cell,
/// updated while dragging, consumed on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub row: usize,
    pub start_x: u16,
    /// Horizontal pointer delta in terminal cells. Cosmetic only; the grid
    /// data is untouched until release.
    pub offset: i32,
}

impl DragSession {
    pub fn new(row: usize, start_x: u16) -> Self {
        Self {
            row,
            start_x,
            offset: 0,
        }
    }
}

/// The whole game session. Everything mutable about a round lives here.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: LetterGrid,
    pub drag: Option<DragSession>,
    pub score: u32,
    pub remaining_secs: u32,
    pub phase: GamePhase,
    pub marks: [ColumnMark; GRID_SIZE],
    /// Id of the check currently in flight; messages carrying any other id
    /// are stale and dropped.
    pub active_check: Option<u64>,
    /// One-shot banner text (currently only "Time's up!").
    pub notice: Option<String>,
}

impl GameState {
    pub fn new(grid: LetterGrid) -> Self {
        Self {
            grid,
            drag: None,
            score: 0,
            remaining_secs: ROUND_SECONDS,
            phase: GamePhase::Playing,
            marks: [ColumnMark::Unchecked; GRID_SIZE],
            active_check: None,
            notice: None,
        }
    }

    pub fn lock_in_enabled(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn check_in_flight(&self) -> bool {
        self.active_check.is_some()
    }

    /// Remaining time as "m:ss" with zero-padded seconds.
    pub fn clock_text(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}
