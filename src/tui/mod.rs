//! TUI integration layer (crossterm + ratatui). Kept apart from `kernel`
//! so the game rules never depend on terminal crates.

pub mod session;

pub use session::{RestoreOnce, TuiSession};
