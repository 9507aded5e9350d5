//! Headless game core (state/action/effect). No terminal or network types
//! live here so the rules can be driven entirely from tests.

pub mod action;
pub mod effect;
pub mod grid;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use grid::{LetterGrid, CONSONANTS, GRID_SIZE, MIN_WORD_LEN, VOWELS, VOWEL_BIAS};
pub use state::{ColumnMark, DragSession, GamePhase, GameState, ROUND_SECONDS};
pub use store::{DispatchResult, Store};
