pub mod game;

pub use game::{EventResult, GameScreen};
