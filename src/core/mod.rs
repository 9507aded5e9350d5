//! Input primitives shared between the terminal layer and the app.

pub mod event;

pub use event::InputEvent;
