//! gridlock: a terminal letter-grid word game.
//!
//! Module structure:
//! - kernel: headless rules (grid, session state, action/effect store)
//! - services: dictionary oracle port + adapters, async word check
//! - core: input primitives
//! - tui: terminal integration (session, signals)
//! - app: the interactive game screen

pub mod app;
pub mod core;
pub mod kernel;
pub mod logging;
pub mod services;
pub mod tui;
