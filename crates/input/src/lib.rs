//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and
//! provides a DAS/ARR auto-repeat handler that also works on terminals
//! without key-release events.

pub mod handler;
pub mod map;

pub use crt_tetris_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
