//! Terminal rendering module.
//!
//! Draws the engine's [`crate::core::GameSnapshot`] onto a raw-mode
//! alternate screen with `crossterm`. Frame encoding is separated from
//! terminal I/O: [`GameView`] queues commands into a byte buffer and
//! [`Screen`] owns the terminal session and flushes buffers, so the
//! encoding side stays unit-testable.

pub mod screen;
pub mod theme;
pub mod view;

pub use crt_tetris_core as core;
pub use crt_tetris_types as types;

pub use screen::Screen;
pub use theme::{Rgb, Theme, THEMES};
pub use view::GameView;
