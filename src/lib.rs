//! Terminal Tetris (workspace facade crate).
//!
//! Re-exports the member crates under stable module names; the
//! implementation lives in dedicated crates under `crates/`.

pub use crt_tetris_core as core;
pub use crt_tetris_input as input;
pub use crt_tetris_term as term;
pub use crt_tetris_types as types;
