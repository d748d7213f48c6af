//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed (or injected piece sequence) produces
//!   identical games
//! - **Testable**: Every rule is exercised by unit tests against small
//!   hand-built boards
//! - **Portable**: Runs in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: The locked-cell grid with full-row detection and compaction
//! - [`collide`]: Placement validation (walls, floor, occupancy)
//! - [`game`]: Complete game state, the phase machine, and event emission
//! - [`piece`]: The active piece (kind + orientation matrix + position)
//! - [`scoring`]: Score, level, and fall-speed progression
//! - [`shape`]: Tetromino matrices and clockwise rotation
//! - [`snapshot`]: Immutable render view handed to the front end
//! - [`supply`]: Piece supply seam with a seeded uniform random default
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: Each spawn draws one of the 7 kinds uniformly
//! - **In-place Rotation**: Clockwise only, no wall kicks; a rotation that
//!   does not fit is discarded
//! - **Hold**: Store one piece for later use (once per piece), with a
//!   best-effort nudge if the swapped-in piece does not fit at spawn
//! - **Line Clears**: Full rows blink for a few timed passes before they
//!   compact; scoring is the classic 100/300/500/800 table times the level
//!
//! # Example
//!
//! ```
//! use crt_tetris_core::GameState;
//! use crt_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The first piece is locked and the next one is already falling.
//! assert!(game.board().occupied_count() > 0);
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! The engine is driven by [`GameState::tick`] with elapsed seconds; the
//! front end runs it at 60 Hz. Gravity advances one row per fall interval,
//! which starts at 0.56s and shrinks by level. Input handed to
//! [`GameState::apply_action`] before the tick always takes effect before
//! gravity does.

pub mod board;
pub mod collide;
pub mod game;
pub mod piece;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod supply;

pub use crt_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collide::{shape_fits, valid_move};
pub use game::GameState;
pub use piece::Piece;
pub use scoring::Progress;
pub use shape::{base_shape, ShapeMatrix};
pub use snapshot::{ActivePieceSnapshot, GameSnapshot, LineClearSnapshot};
pub use supply::{PieceSupplier, RandomSupplier, SequenceSupplier, SimpleRng};
