//! Immutable render snapshot.
//!
//! Produced by the engine after every state-changing operation; the
//! rendering and audio collaborators only ever read these, never the live
//! state. `snapshot_into` reuses the destination's board allocation so the
//! per-frame path stays allocation-free.

use arrayvec::ArrayVec;

use crt_tetris_types::{Cell, PieceKind};

use crate::board::MAX_CLEARED_ROWS;
use crate::shape::ShapeMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePieceSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActivePieceSnapshot {
    /// Filled cells in absolute grid coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// The blink sub-state during a line clear: which rows are flashing and
/// whether the current pass shows the highlight color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClearSnapshot {
    pub rows: ArrayVec<usize, MAX_CLEARED_ROWS>,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major locked cells, `width * height` entries.
    pub board: Vec<Cell>,
    pub active: Option<ActivePieceSnapshot>,
    pub next: PieceKind,
    pub hold: Option<PieceKind>,
    pub clearing: Option<LineClearSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            board: vec![None; width as usize * height as usize],
            active: None,
            next: PieceKind::I,
            hold: None,
            clearing: None,
            score: 0,
            level: 0,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }

    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }
}
