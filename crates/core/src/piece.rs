//! The active falling piece.

use crt_tetris_types::PieceKind;

use crate::shape::{base_shape, ShapeMatrix};

/// A piece instance: shape matrix, immutable kind tag, and the grid position
/// of the matrix's top-left corner.
///
/// Exactly one active piece exists while the game is running; it is created
/// at spawn and consumed when it locks into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position: horizontally centered at the
    /// top of a grid `grid_width` columns wide.
    pub fn spawn(kind: PieceKind, grid_width: u8) -> Self {
        let shape = base_shape(kind);
        Self {
            kind,
            shape,
            x: (grid_width / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }

    /// Iterate the piece's filled cells in absolute grid coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
