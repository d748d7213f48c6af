//! Collision validator.
//!
//! Pure placement checks consulted before every positional or rotational
//! mutation. The board never sees out-of-range queries; all bounds handling
//! lives here.

use crate::board::Board;
use crate::piece::Piece;
use crate::shape::ShapeMatrix;

/// Whether `shape` fits at `(x, y)`: every filled cell must land inside the
/// horizontal bounds and above the floor, and must not overlap a locked
/// cell. Cells above the visible grid (y < 0) are allowed so pieces may
/// hang partially off the top.
pub fn shape_fits(board: &Board, shape: &ShapeMatrix, x: i8, y: i8) -> bool {
    for (dx, dy) in shape.filled_cells() {
        let nx = x + dx;
        let ny = y + dy;
        if nx < 0 || nx >= board.width() as i8 || ny >= board.height() as i8 {
            return false;
        }
        if ny >= 0 && board.is_occupied(nx, ny) {
            return false;
        }
    }
    true
}

/// Whether moving `piece` by `(dx, dy)` results in a legal placement.
pub fn valid_move(board: &Board, piece: &Piece, dx: i8, dy: i8) -> bool {
    shape_fits(board, &piece.shape, piece.x + dx, piece.y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crt_tetris_types::PieceKind;

    #[test]
    fn spawn_placement_on_empty_board_is_valid() {
        let board = Board::new(10, 20);
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind, 10);
            assert!(valid_move(&board, &piece, 0, 0), "{:?}", kind);
        }
    }

    #[test]
    fn walls_and_floor_reject_moves() {
        let board = Board::new(10, 20);
        let mut piece = Piece::spawn(PieceKind::O, 10);

        piece.x = 0;
        assert!(!valid_move(&board, &piece, -1, 0));
        piece.x = 8; // O is 2 wide
        assert!(!valid_move(&board, &piece, 1, 0));
        piece.y = 18; // O is 2 tall
        assert!(!valid_move(&board, &piece, 0, 1));
    }

    #[test]
    fn locked_cells_reject_overlap() {
        let mut board = Board::new(10, 20);
        board.set(4, 1, Some(PieceKind::Z));
        let piece = Piece::spawn(PieceKind::O, 10); // covers (4..=5, 0..=1)
        assert!(!valid_move(&board, &piece, 0, 0));
        assert!(valid_move(&board, &piece, 2, 0));
    }

    #[test]
    fn cells_above_the_grid_are_exempt_from_occupancy() {
        let mut board = Board::new(10, 20);
        // Fill the whole top row; a piece hanging above it must still be
        // legal as long as its in-grid cells are clear.
        for x in 0..10 {
            board.set(x, 0, Some(PieceKind::I));
        }
        let mut piece = Piece::spawn(PieceKind::O, 10);
        piece.y = -2;
        assert!(valid_move(&board, &piece, 0, 0));
        // One row lower its bottom half enters the occupied row.
        assert!(!valid_move(&board, &piece, 0, 1));
    }
}
