//! Board behavior through the public workspace API.

use crt_tetris::core::Board;
use crt_tetris::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

fn default_board() -> Board {
    Board::new(GRID_WIDTH, GRID_HEIGHT)
}

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..board.width() as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = default_board();
    assert_eq!(board.width(), GRID_WIDTH);
    assert_eq!(board.height(), GRID_HEIGHT);
    assert_eq!(board.occupied_count(), 0);

    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert!(!board.is_occupied(x, y), "cell ({}, {}) occupied", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = default_board();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, GRID_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = default_board();
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(GRID_WIDTH as i8, 0, Some(PieceKind::T)));
}

#[test]
fn test_custom_dimensions() {
    let board = Board::new(6, 12);
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 12);
    assert_eq!(board.cells().len(), 72);
    assert_eq!(board.get(6, 0), None);
    assert_eq!(board.get(0, 12), None);
}

#[test]
fn test_clear_single_row_drops_everything_above() {
    let mut board = default_board();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(2, 18, Some(PieceKind::S));
    board.set(8, 15, Some(PieceKind::Z));

    let rows = board.full_rows();
    assert_eq!(rows.as_slice(), &[19]);
    board.clear_rows(&rows);

    assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(8, 16), Some(Some(PieceKind::Z)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_reduces_occupancy_by_width_per_row() {
    let mut board = default_board();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::O);
    }
    board.set(0, 15, Some(PieceKind::J));
    let before = board.occupied_count();

    let rows = board.full_rows();
    assert_eq!(rows.len(), 4);
    board.clear_rows(&rows);

    assert_eq!(
        board.occupied_count(),
        before - 4 * GRID_WIDTH as usize
    );
    // The survivor from row 15 fell to the floor.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
}

#[test]
fn test_clear_preserves_column_positions() {
    let mut board = default_board();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(0, 18, Some(PieceKind::L));
    board.set(4, 18, Some(PieceKind::T));
    board.set(9, 18, Some(PieceKind::J));

    board.clear_rows(&[19]);

    assert_eq!(board.get(0, 19), Some(Some(PieceKind::L)));
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 19), Some(None));
}

#[test]
fn test_reset_empties_the_board() {
    let mut board = default_board();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(3, 5, Some(PieceKind::T));
    board.reset();
    assert_eq!(board.occupied_count(), 0);
}
