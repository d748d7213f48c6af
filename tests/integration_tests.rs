//! Full game flows through the public workspace API.

use crt_tetris::core::{Board, GameState, SequenceSupplier};
use crt_tetris::types::{AudioEvent, GameAction, GameConfig, PieceKind};

fn game_with(sequence: Vec<PieceKind>) -> GameState {
    GameState::with_supplier(
        GameConfig::default(),
        Box::new(SequenceSupplier::new(sequence)),
    )
}

/// Tick through the line-clear blink until the rows compact.
fn drain_blink(game: &mut GameState) {
    let interval = game.config().blink_interval;
    let mut guard = 0;
    while game.is_clearing() {
        game.tick(interval);
        guard += 1;
        assert!(guard < 100, "blink never completed");
    }
}

#[test]
fn test_first_piece_hard_drops_onto_the_floor() {
    let mut game = game_with(vec![PieceKind::I, PieceKind::O]);
    game.apply_action(GameAction::HardDrop);

    // A flat I spawned centered lands on row 19, columns 3..=6.
    for x in 3..=6 {
        assert!(game.board().is_occupied(x, 19));
    }
    assert_eq!(game.board().occupied_count(), 4);
    assert_eq!(game.active().unwrap().kind, PieceKind::O);
}

#[test]
fn test_vertical_i_clears_four_rows_for_a_tetris() {
    let mut board = Board::new(10, 20);
    for y in 16..20 {
        for x in 0..9 {
            board.set(x, y, Some(PieceKind::L));
        }
    }
    let mut game = GameState::from_parts(
        GameConfig::default(),
        board,
        Box::new(SequenceSupplier::new(vec![PieceKind::I, PieceKind::O])),
    );

    game.apply_action(GameAction::Rotate);
    while game.apply_action(GameAction::MoveRight) {}
    game.apply_action(GameAction::HardDrop);

    assert!(game.is_clearing());
    drain_blink(&mut game);

    assert_eq!(game.lines(), 4);
    assert_eq!(game.score(), 800);
    assert_eq!(game.board().occupied_count(), 0);

    let events = game.take_audio_events();
    assert!(events.contains(&AudioEvent::PieceLocked));
    assert!(events.contains(&AudioEvent::LinesCleared(4)));
}

#[test]
fn test_rotation_at_the_right_wall_is_rejected() {
    let mut game = game_with(vec![PieceKind::I, PieceKind::O]);
    game.apply_action(GameAction::Rotate);
    while game.apply_action(GameAction::MoveRight) {}

    let piece = game.active().unwrap();
    assert_eq!(piece.x, 9);
    let shape = piece.shape;

    // Back to horizontal would need four columns; only one is available.
    assert!(!game.apply_action(GameAction::Rotate));
    let piece = game.active().unwrap();
    assert_eq!(piece.shape, shape);
    assert_eq!(piece.x, 9);
}

#[test]
fn test_hold_swap_roundtrip() {
    let mut game = game_with(vec![
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
    ]);

    // First hold promotes the pending next piece.
    game.apply_action(GameAction::Hold);
    assert_eq!(game.hold_piece(), Some(PieceKind::I));
    assert_eq!(game.active().unwrap().kind, PieceKind::O);

    // The swap re-arms only after a lock.
    assert!(!game.apply_action(GameAction::Hold));
    game.apply_action(GameAction::HardDrop);

    game.apply_action(GameAction::Hold);
    assert_eq!(game.active().unwrap().kind, PieceKind::I);
    assert_eq!(game.hold_piece(), Some(PieceKind::T));
}

#[test]
fn test_blocked_spawn_ends_the_game_and_keeps_the_score() {
    let mut board = Board::new(10, 20);
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::L));
    }
    let mut game = GameState::from_parts(
        GameConfig::default(),
        board,
        Box::new(SequenceSupplier::new(vec![PieceKind::I])),
    );

    // One single-row clear for 100 points.
    game.apply_action(GameAction::Rotate);
    while game.apply_action(GameAction::MoveRight) {}
    game.apply_action(GameAction::HardDrop);
    drain_blink(&mut game);
    assert_eq!(game.score(), 100);

    // Stack vertical I pieces on the spawn column until nothing fits.
    let mut guard = 0;
    while !game.game_over() {
        game.apply_action(GameAction::Rotate);
        game.apply_action(GameAction::HardDrop);
        drain_blink(&mut game);
        guard += 1;
        assert!(guard < 50, "game never ended");
    }

    assert_eq!(game.score(), 100);
    assert!(game.snapshot().game_over);
}

#[test]
fn test_level_up_crosses_the_line_boundary_and_speeds_up() {
    let mut config = GameConfig::default();
    config.lines_per_level = 2;

    let mut board = Board::new(10, 20);
    for y in 18..20 {
        for x in 0..9 {
            board.set(x, y, Some(PieceKind::L));
        }
    }
    let mut game = GameState::from_parts(
        config,
        board,
        Box::new(SequenceSupplier::new(vec![PieceKind::I, PieceKind::O])),
    );
    let start_interval = game.fall_interval();

    game.apply_action(GameAction::Rotate);
    while game.apply_action(GameAction::MoveRight) {}
    game.apply_action(GameAction::HardDrop);
    drain_blink(&mut game);

    // Double clear at level 1: 300 points, then the boundary bumps the level.
    assert_eq!(game.lines(), 2);
    assert_eq!(game.score(), 300);
    assert_eq!(game.level(), 2);
    assert!((game.fall_interval() - start_interval * 0.8).abs() < 1e-6);
}

#[test]
fn test_pause_freezes_and_resume_continues_in_place() {
    let mut game = game_with(vec![PieceKind::T, PieceKind::L]);
    let interval = game.fall_interval();

    game.tick(interval);
    let y_before = game.active().unwrap().y;
    assert_eq!(y_before, 1);

    game.apply_action(GameAction::Pause);
    game.tick(interval * 20.0);
    assert_eq!(game.active().unwrap().y, y_before);

    game.apply_action(GameAction::Resume);
    game.tick(interval);
    assert_eq!(game.active().unwrap().y, y_before + 1);
}

#[test]
fn test_restart_starts_a_fresh_game() {
    let mut game = game_with(vec![PieceKind::I, PieceKind::O, PieceKind::T]);
    game.apply_action(GameAction::HardDrop);
    game.apply_action(GameAction::Hold);
    assert!(game.board().occupied_count() > 0);

    game.apply_action(GameAction::Restart);

    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.lines(), 0);
    assert!(game.hold_piece().is_none());
    assert!(!game.game_over());
    assert!(game.active().is_some());
}
