//! Terminal Tetris runner (default binary).
//!
//! Drives the deterministic engine at a fixed 60 Hz tick: pending input is
//! applied first, then gravity, then the frame is redrawn from a snapshot.
//! `t` cycles the color theme, `q` or Ctrl-C quits.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crt_tetris::core::{GameSnapshot, GameState};
use crt_tetris::input::{handle_key_event, should_quit, InputHandler};
use crt_tetris::term::{GameView, Screen, THEMES};
use crt_tetris::types::{AudioEvent, GameAction, TICK_MS, TICK_SECONDS};

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ elapsed.as_secs() as u32,
        Err(_) => 1,
    }
}

fn run(screen: &mut Screen) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let view = GameView::new();
    let mut input_handler = InputHandler::new();
    let mut theme_idx = 0usize;

    let board = game.board();
    let mut snap = GameSnapshot::new(board.width(), board.height());

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let size = screen.size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        screen.present(|buf| view.encode_frame(&snap, &THEMES[theme_idx], size, buf))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if matches!(key.code, KeyCode::Char('t') | KeyCode::Char('T')) {
                            theme_idx = (theme_idx + 1) % THEMES.len();
                            continue;
                        }

                        if let Some(action) = input_handler.handle_key_press(key.code) {
                            game.apply_action(action);
                        }

                        if let Some(action) = handle_key_event(key) {
                            match action {
                                GameAction::MoveLeft
                                | GameAction::MoveRight
                                | GameAction::SoftDrop => {
                                    // Handled by the DAS/ARR handler above.
                                }
                                GameAction::Pause => {
                                    let toggled = if game.paused() {
                                        GameAction::Resume
                                    } else {
                                        GameAction::Pause
                                    };
                                    game.apply_action(toggled);
                                    input_handler.reset();
                                }
                                other => {
                                    game.apply_action(other);
                                }
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Terminal auto-repeat is ignored; DAS/ARR owns repeats.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input_handler.update(TICK_MS) {
                game.apply_action(action);
            }
            game.tick(TICK_SECONDS);

            for audio in game.take_audio_events() {
                if matches!(audio, AudioEvent::LinesCleared(_)) {
                    screen.bell()?;
                }
            }
        }
    }
}
